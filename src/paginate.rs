//! Chunk pagination over materialized result sequences

/// Split a slice into fixed-size pages.
///
/// The returned iterator is lazy and restartable (it can be cloned and
/// re-run); the final page may be shorter than `page_size`. A page size of 0
/// is clamped to 1 so the sequence always stays finite.
///
/// # Example
///
/// ```
/// use lexidb::paginate;
///
/// let items = [10, 20, 30, 40, 50];
/// let pages: Vec<&[i32]> = paginate(&items, 2).collect();
/// assert_eq!(pages, vec![&items[0..2], &items[2..4], &items[4..5]]);
/// ```
pub fn paginate<T>(items: &[T], page_size: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(page_size.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn test_even_split() {
        let items = [1, 2, 3, 4];
        let pages: Vec<&[i32]> = paginate(&items, 2).collect();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], &[1, 2]);
        assert_eq!(pages[1], &[3, 4]);
    }

    #[test]
    fn test_final_page_shorter() {
        let items = [1, 2, 3, 4, 5];
        let pages: Vec<&[i32]> = paginate(&items, 3).collect();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1], &[4, 5]);
    }

    #[test]
    fn test_page_larger_than_input() {
        let items = [1, 2];
        let pages: Vec<&[i32]> = paginate(&items, 10).collect();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0], &[1, 2]);
    }

    #[test]
    fn test_empty_input_has_no_pages() {
        let items: [i32; 0] = [];
        assert_eq!(paginate(&items, 3).count(), 0);
    }

    #[test]
    fn test_zero_page_size_clamped() {
        let items = [1, 2, 3];
        let pages: Vec<&[i32]> = paginate(&items, 0).collect();
        assert_eq!(pages.len(), 3);
    }

    #[test]
    fn test_restartable() {
        let items = [1, 2, 3, 4, 5, 6];
        let pages = paginate(&items, 2);
        assert_eq!(pages.clone().count(), 3);
        assert_eq!(pages.count(), 3);
    }

    #[test]
    fn test_paginates_search_results() {
        let results: Vec<Document> = (0..5).map(|id| Document::new(id, 0.0, 0)).collect();
        let pages: Vec<&[Document]> = paginate(&results, 2).collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2][0].id, 4);
    }
}
