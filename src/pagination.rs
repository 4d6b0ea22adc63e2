//! Page strip for the paginated admin tables.

use serde::Serialize;

/// Page numbers to show, `None` marking a gap.
fn page_strip(
    last_page: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    if last_page == 0 {
        return vec![];
    }
    let current_page = current_page.min(last_page);

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Number of pages needed for `total` rows, `0` for an empty listing.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    /// Rows matching the query across all pages.
    pub total: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total: usize, per_page: usize) -> Self {
        let current_page = current_page.max(1);

        let pages = page_strip(page_count(total, per_page), current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 20), 0);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn short_listing_shows_every_page() {
        let paginated = Paginated::new(vec![1, 2], 1, 45, 20);

        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(paginated.total, 45);
    }

    #[test]
    fn long_listing_collapses_gaps() {
        let paginated = Paginated::<u8>::new(vec![], 10, 400, 20);

        assert_eq!(
            paginated.pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn page_zero_is_treated_as_first() {
        let paginated = Paginated::<u8>::new(vec![], 0, 0, 20);
        assert_eq!(paginated.page, 1);
        assert!(paginated.pages.is_empty());
    }

    #[test]
    fn page_past_the_end_keeps_edges() {
        let paginated = Paginated::<u8>::new(vec![], usize::MAX, 40, 20);

        assert_eq!(paginated.page, usize::MAX);
        assert_eq!(paginated.pages, vec![Some(1), Some(2)]);

        let beyond = Paginated::<u8>::new(vec![], 50, 400, 20);
        assert_eq!(
            beyond.pages,
            vec![Some(1), Some(2), None, Some(18), Some(19), Some(20)]
        );
    }
}
