//! Page-window arithmetic for the server-paginated catalog.

/// The page currently displayed: a 1-indexed page number plus the fixed page
/// size. Defines which global positions are visible for per-row decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-indexed page number.
    pub page: usize,
    /// Number of records per page.
    pub page_size: usize,
}

impl PageWindow {
    /// Create a window for `page` (1-indexed) with `page_size` rows.
    #[must_use]
    pub const fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// What: 1-indexed rank of a row across the entire ordered dataset.
    ///
    /// Inputs:
    /// - `index_on_page`: 0-indexed position of the row within this window.
    ///
    /// Output:
    /// - `(page − 1) × page_size + index + 1`.
    ///
    /// Details:
    /// - The ordering is server-defined; it is trusted, not re-verified,
    ///   across fetches.
    #[must_use]
    pub const fn global_position(self, index_on_page: usize) -> usize {
        self.page.saturating_sub(1) * self.page_size + index_on_page + 1
    }
}

/// Number of pages needed to show `total` records at `page_size` per page.
#[must_use]
pub const fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_position_is_one_indexed() {
        let w = PageWindow::new(1, 12);
        assert_eq!(w.global_position(0), 1);
        assert_eq!(w.global_position(11), 12);
    }

    #[test]
    fn global_position_spans_pages() {
        let w = PageWindow::new(2, 12);
        assert_eq!(w.global_position(0), 13);
        assert_eq!(w.global_position(1), 14);
        assert_eq!(PageWindow::new(5, 12).global_position(3), 52);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 12), 0);
        assert_eq!(page_count(1, 12), 1);
        assert_eq!(page_count(12, 12), 1);
        assert_eq!(page_count(13, 12), 2);
        assert_eq!(page_count(50, 12), 5);
        assert_eq!(page_count(50, 0), 0);
    }
}
