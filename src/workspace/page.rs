/// Page cursor over a newest-first list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    items_per_page: usize,
}

impl Pager {
    /// Start on the first page; a zero page size is treated as 1
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 0,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Index of the first item on the current page
    pub fn offset(&self) -> usize {
        self.current_page * self.items_per_page
    }

    /// Number of pages needed for `total` items
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.items_per_page)
    }

    pub fn has_next_page(&self, total: usize) -> bool {
        total > (self.current_page + 1) * self.items_per_page
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 0
    }

    /// Advance one page if there is one; returns whether the page changed
    pub fn next_page(&mut self, total: usize) -> bool {
        if self.has_next_page(total) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page if possible; returns whether the page changed
    pub fn previous_page(&mut self) -> bool {
        if self.has_previous_page() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page`, clamped to the last page holding items
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.current_page = page;
        self.clamp(total);
    }

    /// Pull the cursor back onto the last page after items were removed
    pub fn clamp(&mut self, total: usize) {
        let last_page = self.page_count(total).saturating_sub(1);
        if self.current_page > last_page {
            self.current_page = last_page;
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 0;
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod page_tests {
    use super::*;

    #[test]
    fn test_has_next_page_boundary() {
        let pager = Pager::new(5);
        assert!(!pager.has_next_page(0));
        assert!(!pager.has_next_page(5));
        assert!(pager.has_next_page(6));
    }

    #[test]
    fn test_moves_stay_in_range() {
        let mut pager = Pager::new(5);
        let total = 12; // pages 0..=2

        assert!(!pager.previous_page());
        assert_eq!(pager.current_page(), 0);

        assert!(pager.next_page(total));
        assert!(pager.next_page(total));
        assert!(!pager.next_page(total));
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.offset(), 10);

        assert!(pager.previous_page());
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut pager = Pager::new(5);
        pager.go_to(2, 11);
        assert_eq!(pager.current_page(), 2);

        pager.clamp(10);
        assert_eq!(pager.current_page(), 1);

        pager.clamp(0);
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn test_go_to_past_end_is_clamped() {
        let mut pager = Pager::new(3);
        pager.go_to(9, 7);
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.page_count(7), 3);
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let pager = Pager::new(0);
        assert_eq!(pager.items_per_page(), 1);
    }
}
