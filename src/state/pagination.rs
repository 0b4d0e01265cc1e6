use std::ops::Range;

use super::hover::GridConfig;

/// Delay before a burst of resize events is turned into a new layout.
pub const RESIZE_DEBOUNCE_MS: u64 = 100;

const NARROW_WIDTH: f64 = 640.0;
const SHORT_HEIGHT: f64 = 750.0;
const MEDIUM_MAX_WIDTH: f64 = 1024.0;
const WIDE_GRID_MIN_WIDTH: f64 = 768.0;

/// Items per page for a viewport, smallest tier first.
pub fn page_size_for(width: f64, height: f64) -> usize {
    if width < NARROW_WIDTH || height < SHORT_HEIGHT {
        2
    } else if width <= MEDIUM_MAX_WIDTH {
        4
    } else {
        8
    }
}

pub fn columns_for(width: f64) -> usize {
    if width >= WIDE_GRID_MIN_WIDTH {
        4
    } else {
        2
    }
}

/// Page size and column count derived together from one viewport reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub page_size: usize,
    pub columns: usize,
    pub wide: bool,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            page_size: 8,
            columns: 4,
            wide: true,
        }
    }
}

impl GridLayout {
    pub fn for_viewport(width: f64, height: f64) -> Self {
        Self {
            page_size: page_size_for(width, height),
            columns: columns_for(width),
            wide: width >= WIDE_GRID_MIN_WIDTH,
        }
    }

    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            items_per_page: self.page_size,
            columns_per_row: self.columns,
            wide: self.wide,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    page_size: usize,
    total: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            current: 0,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.total_pages()
    }

    /// Clamps to the valid range; does nothing when there is only one page.
    pub fn go_to_page(&mut self, page: usize) {
        let pages = self.total_pages();
        if pages <= 1 {
            return;
        }
        self.current = page.min(pages - 1);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current + 1);
    }

    pub fn prev_page(&mut self) {
        if let Some(page) = self.current.checked_sub(1) {
            self.go_to_page(page);
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp();
    }

    fn clamp(&mut self) {
        let pages = self.total_pages();
        if self.current >= pages {
            self.current = pages.saturating_sub(1);
        }
    }

    pub fn page_range(&self) -> Range<usize> {
        let start = (self.current * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.page_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Empty cells needed after the current page so the grid keeps its shape.
    pub fn placeholder_slots(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.page_size - self.page_range().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_tiers() {
        assert_eq!(page_size_for(375.0, 812.0), 2);
        assert_eq!(page_size_for(1440.0, 700.0), 2);
        assert_eq!(page_size_for(800.0, 1000.0), 4);
        assert_eq!(page_size_for(1024.0, 900.0), 4);
        assert_eq!(page_size_for(1025.0, 900.0), 8);
        assert_eq!(page_size_for(1920.0, 1080.0), 8);
    }

    #[test]
    fn test_layout_columns() {
        let phone = GridLayout::for_viewport(390.0, 844.0);
        assert_eq!(phone.columns, 2);
        assert!(!phone.wide);
        let desktop = GridLayout::for_viewport(1440.0, 900.0);
        assert_eq!(desktop.page_size, 8);
        assert_eq!(desktop.columns, 4);
        assert_eq!(desktop.grid_config().total_rows(), 2);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for total in 0..40 {
            for size in 1..10 {
                let mut p = Pagination::new(size);
                p.set_total(total);
                assert_eq!(p.total_pages(), total.div_ceil(size), "{total}/{size}");
            }
        }
        let mut empty = Pagination::new(8);
        empty.set_total(0);
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut p = Pagination::new(4);
        p.set_total(10);
        p.go_to_page(99);
        assert_eq!(p.current_page(), 2);
        p.go_to_page(1);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_single_page_ignores_navigation() {
        let mut p = Pagination::new(8);
        p.set_total(5);
        p.go_to_page(1);
        p.next_page();
        assert_eq!(p.current_page(), 0);
    }

    #[test]
    fn test_next_prev_stop_at_bounds() {
        let mut p = Pagination::new(2);
        p.set_total(5);
        p.prev_page();
        assert_eq!(p.current_page(), 0);
        p.next_page();
        p.next_page();
        assert_eq!(p.current_page(), 2);
        assert!(p.is_last());
        p.next_page();
        assert_eq!(p.current_page(), 2);
        p.prev_page();
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_shrinking_total_clamps_current() {
        let mut p = Pagination::new(2);
        p.set_total(10);
        p.go_to_page(4);
        p.set_total(3);
        assert_eq!(p.current_page(), 1);
        p.set_total(0);
        assert_eq!(p.current_page(), 0);
    }

    #[test]
    fn test_growing_page_size_clamps_current() {
        let mut p = Pagination::new(2);
        p.set_total(16);
        p.go_to_page(7);
        p.set_page_size(8);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 2);
    }

    #[test]
    fn test_page_slice_and_placeholders() {
        let items: Vec<u32> = (0..10).collect();
        let mut p = Pagination::new(4);
        p.set_total(items.len());
        assert_eq!(p.page_slice(&items), &[0, 1, 2, 3]);
        assert_eq!(p.placeholder_slots(), 0);
        p.go_to_page(2);
        assert_eq!(p.page_slice(&items), &[8, 9]);
        assert_eq!(p.placeholder_slots(), 2);

        let mut empty = Pagination::new(4);
        empty.set_total(0);
        assert!(empty.page_slice::<u32>(&[]).is_empty());
        assert_eq!(empty.placeholder_slots(), 0);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let mut p = Pagination::new(0);
        p.set_total(3);
        assert_eq!(p.total_pages(), 3);
        p.set_page_size(0);
        assert_eq!(p.page_size(), 1);
    }
}
