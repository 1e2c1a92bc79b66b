//! Carousel Pager: page arithmetic for horizontally paged item lists.
//!
//! # Architecture
//! - `pager` and the `PagerState` methods are pure and need no rendering surface.
//! - `CarouselController` is the thin adapter that turns a target page into a
//!   `scroll_to` call against whatever `ScrollSurface` the host provides.
//!
//! `items_per_page` may be fractional (1.5 shows a peek of the next item).

use serde::{Deserialize, Serialize};

/// Default gap between carousel items, in pixels.
pub const DEFAULT_GAP_PX: f64 = 16.0;

/// Derived paging state for one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PagerState {
    pub item_count: usize,
    pub items_per_page: f64,
    pub scroll_by: usize,
    /// Index of the last page; 0 means a single page.
    pub max_page_index: usize,
    /// Width of one item as a fraction of the visible container.
    pub page_width_fraction: f64,
    pub dots_count: usize,
    /// Arrows and dots are only rendered when there is somewhere to go.
    pub controls_visible: bool,
}

/// Computes the paging state for a carousel.
///
/// Out-of-domain inputs are clamped: `item_count` and `scroll_by` to at least 1,
/// a non-finite or non-positive `items_per_page` to 1.0.
pub fn pager(item_count: usize, items_per_page: f64, scroll_by: usize) -> PagerState {
    let item_count = item_count.max(1);
    let scroll_by = scroll_by.max(1);
    let items_per_page = if items_per_page.is_finite() && items_per_page > 0.0 {
        items_per_page
    } else {
        1.0
    };

    let max_page_index = if items_per_page > item_count as f64 {
        0
    } else {
        item_count.div_ceil(scroll_by).saturating_sub(1)
    };

    PagerState {
        item_count,
        items_per_page,
        scroll_by,
        max_page_index,
        page_width_fraction: 1.0 / items_per_page,
        dots_count: max_page_index + 1,
        controls_visible: max_page_index > 0,
    }
}

impl PagerState {
    fn page_count(&self) -> usize {
        self.max_page_index + 1
    }

    /// Next page, wrapping from the last page to the first.
    pub fn next(&self, current: usize) -> usize {
        (current % self.page_count() + 1) % self.page_count()
    }

    /// Previous page, wrapping from the first page to the last.
    pub fn prev(&self, current: usize) -> usize {
        let pages = self.page_count();
        (current % pages + pages - 1) % pages
    }

    /// Rendered width of one item for a container of `container_width` pixels.
    pub fn item_width(&self, container_width: f64, gap: f64) -> f64 {
        ((container_width - gap * (self.items_per_page - 1.0)) / self.items_per_page).max(0.0)
    }

    /// Distance between the left edges of two adjacent items.
    pub fn step_width(&self, container_width: f64, gap: f64) -> f64 {
        (container_width + gap) / self.items_per_page
    }

    /// Horizontal scroll offset that brings page `target` into view, clamped to
    /// the scrollable extent of the track.
    pub fn scroll_offset(&self, target: usize, container_width: f64, gap: f64) -> f64 {
        let target = target.min(self.max_page_index);
        let step = self.step_width(container_width, gap);
        let raw = (target * self.scroll_by) as f64 * step;
        let track_width = self.item_count as f64 * step - gap;
        let max_scroll = (track_width - container_width).max(0.0);
        raw.min(max_scroll)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scroll adapter
// ────────────────────────────────────────────────────────────────────────────

/// A rendered, horizontally scrollable track.
pub trait ScrollSurface {
    /// Current measured width of the visible container, in pixels.
    fn container_width(&self) -> f64;
    fn scroll_to(&mut self, left: f64);
}

/// Tracks the current page and drives a `ScrollSurface`.
pub struct CarouselController<S: ScrollSurface> {
    pager: PagerState,
    gap: f64,
    current: usize,
    surface: S,
}

impl<S: ScrollSurface> CarouselController<S> {
    pub fn new(pager: PagerState, gap: f64, surface: S) -> Self {
        Self {
            pager,
            gap,
            current: 0,
            surface,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn pager(&self) -> &PagerState {
        &self.pager
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Scrolls to `page` (clamped to the last page).
    pub fn go_to(&mut self, page: usize) {
        let page = page.min(self.pager.max_page_index);
        let width = self.surface.container_width();
        let left = self.pager.scroll_offset(page, width, self.gap);
        self.surface.scroll_to(left);
        self.current = page;
    }

    pub fn next(&mut self) {
        let target = self.pager.next(self.current);
        self.go_to(target);
    }

    pub fn prev(&mut self) {
        let target = self.pager.prev(self.current);
        self.go_to(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_page_index_matches_ceil_formula() {
        for item_count in 1..=12usize {
            for scroll_by in 1..=5usize {
                let state = pager(item_count, 1.0, scroll_by);
                let expected = item_count.div_ceil(scroll_by) - 1;
                assert_eq!(
                    state.max_page_index, expected,
                    "item_count={item_count} scroll_by={scroll_by}"
                );
                assert_eq!(state.dots_count, expected + 1);
            }
        }
    }

    #[test]
    fn test_next_and_prev_are_inverse() {
        let state = pager(7, 1.0, 2);
        assert_eq!(state.max_page_index, 3);
        for i in 0..=state.max_page_index {
            assert_eq!(state.prev(state.next(i)), i);
            assert_eq!(state.next(state.prev(i)), i);
        }
    }

    #[test]
    fn test_navigation_wraps() {
        let state = pager(4, 1.0, 1);
        assert_eq!(state.next(3), 0);
        assert_eq!(state.prev(0), 3);
    }

    #[test]
    fn test_single_item_hides_controls() {
        let state = pager(1, 1.0, 1);
        assert_eq!(state.max_page_index, 0);
        assert!(!state.controls_visible);
        assert_eq!(state.next(0), 0);
        assert_eq!(state.prev(0), 0);
    }

    #[test]
    fn test_items_per_page_beyond_count_is_single_page() {
        let state = pager(2, 3.0, 1);
        assert_eq!(state.max_page_index, 0);
        assert_eq!(state.dots_count, 1);
        assert!(!state.controls_visible);
    }

    #[test]
    fn test_items_per_page_equal_to_count_follows_formula() {
        let state = pager(3, 3.0, 1);
        assert_eq!(state.max_page_index, 2);
        assert!(state.controls_visible);
        assert_eq!(pager(4, 4.0, 2).max_page_index, 1);
        // Everything is visible, so every page scrolls to the start.
        assert_eq!(state.scroll_offset(2, 900.0, 0.0), 0.0);
    }

    #[test]
    fn test_fractional_items_per_page_gives_peek_width() {
        let state = pager(6, 1.5, 1);
        assert!((state.page_width_fraction - 1.0 / 1.5).abs() < 1e-9);
        assert_eq!(state.max_page_index, 5);
        assert!(state.controls_visible);
    }

    #[test]
    fn test_invalid_inputs_are_clamped() {
        let state = pager(0, f64::NAN, 0);
        assert_eq!(state.item_count, 1);
        assert_eq!(state.scroll_by, 1);
        assert_eq!(state.items_per_page, 1.0);
        let negative = pager(5, -2.0, 1);
        assert_eq!(negative.items_per_page, 1.0);
    }

    #[test]
    fn test_item_and_step_width_account_for_gap() {
        let state = pager(6, 3.0, 1);
        // (960 - 16 * 2) / 3
        assert!((state.item_width(960.0, 16.0) - 309.333_333).abs() < 1e-3);
        // item width + gap
        assert!((state.step_width(960.0, 16.0) - 325.333_333).abs() < 1e-3);
    }

    #[test]
    fn test_scroll_offset_steps_by_scroll_by_items() {
        let state = pager(8, 2.0, 2);
        let step = state.step_width(800.0, 0.0);
        assert_eq!(step, 400.0);
        assert_eq!(state.scroll_offset(0, 800.0, 0.0), 0.0);
        assert_eq!(state.scroll_offset(1, 800.0, 0.0), 800.0);
        assert_eq!(state.scroll_offset(3, 800.0, 0.0), 2400.0);
    }

    #[test]
    fn test_scroll_offset_clamps_to_track_extent() {
        // 5 items, 2 visible, scroll 2: the last page would overshoot.
        let state = pager(5, 2.0, 2);
        assert_eq!(state.max_page_index, 2);
        let last = state.scroll_offset(2, 800.0, 0.0);
        assert_eq!(last, 5.0 * 400.0 - 800.0);
        assert_eq!(state.scroll_offset(99, 800.0, 0.0), last);
    }

    struct RecordingSurface {
        width: f64,
        calls: Vec<f64>,
    }

    impl ScrollSurface for RecordingSurface {
        fn container_width(&self) -> f64 {
            self.width
        }

        fn scroll_to(&mut self, left: f64) {
            self.calls.push(left);
        }
    }

    #[test]
    fn test_controller_drives_surface() {
        let surface = RecordingSurface {
            width: 600.0,
            calls: vec![],
        };
        let mut controller = CarouselController::new(pager(3, 1.0, 1), 0.0, surface);
        controller.next();
        controller.next();
        controller.next();
        controller.prev();
        assert_eq!(controller.current(), 2);
        assert_eq!(controller.surface().calls, vec![600.0, 1200.0, 0.0, 1200.0]);
    }

    #[test]
    fn test_controller_go_to_clamps_page() {
        let surface = RecordingSurface {
            width: 300.0,
            calls: vec![],
        };
        let mut controller = CarouselController::new(pager(2, 1.0, 1), 0.0, surface);
        controller.go_to(10);
        assert_eq!(controller.current(), 1);
        assert_eq!(controller.surface().calls, vec![300.0]);
    }
}
