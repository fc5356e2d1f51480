//! Selection and scroll position state.
//!
//! - [`ScrollState`] - viewport offset of the coverage list (no selection)
//! - [`ListState`] - selection plus viewport offset for the file picker
//!
//! All methods are pure or have minimal side effects.

/// Viewport offset over a list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll by `delta` lines, staying within the content.
    pub fn scroll_by(&mut self, delta: isize, total: usize, viewport: usize) {
        let target = self.offset.saturating_add_signed(delta);
        self.offset = target.min(max_scroll_offset(total, viewport));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, total: usize, viewport: usize) {
        self.offset = max_scroll_offset(total, viewport);
    }

    /// Re-clamp after the content or the viewport changed size.
    pub fn clamp(&mut self, total: usize, viewport: usize) {
        self.offset = self.offset.min(max_scroll_offset(total, viewport));
    }
}

/// Selection index with a viewport that follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    selected_index: usize,
    scroll_offset: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Set selected index with bounds checking.
    pub fn set_selected_index(&mut self, index: usize, item_count: usize) {
        self.selected_index = clamp_selection(index, item_count);
    }

    /// Move selection by `delta`, clamped to the list.
    pub fn move_by(&mut self, delta: isize, item_count: usize) {
        let target = self.selected_index.saturating_add_signed(delta);
        self.set_selected_index(target, item_count);
    }

    /// Adjust the viewport so the selection is visible.
    pub fn follow_selection(&mut self, viewport: usize) {
        self.scroll_offset = offset_showing(self.selected_index, self.scroll_offset, viewport);
    }

    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Clamps selection index to valid range (pure).
pub fn clamp_selection(index: usize, item_count: usize) -> usize {
    if item_count == 0 {
        0
    } else {
        index.min(item_count - 1)
    }
}

/// Largest offset that still fills the viewport (pure).
pub fn max_scroll_offset(total: usize, viewport: usize) -> usize {
    total.saturating_sub(viewport)
}

/// Calculates visible range for scrolling (pure).
pub fn calculate_visible_range(
    scroll_offset: usize,
    viewport_height: usize,
    total_items: usize,
) -> std::ops::Range<usize> {
    let start = scroll_offset.min(total_items);
    let end = (scroll_offset + viewport_height).min(total_items);
    start..end
}

/// Smallest change to `offset` that keeps `selected` inside the viewport (pure).
pub fn offset_showing(selected: usize, offset: usize, viewport: usize) -> usize {
    if viewport == 0 {
        return selected;
    }
    if selected < offset {
        selected
    } else if selected >= offset + viewport {
        selected + 1 - viewport
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_selection_empty() {
        assert_eq!(clamp_selection(5, 0), 0);
    }

    #[test]
    fn test_clamp_selection_exceeds_bounds() {
        assert_eq!(clamp_selection(15, 10), 9);
    }

    #[test]
    fn test_scroll_stops_at_bottom() {
        let mut state = ScrollState::new();
        state.scroll_by(50, 30, 10);
        assert_eq!(state.offset(), 20);
    }

    #[test]
    fn test_scroll_stops_at_top() {
        let mut state = ScrollState::new();
        state.scroll_by(3, 30, 10);
        state.scroll_by(-10, 30, 10);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut state = ScrollState::new();
        state.scroll_by(1, 5, 10);
        assert_eq!(state.offset(), 0);
        state.scroll_to_bottom(5, 10);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = ScrollState::new();
        state.scroll_to_bottom(100, 10);
        state.clamp(12, 10);
        assert_eq!(state.offset(), 2);
    }

    #[test]
    fn test_list_state_moves_and_follows() {
        let mut state = ListState::new();
        state.move_by(7, 20);
        state.follow_selection(5);
        assert_eq!(state.selected_index(), 7);
        assert_eq!(state.scroll_offset(), 3);

        state.move_by(-100, 20);
        state.follow_selection(5);
        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_calculate_visible_range_clamped() {
        assert_eq!(calculate_visible_range(95, 10, 100), 95..100);
        assert_eq!(calculate_visible_range(0, 10, 0), 0..0);
        assert_eq!(calculate_visible_range(7, 10, 3), 3..3);
    }

    #[test]
    fn test_offset_showing_keeps_visible_offset() {
        assert_eq!(offset_showing(4, 2, 5), 2);
    }
}
