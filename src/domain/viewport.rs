//! Scroll geometry of the feed list

/// Scroll position of a vertically scrolling list, in the list's own units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub scroll_top: usize,
    pub viewport_height: usize,
    pub content_height: usize,
}

impl Viewport {
    pub fn new(scroll_top: usize, viewport_height: usize, content_height: usize) -> Self {
        Self {
            scroll_top,
            viewport_height,
            content_height,
        }
    }

    /// Whether the bottom edge of the viewport is within `threshold` of the content end
    pub fn is_near_bottom(&self, threshold: usize) -> bool {
        self.viewport_height
            .saturating_add(self.scroll_top)
            .saturating_add(threshold)
            >= self.content_height
    }

    /// Largest scroll offset that still fills the viewport
    pub fn max_scroll_top(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }
}
