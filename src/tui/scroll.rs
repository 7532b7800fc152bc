// Scroll state shared by the list and the logs panel
//
// Each component owns its scroll state; App only routes input.
//
// The unit is whatever the owner counts: the translation list scrolls by
// record, the logs panel by entry. The logs panel follows new entries
// (auto-follow) until the user scrolls away; the list never follows.

/// Scroll state for a single panel
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Index of the first unit in the viewport
    offset: usize,

    /// Total number of units in the content
    total: usize,

    /// Number of units visible in the viewport
    viewport: usize,

    /// Keep the view pinned to the newest content
    ///
    /// Scrolling up disables this; reaching the bottom re-enables it.
    pub auto_follow: bool,
}

impl ScrollState {
    /// Scroll state that follows new content
    pub fn following() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Scroll state that stays where the user put it
    pub fn manual() -> Self {
        Self {
            auto_follow: false,
            ..Self::following()
        }
    }

    /// Update content and viewport sizes (call each frame)
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    /// Move the top of the viewport to `offset` (clamped to content)
    pub fn scroll_to(&mut self, offset: usize) {
        self.offset = offset.min(self.total.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
        self.follow_if_at_bottom();
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.page());
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        self.offset = (self.offset + self.page()).min(self.max_offset());
        self.follow_if_at_bottom();
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    /// Jump to bottom; following owners resume following
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.follow_if_at_bottom();
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Visible range as (start, end), end exclusive
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.viewport).min(self.total);
        (self.offset.min(end), end)
    }

    /// Whether the content overflows the viewport
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    /// Units moved by a page up/down
    pub fn page(&self) -> usize {
        self.viewport.max(1)
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    fn follow_if_at_bottom(&mut self) {
        if self.total > 0 && self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }
}
