/// Scroll position of a vertically scrolling pane.
///
/// While `follow` is set the pane sticks to the newest (bottom) line as
/// content grows. Scrolling up releases it; reaching the bottom again
/// re-engages it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
    pub max_offset: usize,
    pub viewport_height: u16,
    pub follow: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
            follow: true,
        }
    }

    pub fn update_bounds(&mut self, content_lines: usize, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.max_offset = content_lines.saturating_sub(viewport_height as usize);

        if self.follow {
            self.offset = self.max_offset;
        } else {
            self.offset = self.offset.min(self.max_offset);
        }
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
        if self.offset == self.max_offset {
            self.follow = true;
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
        if self.offset < self.max_offset {
            self.follow = false;
        }
    }

    pub fn page_down(&mut self) {
        let half_page = (self.viewport_height as usize / 2).max(1);
        self.scroll_down(half_page);
    }

    pub fn page_up(&mut self) {
        let half_page = (self.viewport_height as usize / 2).max(1);
        self.scroll_up(half_page);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
        self.follow = self.max_offset == 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
        self.follow = true;
    }

    /// Range of content lines currently inside the viewport
    pub fn visible_range(&self, content_lines: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(content_lines);
        let end = start
            .saturating_add(self.viewport_height as usize)
            .min(content_lines);
        start..end
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
