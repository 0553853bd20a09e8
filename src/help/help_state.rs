use crate::scroll::ScrollState;

pub struct HelpPopupState {
    pub visible: bool,
    pub scroll: ScrollState,
}

impl HelpPopupState {
    pub fn new() -> Self {
        let mut scroll = ScrollState::new();
        scroll.follow = false;
        Self {
            visible: false,
            scroll,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if !self.visible {
            self.close();
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.scroll.offset = 0;
        self.scroll.follow = false;
    }
}

impl Default for HelpPopupState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden_at_top() {
        let help = HelpPopupState::new();
        assert!(!help.visible);
        assert_eq!(help.scroll.offset, 0);
        assert!(!help.scroll.follow);
    }

    #[test]
    fn test_toggle() {
        let mut help = HelpPopupState::new();
        help.toggle();
        assert!(help.visible);
        help.toggle();
        assert!(!help.visible);
    }

    #[test]
    fn test_close_resets_scroll() {
        let mut help = HelpPopupState::new();
        help.visible = true;
        help.scroll.update_bounds(30, 5);
        help.scroll.scroll_down(4);

        help.close();

        assert!(!help.visible);
        assert_eq!(help.scroll.offset, 0);
    }
}
