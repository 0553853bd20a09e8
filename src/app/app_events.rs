use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;

impl App {
    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event) {
        // Only process key press events (avoid duplicates)
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key_event(key);
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.help.visible {
            self.handle_help_key(key);
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') | KeyCode::F(1) => self.help.toggle(),
            KeyCode::Char('j') | KeyCode::Down => self.feed_scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.feed_scroll.scroll_up(1),
            KeyCode::Char('d') if ctrl => self.feed_scroll.page_down(),
            KeyCode::Char('u') if ctrl => self.feed_scroll.page_up(),
            KeyCode::PageDown => self.feed_scroll.page_down(),
            KeyCode::PageUp => self.feed_scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.feed_scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.feed_scroll.jump_to_bottom(),
            _ => {}
        }
    }

    /// Keys while the help popup is open; everything else is swallowed
    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
                self.help.close();
            }
            KeyCode::Char('j') | KeyCode::Down => self.help.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.help.scroll.scroll_up(1),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
