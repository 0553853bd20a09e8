use std::time::{Duration, Instant};

use url::Url;

use crate::help::HelpPopupState;
use crate::renderer::NotificationRenderer;
use crate::scroll::ScrollState;

/// Application state
pub struct App {
    pub renderer: NotificationRenderer,
    pub endpoint: String,
    pub feed_scroll: ScrollState,
    pub help: HelpPopupState,
    pub fade_in: Duration,
    /// Problem found while loading the config file
    pub config_warning: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(renderer: NotificationRenderer, endpoint: &Url, fade_in: Duration) -> Self {
        Self {
            renderer,
            endpoint: endpoint.to_string(),
            feed_scroll: ScrollState::new(),
            help: HelpPopupState::new(),
            fade_in,
            config_warning: None,
            should_quit: false,
        }
    }

    pub fn with_config_warning(mut self, warning: Option<String>) -> Self {
        self.config_warning = warning;
        self
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Pull pending events from the stream into the feed
    pub fn tick(&mut self, now: Instant) -> usize {
        self.renderer.pump(now)
    }

    /// True while the newest notification is still fading in
    pub fn is_animating(&self, now: Instant) -> bool {
        self.renderer
            .feed()
            .latest()
            .is_some_and(|n| now.saturating_duration_since(n.created_at) < self.fade_in)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
