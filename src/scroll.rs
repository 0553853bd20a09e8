//! Vertical scroll tracking for the notification feed

mod scroll_state;

pub use scroll_state::ScrollState;
