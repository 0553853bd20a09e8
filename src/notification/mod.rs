//! Notification module for refwatch
//!
//! Holds the feed of checkout notifications and knows how to draw it.
//! Entries are appended in arrival order and fade in after they appear.

mod notification_fade;
mod notification_render;
mod notification_state;

pub use notification_fade::{FADE_IN_DURATION, blend, opacity};
pub use notification_render::{feed_lines, render_feed};
pub use notification_state::{Notification, NotificationFeed};
