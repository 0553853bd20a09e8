//! refwatch: a terminal notifier for git ref checkout events.
//!
//! Connects to a WebSocket feed of ref-change records and shows each
//! checkout as a notification that fades into a scrolling feed.

pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod help;
pub mod logging;
pub mod notification;
pub mod plain;
pub mod renderer;
pub mod scroll;
pub mod source;
pub mod theme;
pub mod widgets;

mod test_utils;

pub use error::RefwatchError;
pub use renderer::{NotificationRenderer, RendererOptions};
