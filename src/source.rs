//! Event sources feeding the notification renderer
//!
//! The WebSocket connection runs on its own thread and forwards everything it
//! sees over a channel. The UI thread drains that channel without blocking,
//! so frames are processed strictly in arrival order.

pub mod endpoint;
mod source_event;
pub mod websocket;

pub use endpoint::{DEFAULT_ENDPOINT, compose_endpoint, parse_endpoint};
pub use source_event::{CloseReason, EventSource, EventStream, SourceEvent};
pub use websocket::connect;
