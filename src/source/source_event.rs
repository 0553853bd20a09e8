use std::fmt;
use std::sync::mpsc::Receiver;

use tokio_util::sync::CancellationToken;

/// Something that happened on the event stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    /// The connection is established
    Opened,
    /// A text frame
    Text(String),
    /// A binary frame
    Binary(Vec<u8>),
    /// The connection ended. No further events follow.
    Closed(CloseReason),
}

/// How a connection ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReason {
    /// The server sent a close frame
    Remote { code: u16, reason: String },
    /// Connecting or reading failed
    Failed(String),
    /// The stream ended without a close frame
    Dropped,
    /// The local side cancelled the connection
    Cancelled,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseReason::Remote { code, reason } if reason.is_empty() => {
                write!(f, "closed by server ({code})")
            }
            CloseReason::Remote { code, reason } => {
                write!(f, "closed by server ({code}: {reason})")
            }
            CloseReason::Failed(msg) => write!(f, "connection failed: {msg}"),
            CloseReason::Dropped => write!(f, "connection dropped"),
            CloseReason::Cancelled => write!(f, "connection cancelled"),
        }
    }
}

/// A non-blocking supply of [`SourceEvent`]s
pub trait EventSource {
    /// Return the next pending event, or `None` if nothing is waiting
    fn try_next(&mut self) -> Option<SourceEvent>;
}

/// Receiving end of a connection worker.
///
/// Dropping the stream cancels the worker.
pub struct EventStream {
    rx: Receiver<SourceEvent>,
    cancel: CancellationToken,
}

impl EventStream {
    pub(crate) fn new(rx: Receiver<SourceEvent>, cancel: CancellationToken) -> Self {
        Self { rx, cancel }
    }

    /// Wrap an arbitrary channel, e.g. a scripted feed in tests
    pub fn from_channel(rx: Receiver<SourceEvent>) -> Self {
        Self::new(rx, CancellationToken::new())
    }
}

impl EventSource for EventStream {
    fn try_next(&mut self) -> Option<SourceEvent> {
        self.rx.try_recv().ok()
    }
}

impl Drop for EventStream {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
#[path = "source_event_tests.rs"]
mod source_event_tests;
