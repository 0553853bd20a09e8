//! Notification renderer
//!
//! Owns one event source and turns each inbound frame into zero or one
//! notification. Frames are handled one at a time, to completion, in the
//! order the source delivers them.

use std::num::NonZeroUsize;
use std::time::Instant;

use url::Url;

use crate::clock::{Clock, SystemClock, format_timestamp};
use crate::event::{ChangeEvent, DecodeError};
use crate::notification::{Notification, NotificationFeed};
use crate::source::{self, CloseReason, EventSource, SourceEvent};

/// Upper bound on events handled per [`NotificationRenderer::pump`] call so
/// a flood of frames cannot starve the UI. Remaining events wait for the
/// next call, in order.
pub const MAX_EVENTS_PER_PUMP: usize = 1024;

/// Display options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererOptions {
    pub include_timestamp: bool,
    pub show_revisions: bool,
    pub show_repo: bool,
    pub max_notifications: Option<NonZeroUsize>,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            include_timestamp: true,
            show_revisions: false,
            show_repo: false,
            max_notifications: None,
        }
    }
}

/// What happened to a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    /// A notification was appended with this sequence number
    Displayed(u64),
    /// Decoded fine but not a checkout
    Ignored,
    /// Could not be decoded
    Dropped,
}

/// Lifecycle of the underlying connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed(CloseReason),
}

/// Frame counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FeedStats {
    pub received: u64,
    pub displayed: u64,
    pub ignored: u64,
    pub dropped: u64,
}

pub struct NotificationRenderer {
    source: Box<dyn EventSource>,
    clock: Box<dyn Clock>,
    options: RendererOptions,
    feed: NotificationFeed,
    state: ConnectionState,
    stats: FeedStats,
    last_error: Option<DecodeError>,
    opened: bool,
}

impl NotificationRenderer {
    pub fn new(source: Box<dyn EventSource>, options: RendererOptions) -> Self {
        Self {
            source,
            clock: Box::new(SystemClock),
            options,
            feed: NotificationFeed::new(options.max_notifications),
            state: ConnectionState::Connecting,
            stats: FeedStats::default(),
            last_error: None,
            opened: false,
        }
    }

    /// Open a WebSocket connection to `endpoint` and render from it
    pub fn connect(endpoint: &Url, options: RendererOptions) -> Self {
        Self::new(Box::new(source::connect(endpoint)), options)
    }

    /// Replace the wall clock used for timestamps
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Handle every pending source event. Returns how many were handled.
    pub fn pump(&mut self, now: Instant) -> usize {
        let mut handled = 0;
        while handled < MAX_EVENTS_PER_PUMP {
            let Some(event) = self.source.try_next() else {
                break;
            };
            self.handle_event(event, now);
            handled += 1;
        }
        handled
    }

    pub fn handle_event(&mut self, event: SourceEvent, now: Instant) {
        match event {
            SourceEvent::Opened => {
                self.opened = true;
                self.state = ConnectionState::Open;
            }
            SourceEvent::Text(raw) => {
                self.on_message(&raw, now);
            }
            SourceEvent::Binary(raw) => {
                self.on_binary(&raw, now);
            }
            SourceEvent::Closed(reason) => {
                log::info!("Event stream closed: {}", reason);
                self.state = ConnectionState::Closed(reason);
            }
        }
    }

    /// Process one text frame
    pub fn on_message(&mut self, raw: &str, now: Instant) -> MessageOutcome {
        self.stats.received += 1;
        let decoded = ChangeEvent::decode(raw);
        self.apply(decoded, now)
    }

    /// Process one binary frame
    pub fn on_binary(&mut self, raw: &[u8], now: Instant) -> MessageOutcome {
        self.stats.received += 1;
        let decoded = ChangeEvent::decode_bytes(raw);
        self.apply(decoded, now)
    }

    fn apply(&mut self, decoded: Result<ChangeEvent, DecodeError>, now: Instant) -> MessageOutcome {
        let event = match decoded {
            Ok(event) => {
                self.last_error = None;
                event
            }
            Err(e) => {
                log::warn!("Dropping frame: {}", e);
                self.stats.dropped += 1;
                self.last_error = Some(e);
                return MessageOutcome::Dropped;
            }
        };

        if !event.checked_out {
            log::debug!("Ignoring non-checkout change on {}", event.ref_name);
            self.stats.ignored += 1;
            return MessageOutcome::Ignored;
        }

        let timestamp = self
            .options
            .include_timestamp
            .then(|| format_timestamp(self.clock.now()));
        let revisions = if self.options.show_revisions {
            event.revision_range()
        } else {
            None
        };
        let repo = if self.options.show_repo {
            event.repo().map(str::to_owned)
        } else {
            None
        };

        let notification = Notification::new(event.user, event.ref_name, now)
            .with_timestamp(timestamp)
            .with_repo(repo)
            .with_revisions(revisions);
        let seq = self.feed.append(notification);
        self.stats.displayed += 1;

        MessageOutcome::Displayed(seq)
    }

    pub fn feed(&self) -> &NotificationFeed {
        &self.feed
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn stats(&self) -> FeedStats {
        self.stats
    }

    /// The decode failure of the latest frame, cleared once a frame decodes
    pub fn last_error(&self) -> Option<&DecodeError> {
        self.last_error.as_ref()
    }

    /// Whether the connection was ever established
    pub fn has_opened(&self) -> bool {
        self.opened
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, ConnectionState::Closed(_))
    }
}
