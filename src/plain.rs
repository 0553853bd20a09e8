//! Plain output mode
//!
//! Prints one line per notification to a writer and exits once the event
//! stream closes.

use std::io::Write;
use std::time::{Duration, Instant};

use crate::error::RefwatchError;
use crate::renderer::{ConnectionState, NotificationRenderer};

/// Drive `renderer` until its connection closes, writing each new
/// notification to `out`.
///
/// Fails with [`RefwatchError::Connection`] if the connection never opened.
pub fn run<W: Write>(
    renderer: &mut NotificationRenderer,
    out: &mut W,
    poll_interval: Duration,
) -> Result<(), RefwatchError> {
    let mut last_seq = 0;

    loop {
        renderer.pump(Instant::now());
        last_seq = write_new(renderer, out, last_seq)?;

        if let ConnectionState::Closed(reason) = renderer.state() {
            if renderer.has_opened() {
                log::info!("Stopped: {}", reason);
                return Ok(());
            }
            return Err(RefwatchError::Connection(reason.to_string()));
        }

        std::thread::sleep(poll_interval);
    }
}

/// Write notifications newer than `last_seq`; returns the new high-water mark
fn write_new<W: Write>(
    renderer: &NotificationRenderer,
    out: &mut W,
    last_seq: u64,
) -> Result<u64, RefwatchError> {
    let mut seq = last_seq;
    for notification in renderer.feed().since(last_seq) {
        writeln!(out, "{}", notification.plain_line())?;
        seq = notification.seq;
    }
    out.flush()?;
    Ok(seq)
}

#[cfg(test)]
#[path = "plain_tests.rs"]
mod plain_tests;
