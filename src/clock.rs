//! Wall-clock access for notification timestamps

use chrono::{Local, NaiveTime};

/// Source of the current local time of day
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// The host's local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Format a time of day as zero-padded `HH:MM`
pub fn format_timestamp(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod clock_tests;
