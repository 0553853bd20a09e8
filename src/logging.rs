//! Logger setup
//!
//! The TUI owns the terminal, so in TUI mode logs only go to a file given
//! with `--log-file`. Plain mode logs to stderr.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::error::RefwatchError;

const DEFAULT_FILTER: &str = "warn";

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

/// Pick the sink for a run mode
pub fn log_sink(log_file: Option<&Path>, plain: bool) -> LogSink<'_> {
    match (log_file, plain) {
        (Some(path), _) => LogSink::File(path),
        (None, true) => LogSink::Stderr,
        (None, false) => LogSink::Disabled,
    }
}

/// Install the global logger. `level` overrides `RUST_LOG`.
pub fn init_logging(level: Option<LevelFilter>, sink: LogSink<'_>) -> Result<(), RefwatchError> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level {
        builder.filter_level(level);
    }

    match sink {
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
        LogSink::Disabled => return Ok(()),
    }

    builder.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_wins_in_any_mode() {
        let path = Path::new("/tmp/refwatch.log");
        assert_eq!(log_sink(Some(path), false), LogSink::File(path));
        assert_eq!(log_sink(Some(path), true), LogSink::File(path));
    }

    #[test]
    fn test_plain_mode_logs_to_stderr() {
        assert_eq!(log_sink(None, true), LogSink::Stderr);
    }

    #[test]
    fn test_tui_mode_without_file_is_silent() {
        assert_eq!(log_sink(None, false), LogSink::Disabled);
        assert!(init_logging(Some(LevelFilter::Debug), LogSink::Disabled).is_ok());
    }
}
