//! Command-line arguments and settings resolution

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use url::Url;

use crate::config::Config;
use crate::error::RefwatchError;
use crate::renderer::RendererOptions;
use crate::source::{compose_endpoint, parse_endpoint};

#[derive(Debug, Parser)]
#[command(
    name = "refwatch",
    version,
    about = "Show git ref checkouts from a WebSocket event feed as terminal notifications"
)]
pub struct Args {
    /// Event feed URL [default: ws://localhost:12345/events]
    pub url: Option<String>,

    /// Host of the event feed (used when no URL is given)
    #[arg(long)]
    pub host: Option<String>,

    /// Port of the event feed (used when no URL is given)
    #[arg(long)]
    pub port: Option<u16>,

    /// Show the local time next to each notification
    #[arg(long, conflicts_with = "no_timestamps")]
    pub timestamps: bool,

    /// Hide notification timestamps
    #[arg(long)]
    pub no_timestamps: bool,

    /// Show the previous and current revision of each ref
    #[arg(long)]
    pub revisions: bool,

    /// Show the repository each ref belongs to
    #[arg(long)]
    pub repo: bool,

    /// Keep at most N notifications, dropping the oldest
    #[arg(long, value_name = "N")]
    pub max_notifications: Option<NonZeroUsize>,

    /// Print notifications to stdout instead of running the TUI
    #[arg(long)]
    pub plain: bool,

    /// Config file to use instead of ~/.config/refwatch/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append log output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Lowest log level to emit (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LevelFilter>,
}

/// Everything needed to start watching, after flags and config are merged
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: Url,
    pub options: RendererOptions,
    pub fade_in: Duration,
    pub plain: bool,
}

impl Args {
    /// Merge flags over `config`. Flags win.
    pub fn resolve(&self, config: &Config) -> Result<Settings, RefwatchError> {
        let raw_endpoint = match (&self.url, &self.host, self.port) {
            (Some(url), _, _) => url.clone(),
            (None, None, None) => config.endpoint.resolved_url(),
            (None, host, port) => compose_endpoint(
                host.as_deref().unwrap_or(&config.endpoint.host),
                port.unwrap_or(config.endpoint.port),
                &config.endpoint.path,
            ),
        };
        let endpoint = parse_endpoint(&raw_endpoint)?;

        let include_timestamp = if self.no_timestamps {
            false
        } else {
            self.timestamps || config.display.include_timestamp
        };

        let options = RendererOptions {
            include_timestamp,
            show_revisions: self.revisions || config.display.show_revisions,
            show_repo: self.repo || config.display.show_repo,
            max_notifications: self.max_notifications.or(config.display.max_notifications),
        };

        Ok(Settings {
            endpoint,
            options,
            fade_in: Duration::from_millis(config.display.fade_in_ms),
            plain: self.plain,
        })
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
