// Configuration type definitions

use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::source::compose_endpoint;

/// Event feed endpoint section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Full URL; takes precedence over host/port/path
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            url: None,
            host: "localhost".to_string(),
            port: 12345,
            path: "/events".to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn resolved_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => compose_endpoint(&self.host, self.port, &self.path),
        }
    }
}

/// Notification display section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub include_timestamp: bool,
    pub show_revisions: bool,
    pub show_repo: bool,
    pub fade_in_ms: u64,
    pub max_notifications: Option<NonZeroUsize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            include_timestamp: true,
            show_revisions: false,
            show_repo: false,
            fade_in_ms: 1000,
            max_notifications: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}
