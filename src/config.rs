//! Configuration loading
//!
//! Settings come from `~/.config/refwatch/config.toml` (or `--config`),
//! with command-line flags layered on top.

mod config_loader;
pub mod types;

pub use config_loader::{
    ConfigResult, default_config_path, load_config, load_config_from_path, load_explicit_config,
    parse_config,
};
pub use types::{Config, DisplayConfig, EndpointConfig};
