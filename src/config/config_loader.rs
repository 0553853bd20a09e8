use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::RefwatchError;

const CONFIG_DIR: &str = "refwatch";
const CONFIG_FILE: &str = "config.toml";

/// A loaded config plus any problem worth telling the user about
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the default config file, falling back to defaults on any problem
pub fn load_config() -> ConfigResult {
    match default_config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

/// Lenient load: a missing file is silent, a broken one yields a warning
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return ConfigResult::default(),
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Cannot read {}: {}", path.display(), e)),
            };
        }
    };

    match parse_config(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("{} in {}, using defaults", e, path.display())),
        },
    }
}

/// Strict load for a path the user asked for explicitly
pub fn load_explicit_config(path: &Path) -> Result<Config, RefwatchError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| RefwatchError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, RefwatchError> {
    toml::from_str(contents).map_err(|e| RefwatchError::Config(e.message().to_string()))
}

#[cfg(test)]
#[path = "config_loader_tests.rs"]
mod config_loader_tests;
