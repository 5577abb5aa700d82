use std::path::Path;

use bogosort_core::ShuffleStrategy;
use serde::{Deserialize, Serialize};
use tracing::info;

const CONFIG_FILE_NAMES: [&str; 2] = ["bogosort.toml", ".bogosort.toml"];

/// Configuration for a bogosort run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The sequence to sort
    pub values: Vec<i64>,

    /// Seed for the shuffle RNG; a fresh one is drawn when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Give up after this many shuffles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_shuffles: Option<u64>,

    /// Shuffle applied between sortedness checks
    pub shuffle: ShuffleStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            values: vec![5, 3, 2, 4, 1],
            seed: None,
            max_shuffles: None,
            shuffle: ShuffleStrategy::Naive,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Find and load configuration from standard locations
    pub fn load() -> Result<Self, ConfigError> {
        // Current directory, then its parents
        if let Ok(mut current_dir) = std::env::current_dir() {
            loop {
                for filename in CONFIG_FILE_NAMES {
                    let path = current_dir.join(filename);
                    if path.is_file() {
                        return Self::from_file(&path);
                    }
                }

                if !current_dir.pop() {
                    break;
                }
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let path = home_dir.join(".config/bogosort/bogosort.toml");
            if path.is_file() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Generate a default configuration file content
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

mod dirs {
    pub fn home_dir() -> Option<std::path::PathBuf> {
        std::env::var_os("HOME").map(std::path::PathBuf::from)
    }
}
