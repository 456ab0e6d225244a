//! Configuration management for modelpick

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the workflow backend (e.g., "http://localhost:8000/api/v1")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable read for the backend credential
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Global timeout in seconds for backend requests
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Placeholder label shown while no model is selected
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Poll interval in milliseconds for the TUI event loop
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

fn default_api_key_env() -> String {
    "MODELPICK_API_KEY".to_string()
}

const fn default_request_timeout_secs() -> u64 {
    3
}

fn default_placeholder() -> String {
    "Default (optimized)".to_string()
}

const fn default_poll_interval() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            request_timeout_secs: default_request_timeout_secs(),
            placeholder: default_placeholder(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Default config file path
    ///
    /// `MODELPICK_CONFIG` overrides the location; otherwise
    /// `$HOME/.config/modelpick/config.json`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("MODELPICK_CONFIG") {
            return PathBuf::from(path);
        }
        std::env::var("HOME").map_or_else(
            |_| PathBuf::from(".modelpick-config.json"),
            |home| {
                PathBuf::from(home)
                    .join(".config")
                    .join("modelpick")
                    .join("config.json")
            },
        )
    }

    /// Read the backend credential from the configured environment variable
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
    }
}
