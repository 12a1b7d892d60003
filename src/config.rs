//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::env::{COLOR, RESOURCE_PATH};
use crate::error::Result;
use crate::services::source::default_resource_path;
use crate::style::ColorMode;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Path to the verse resource file
    pub resource_path: PathBuf,
    /// Default text colour mode
    pub color: ColorMode,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            resource_path: default_resource_path(),
            color: ColorMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_vars(env::var(RESOURCE_PATH).ok(), env::var(COLOR).ok())
    }

    /// Build a configuration from raw variable values, applying defaults.
    fn from_vars(resource_path: Option<String>, color: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = resource_path.filter(|p| !p.trim().is_empty()) {
            config.resource_path = expand_path(&path);
        }

        if let Some(color) = color.filter(|c| !c.trim().is_empty()) {
            config.color = color.parse()?;
        }

        Ok(config)
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}
