//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory
//! resolution.

use crate::constants::DEFAULT_LABEL_FILE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Label-file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// File name used for the label store when no path is given on the
    /// command line (resolved against the current directory).
    pub default_file: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            default_file: DEFAULT_LABEL_FILE.to_string(),
        }
    }
}

/// Keystroke-matching settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MatchingConfig {
    /// Class names made available to the matcher before any label exists,
    /// so a fresh session can match against a predefined vocabulary.
    #[serde(default)]
    pub seed_classes: Vec<String>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/quicktag/config.toml`
/// - macOS: `~/Library/Application Support/quicktag/config.toml`
/// - Windows: `%APPDATA%\quicktag\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Label-file settings
    #[serde(default)]
    pub labels: LabelsConfig,
    /// Keystroke-matching settings
    #[serde(default)]
    pub matching: MatchingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// `QUICKTAG_CONFIG_DIR` overrides the platform default, which keeps
    /// scripted runs and tests away from the user's real configuration.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os("QUICKTAG_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("quicktag");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).with_context(|| {
            format!("Failed to read config file: {}", config_path.display())
        })?;

        let config: Self = toml::from_str(&content).with_context(|| {
            format!("Failed to parse config file: {}", config_path.display())
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).with_context(|| {
            format!("Failed to create config directory: {}", config_dir.display())
        })?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, &config_path).with_context(|| {
            format!("Failed to rename temp config file to: {}", config_path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.labels.default_file.trim().is_empty() {
            anyhow::bail!("labels.default_file cannot be empty");
        }

        if let Some(class) = self
            .matching
            .seed_classes
            .iter()
            .find(|class| class.is_empty())
        {
            anyhow::bail!("matching.seed_classes contains an empty class name: {class:?}");
        }

        Ok(())
    }

    /// Resolves the label-file path for a command invocation.
    ///
    /// An explicit path always wins; otherwise the configured default file
    /// name in the current directory is used.
    #[must_use]
    pub fn resolve_label_file(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit.unwrap_or_else(|| PathBuf::from(&self.labels.default_file))
    }
}
