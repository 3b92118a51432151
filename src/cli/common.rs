//! Shared CLI error type and helpers.

use crate::config::Config;
use crate::models::LabelStore;
use std::fmt;
use std::path::PathBuf;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Error raised by a CLI command, mapped to a process exit code.
#[derive(Debug)]
pub enum CliError {
    /// Invalid arguments or a rejected operation (exit code 2).
    Validation(String),
    /// File system or serialization failure (exit code 3).
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Io(_) => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::Io(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Loads the app config, falling back to defaults on any failure.
#[must_use]
pub fn load_config() -> Config {
    Config::load().unwrap_or_default()
}

/// Opens the label store for a command invocation.
///
/// Resolves the file path (explicit flag wins over the configured default)
/// and seeds the class set with the configured vocabulary so matching works
/// before any label exists.
#[must_use]
pub fn open_store(config: &Config, file: Option<PathBuf>) -> LabelStore {
    let path = config.resolve_label_file(file);
    let mut store = LabelStore::load(path);

    for class in &config.matching.seed_classes {
        store.add_class(class);
    }

    store
}

/// Serializes a JSON CLI response to stdout.
pub fn print_json<T: serde::Serialize>(response: &T) -> CliResult<()> {
    println!(
        "{}",
        serde_json::to_string(response)
            .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad").exit_code(), 2);
        assert_eq!(CliError::io("disk").exit_code(), 3);
    }

    #[test]
    fn test_display_message() {
        assert_eq!(CliError::validation("no such label").to_string(), "no such label");
    }

    #[test]
    fn test_open_store_seeds_classes() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut config = Config::new();
        config.matching.seed_classes = vec!["cat".to_string(), "dog".to_string()];

        let store = open_store(
            &config,
            Some(temp_dir.path().join("labels.json")),
        );

        assert!(store.classes().contains("cat"));
        assert!(store.classes().contains("dog"));
        assert!(store.images().is_empty());
    }
}
