//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Path to the quicktag binary (set by cargo at compile time)
pub fn quicktag_bin() -> &'static str {
    env!("CARGO_BIN_EXE_quicktag")
}

/// Builds a quicktag command with config redirected into `config_dir`.
///
/// Pointing `QUICKTAG_CONFIG_DIR` at a per-test directory keeps the user's
/// real configuration untouched and isolates tests from each other.
pub fn quicktag_cmd(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(quicktag_bin());
    cmd.env("QUICKTAG_CONFIG_DIR", config_dir);
    cmd
}

/// Per-test environment: a temp dir holding the label file and an isolated
/// config directory.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub label_file: PathBuf,
    pub config_dir: PathBuf,
}

impl TestEnv {
    /// Creates an empty environment (no label file on disk yet).
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let label_file = temp_dir.path().join("labels.json");
        let config_dir = temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            label_file,
            config_dir,
        }
    }

    /// Creates an environment with a pre-written label file.
    pub fn with_labels(json: &str) -> Self {
        let env = Self::new();
        fs::write(&env.label_file, json).expect("Failed to write label file");
        env
    }

    /// Creates an environment whose config seeds the given classes.
    pub fn with_seed_classes(classes: &[&str]) -> Self {
        let env = Self::new();
        let seeds = classes
            .iter()
            .map(|class| format!("{class:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        fs::write(
            env.config_dir.join("config.toml"),
            format!("[matching]\nseed_classes = [{seeds}]\n"),
        )
        .expect("Failed to write config file");
        env
    }

    /// Builds a quicktag command bound to this environment.
    pub fn cmd(&self) -> Command {
        quicktag_cmd(&self.config_dir)
    }

    /// The label-file path as a &str for command arguments.
    pub fn label_file_arg(&self) -> &str {
        self.label_file.to_str().expect("non-UTF8 temp path")
    }

    /// Reads the label file back as parsed JSON.
    pub fn read_labels(&self) -> serde_json::Value {
        let content = fs::read_to_string(&self.label_file).expect("Failed to read label file");
        serde_json::from_str(&content).expect("Label file should be valid JSON")
    }
}

/// A label file with the matcher's canonical prefix-collision vocabulary
/// spread across a few images.
pub fn collision_labels_json() -> &'static str {
    r#"{
    "a.jpg": ["foo", "bar"],
    "b.jpg": ["bar1"],
    "c.jpg": ["spam and", "spam and eggs"]
}"#
}
