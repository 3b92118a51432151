//! Label file I/O service.
//!
//! This module centralizes all label-file operations, providing a
//! consistent interface for loading and saving the image->labels mapping.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Service for label-file persistence.
///
/// The on-disk format is a UTF-8 JSON object: image identifiers as keys,
/// sorted arrays of label strings as values. Sorted maps and sets make the
/// written file deterministic and diff-friendly.
pub struct LabelFileService;

impl LabelFileService {
    /// Loads the image->labels mapping from `path`.
    ///
    /// A file that cannot be opened is the expected first-run condition and
    /// yields an empty mapping without any logging. A file that opens but
    /// does not parse as the expected JSON shape logs a warning and also
    /// yields an empty mapping; prior on-disk state is never a fatal error.
    #[must_use]
    pub fn load(path: &Path) -> BTreeMap<String, BTreeSet<String>> {
        let Ok(content) = fs::read_to_string(path) else {
            return BTreeMap::new();
        };

        match serde_json::from_str(&content) {
            Ok(images) => images,
            Err(err) => {
                warn!(
                    "ignoring malformed label file {}: {err}",
                    path.display()
                );
                BTreeMap::new()
            }
        }
    }

    /// Saves the image->labels mapping to `path` as pretty-printed JSON.
    ///
    /// This performs an atomic write using a temp file + rename pattern so
    /// a crash mid-write never corrupts previously-saved data.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file system operation
    /// fails. Unlike load, write failures always propagate: silently losing
    /// a save is a data-loss risk.
    pub fn save(path: &Path, images: &BTreeMap<String, BTreeSet<String>>) -> Result<()> {
        let content =
            serde_json::to_string_pretty(images).context("Failed to serialize label data")?;

        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp label file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp label file to: {}", path.display())
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_images() -> BTreeMap<String, BTreeSet<String>> {
        let mut images = BTreeMap::new();
        images.insert(
            "cat1.jpg".to_string(),
            ["cat", "orange"].into_iter().map(String::from).collect(),
        );
        images.insert(
            "dog1.jpg".to_string(),
            ["dog"].into_iter().map(String::from).collect(),
        );
        images
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let images = LabelFileService::load(&temp_dir.path().join("absent.json"));
        assert!(images.is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not JSON").unwrap();

        let images = LabelFileService::load(&path);
        assert!(images.is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wrong.json");
        fs::write(&path, r#"["cat", "dog"]"#).unwrap();

        let images = LabelFileService::load(&path);
        assert!(images.is_empty());
    }

    #[test]
    fn test_load_deduplicates_label_lists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.json");
        fs::write(&path, r#"{"foo.jpg": ["cat", "cat", "dog"]}"#).unwrap();

        let images = LabelFileService::load(&path);
        assert_eq!(images["foo.jpg"].len(), 2);
    }

    #[test]
    fn test_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.json");
        let images = sample_images();

        LabelFileService::save(&path, &images).unwrap();

        assert_eq!(LabelFileService::load(&path), images);
    }

    #[test]
    fn test_save_writes_sorted_pretty_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.json");

        LabelFileService::save(&path, &sample_images()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        // Deterministic output: keys and label arrays in sorted order,
        // indented for diff-friendliness.
        let cat = content.find("cat1.jpg").unwrap();
        let dog = content.find("dog1.jpg").unwrap();
        assert!(cat < dog);
        assert!(content.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["cat1.jpg"][0], "cat");
        assert_eq!(value["cat1.jpg"][1], "orange");
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.json");

        LabelFileService::save(&path, &sample_images()).unwrap();

        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("labels.json");

        LabelFileService::save(&path, &sample_images()).unwrap();
        LabelFileService::save(&path, &BTreeMap::new()).unwrap();

        assert!(LabelFileService::load(&path).is_empty());
    }

    #[test]
    fn test_save_missing_directory_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such-dir").join("labels.json");

        assert!(LabelFileService::save(&path, &sample_images()).is_err());
    }
}
