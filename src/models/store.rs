//! Image label store with durable JSON persistence.
//!
//! The store owns the mapping from image identifier to its label set plus
//! the registry of known classes, and keeps the two consistent: every label
//! attached to any image is always a known class. All lookup/delete
//! failures are logged and absorbed; only persistence write failures
//! propagate to the caller.

use crate::models::ClassRegistry;
use crate::services::LabelFileService;
use anyhow::Result;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::error;

/// Associations between image identifiers and their label sets.
///
/// Image identifiers are opaque strings (file paths in practice); equal
/// strings are the same image. Labels are unique per image and each one is
/// registered as a class the moment it is added. Deleting a label from an
/// image never unregisters the class.
#[derive(Debug, Clone)]
pub struct LabelStore {
    /// Path the store was loaded from and saves back to.
    path: PathBuf,
    /// Image identifier -> set of labels attached to it.
    images: BTreeMap<String, BTreeSet<String>>,
    /// Known class names, the union of all labels ever added this session
    /// plus anything loaded from disk or registered explicitly.
    registry: ClassRegistry,
}

impl LabelStore {
    /// Opens the store backed by the label file at `path`.
    ///
    /// A missing or unreadable file is the expected first-run condition and
    /// yields an empty store. A present-but-malformed file logs a warning
    /// and also yields an empty store. The class set starts as the union of
    /// all loaded labels.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let images = LabelFileService::load(&path);

        let mut registry = ClassRegistry::new();
        for labels in images.values() {
            for label in labels {
                registry.add_class(label.clone());
            }
        }

        Self {
            path,
            images,
            registry,
        }
    }

    /// Path of the backing label file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Associates `label` with `image`, creating the image entry if absent.
    ///
    /// Duplicate insertion is a no-op (label sets are uniqueness-enforcing).
    /// The label is also registered as a known class. In-memory only; call
    /// [`save`](Self::save) to persist.
    pub fn add_label(&mut self, image: &str, label: &str) {
        if label.is_empty() {
            error!("refusing to add empty label to '{image}'");
            return;
        }

        self.images
            .entry(image.to_string())
            .or_default()
            .insert(label.to_string());
        self.registry.add_class(label);
    }

    /// Adds every word of a recognized-word list to `image`, then saves.
    ///
    /// This is the hand-off point for the voice-input collaborator: each
    /// word is treated as exactly one label. A single save covers the whole
    /// list.
    pub fn add_words<I, S>(&mut self, image: &str, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_label(image, word.as_ref());
        }
        self.save()
    }

    /// Removes `label` from `image`'s label set.
    ///
    /// An unknown image or a label not present on it is logged and ignored.
    /// The class stays registered either way.
    pub fn delete_label(&mut self, image: &str, label: &str) {
        match self.images.get_mut(image) {
            Some(labels) => {
                if !labels.remove(label) {
                    error!("image '{image}' has no label '{label}'");
                }
            }
            None => error!("no labels recorded for image '{image}'"),
        }
    }

    /// Labels currently attached to `image`; empty if the image is unknown.
    #[must_use]
    pub fn get_labels(&self, image: &str) -> BTreeSet<String> {
        self.images.get(image).cloned().unwrap_or_default()
    }

    /// Image identifier -> label set mapping, sorted by identifier.
    #[must_use]
    pub fn images(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.images
    }

    /// Registers `name` as a known class without labeling any image.
    pub fn add_class(&mut self, name: &str) {
        if name.is_empty() {
            error!("refusing to register empty class name");
            return;
        }
        self.registry.add_class(name);
    }

    /// The current class set, sorted by name.
    #[must_use]
    pub fn classes(&self) -> &BTreeSet<String> {
        self.registry.classes()
    }

    /// Checks whether any image currently holds `name` as a label.
    #[must_use]
    pub fn class_in_use(&self, name: &str) -> bool {
        self.images.values().any(|labels| labels.contains(name))
    }

    /// Removes `name` from the class set.
    ///
    /// Rejected (logged, state unchanged) if the class is unknown or still
    /// used as a label on any image; the in-use invariant takes precedence
    /// over the delete request.
    pub fn delete_class(&mut self, name: &str) {
        if !self.registry.contains(name) {
            error!("cannot delete unknown class '{name}'");
            return;
        }

        if self.class_in_use(name) {
            error!("cannot delete class '{name}': still used as a label");
            return;
        }

        self.registry.remove(name);
    }

    /// Persists the full image->labels mapping to the backing file.
    ///
    /// Write failures propagate: silently losing a save is a data-loss risk
    /// the caller must surface.
    pub fn save(&self) -> Result<()> {
        LabelFileService::save(&self.path, &self.images)
    }
}
