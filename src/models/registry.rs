//! Registry of known class names.

use std::collections::BTreeSet;

/// The set of class names labels can be matched against.
///
/// Classes are unique and kept sorted. The registry itself never rejects a
/// removal; the "class still in use" invariant is enforced by
/// [`LabelStore::delete_class`](crate::models::LabelStore::delete_class),
/// which owns the image label sets needed for that check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRegistry {
    classes: BTreeSet<String>,
}

impl ClassRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name` into the class set.
    ///
    /// Idempotent: inserting an existing class is a no-op. Returns true if
    /// the class was not previously known.
    pub fn add_class(&mut self, name: impl Into<String>) -> bool {
        self.classes.insert(name.into())
    }

    /// Read-only view of the current class set, sorted by name.
    ///
    /// This is the view the keystroke matcher borrows on every key; the
    /// matcher never mutates it.
    #[must_use]
    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    /// Checks whether `name` is a known class.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Removes `name` from the class set. Returns true if it was present.
    ///
    /// Raw primitive: callers are responsible for the in-use invariant.
    pub(crate) fn remove(&mut self, name: &str) -> bool {
        self.classes.remove(name)
    }

    /// Number of known classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Checks whether no classes are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
