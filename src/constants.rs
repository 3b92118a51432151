//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Quicktag";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "quicktag";

/// Default file name for the label store when no path is given.
pub const DEFAULT_LABEL_FILE: &str = "labels.json";
