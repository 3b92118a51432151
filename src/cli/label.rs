//! Label management commands.
//!
//! Provides commands to add, remove, and show the labels attached to
//! images in a label file.

use crate::cli::common::{load_config, open_store, print_json, CliError, CliResult};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Manage labels attached to images
#[derive(Debug, Clone, Args)]
pub struct LabelArgs {
    /// Label subcommand
    #[command(subcommand)]
    pub command: LabelCommand,
}

/// Label management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum LabelCommand {
    /// Attach one or more labels to an image
    Add(AddLabelArgs),
    /// Remove a label from an image
    Remove(RemoveLabelArgs),
    /// Show labels for one image or the whole store
    Show(ShowLabelsArgs),
}

/// Attach one or more labels to an image
#[derive(Debug, Clone, Args)]
pub struct AddLabelArgs {
    /// Path to the label file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Image identifier (file path)
    #[arg(value_name = "IMAGE")]
    pub image: String,

    /// Labels to attach; several at once is the word-list form used by
    /// transcribed speech input
    #[arg(value_name = "LABEL", required = true, num_args = 1..)]
    pub labels: Vec<String>,
}

/// Remove a label from an image
#[derive(Debug, Clone, Args)]
pub struct RemoveLabelArgs {
    /// Path to the label file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Image identifier (file path)
    #[arg(value_name = "IMAGE")]
    pub image: String,

    /// Label to remove
    #[arg(value_name = "LABEL")]
    pub label: String,
}

/// Show labels for one image or the whole store
#[derive(Debug, Clone, Args)]
pub struct ShowLabelsArgs {
    /// Path to the label file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Image identifier; all images when omitted
    #[arg(value_name = "IMAGE")]
    pub image: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ImageLabels {
    image: String,
    labels: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ShowLabelsResponse {
    images: Vec<ImageLabels>,
    count: usize,
}

impl LabelArgs {
    /// Execute the label command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            LabelCommand::Add(args) => args.execute(),
            LabelCommand::Remove(args) => args.execute(),
            LabelCommand::Show(args) => args.execute(),
        }
    }
}

impl AddLabelArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        if let Some(label) = self.labels.iter().find(|label| label.trim().is_empty()) {
            return Err(CliError::validation(format!(
                "Label cannot be empty or whitespace: {label:?}"
            )));
        }

        let config = load_config();
        let mut store = open_store(&config, self.file.clone());

        store
            .add_words(&self.image, &self.labels)
            .map_err(|e| CliError::io(format!("Failed to save labels: {e}")))?;

        println!(
            "Added {} label(s) to '{}'.",
            self.labels.len(),
            self.image
        );
        Ok(())
    }
}

impl RemoveLabelArgs {
    /// Execute the remove command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let mut store = open_store(&config, self.file.clone());

        // Pre-flight: the store itself absorbs unknown images/labels, but
        // the command should fail loudly so scripts can rely on exit codes.
        if !store.get_labels(&self.image).contains(&self.label) {
            return Err(CliError::validation(format!(
                "Image '{}' has no label '{}'",
                self.image, self.label
            )));
        }

        store.delete_label(&self.image, &self.label);
        store
            .save()
            .map_err(|e| CliError::io(format!("Failed to save labels: {e}")))?;

        println!("Removed label '{}' from '{}'.", self.label, self.image);
        Ok(())
    }
}

impl ShowLabelsArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let store = open_store(&config, self.file.clone());

        let selected: BTreeMap<String, Vec<String>> = match &self.image {
            Some(image) => {
                let labels = store.get_labels(image);
                BTreeMap::from([(image.clone(), labels.into_iter().collect())])
            }
            None => store
                .images()
                .iter()
                .map(|(image, labels)| (image.clone(), labels.iter().cloned().collect()))
                .collect(),
        };

        let response = ShowLabelsResponse {
            count: selected.len(),
            images: selected
                .into_iter()
                .map(|(image, labels)| ImageLabels { image, labels })
                .collect(),
        };

        if self.json {
            print_json(&response)?;
        } else if response.images.iter().all(|entry| entry.labels.is_empty()) {
            println!("No labels recorded.");
        } else {
            for entry in &response.images {
                println!("{}: {}", entry.image, entry.labels.join(", "));
            }
        }

        Ok(())
    }
}
