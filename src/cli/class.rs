//! Class vocabulary commands.
//!
//! Provides commands to list and manage the class names available to the
//! keystroke matcher. The persisted vocabulary (beyond labels already
//! attached to images) lives in the app config's seed list.

use crate::cli::common::{load_config, open_store, print_json, CliError, CliResult};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Manage the class vocabulary
#[derive(Debug, Clone, Args)]
pub struct ClassArgs {
    /// Class subcommand
    #[command(subcommand)]
    pub command: ClassCommand,
}

/// Class management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ClassCommand {
    /// List all known classes
    List(ListClassesArgs),
    /// Add a class to the configured vocabulary
    Add(AddClassArgs),
    /// Delete a class from the vocabulary
    Delete(DeleteClassArgs),
}

/// List all known classes
#[derive(Debug, Clone, Args)]
pub struct ListClassesArgs {
    /// Path to the label file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a class to the configured vocabulary
#[derive(Debug, Clone, Args)]
pub struct AddClassArgs {
    /// Class name to add
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Delete a class from the vocabulary
#[derive(Debug, Clone, Args)]
pub struct DeleteClassArgs {
    /// Path to the label file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Class name to delete
    #[arg(value_name = "NAME")]
    pub name: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ListClassesResponse {
    classes: Vec<String>,
    count: usize,
}

impl ClassArgs {
    /// Execute the class command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ClassCommand::List(args) => args.execute(),
            ClassCommand::Add(args) => args.execute(),
            ClassCommand::Delete(args) => args.execute(),
        }
    }
}

impl ListClassesArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let store = open_store(&config, self.file.clone());

        let response = ListClassesResponse {
            classes: store.classes().iter().cloned().collect(),
            count: store.classes().len(),
        };

        if self.json {
            print_json(&response)?;
        } else if response.count == 0 {
            println!("No classes known.");
        } else {
            println!("Classes ({}):", response.count);
            for class in &response.classes {
                println!("  {class}");
            }
        }

        Ok(())
    }
}

impl AddClassArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        if self.name.trim().is_empty() {
            return Err(CliError::validation("Class name cannot be empty"));
        }

        let mut config = load_config();

        if config.matching.seed_classes.contains(&self.name) {
            return Err(CliError::validation(format!(
                "Class '{}' is already in the vocabulary",
                self.name
            )));
        }

        config.matching.seed_classes.push(self.name.clone());
        config.matching.seed_classes.sort();
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save config: {e}")))?;

        println!("Class '{}' added to the vocabulary.", self.name);
        Ok(())
    }
}

impl DeleteClassArgs {
    /// Execute the delete command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = load_config();
        let mut store = open_store(&config, self.file.clone());

        if !store.classes().contains(&self.name) {
            return Err(CliError::validation(format!(
                "Class '{}' not found",
                self.name
            )));
        }

        // The in-use invariant takes precedence over the delete request.
        if store.class_in_use(&self.name) {
            return Err(CliError::validation(format!(
                "Class '{}' is still used as a label; remove it from all images first",
                self.name
            )));
        }

        store.delete_class(&self.name);

        if let Some(position) = config
            .matching
            .seed_classes
            .iter()
            .position(|class| class == &self.name)
        {
            config.matching.seed_classes.remove(position);
            config
                .save()
                .map_err(|e| CliError::io(format!("Failed to save config: {e}")))?;
        }

        println!("Class '{}' deleted.", self.name);
        Ok(())
    }
}
