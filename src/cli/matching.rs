//! Keystroke-matching probe command.
//!
//! Feeds a sequence of characters through the incremental matcher against
//! the current class set and reports the decision after each key. This is
//! the scriptable equivalent of typing into the labeling window.

use crate::cli::common::{load_config, open_store, print_json, CliResult};
use crate::matcher::{KeystrokeMatcher, MatchOutcome};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Feed keystrokes through the incremental class matcher
#[derive(Debug, Clone, Args)]
pub struct MatchArgs {
    /// Path to the label file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Characters to feed, in order (quote trailing spaces)
    #[arg(value_name = "KEYS")]
    pub keys: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct MatchEvent {
    key: String,
    committed: Option<String>,
}

#[derive(Debug, Serialize)]
struct MatchResponse {
    events: Vec<MatchEvent>,
    committed: Vec<String>,
}

impl MatchArgs {
    /// Execute the match command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let store = open_store(&config, self.file.clone());

        let mut matcher = KeystrokeMatcher::new();
        let mut events = Vec::new();

        for key in self.keys.chars() {
            let outcome = matcher.match_class(&key.to_string(), store.classes());
            events.push(MatchEvent {
                key: key.to_string(),
                committed: match outcome {
                    MatchOutcome::Committed(class) => Some(class),
                    MatchOutcome::Pending => None,
                },
            });
        }

        let response = MatchResponse {
            committed: events
                .iter()
                .filter_map(|event| event.committed.clone())
                .collect(),
            events,
        };

        if self.json {
            print_json(&response)?;
        } else {
            for event in &response.events {
                match &event.committed {
                    Some(class) => println!("{:?}: committed '{class}'", event.key),
                    None => println!("{:?}: no decision", event.key),
                }
            }
            if response.committed.is_empty() {
                println!("No class committed.");
            }
        }

        Ok(())
    }
}
