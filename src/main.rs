//! Quicktag - keyboard-driven image label store.
//!
//! Labels are free-text class names attached to image files and persisted
//! as JSON. The `match` command exposes the same incremental keystroke
//! matcher an interactive frontend drives per keypress.

use clap::{Parser, Subcommand};
use quicktag::cli::{ClassArgs, LabelArgs, MatchArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Quicktag - keyboard-driven image label store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage labels attached to images
    Label(LabelArgs),
    /// Manage the class vocabulary
    Class(ClassArgs),
    /// Feed keystrokes through the incremental class matcher
    #[command(name = "match")]
    Match(MatchArgs),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quicktag=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Label(args) => args.execute(),
        Command::Class(args) => args.execute(),
        Command::Match(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
