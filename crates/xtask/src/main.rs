//! Development tasks for the progression workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{CheckContent, Level, Pet, Roll};

/// Development tasks for the progression workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for progression content", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Load every content file and report what was found
    CheckContent(CheckContent),

    /// Resolve a discipline's level from an XP total
    Level(Level),

    /// Show a companion's abilities and stat contribution
    Pet(Pet),

    /// Roll reforges for an item category
    Roll(Roll),
}

fn main() -> Result<()> {
    // Loader warnings (dropped stats, unknown rarities) go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::CheckContent(cmd) => cmd.execute(),
        Command::Level(cmd) => cmd.execute(),
        Command::Pet(cmd) => cmd.execute(),
        Command::Roll(cmd) => cmd.execute(),
    }
}
