//! Command line interface for pulpit
//!
//! This module wires argument parsing to the command implementations.

mod args;
mod commands;

pub use args::{Browse, Cli, Contact, List, MediaCollection, Status, Upload, Verse};
pub use commands::Commands;

use crate::error::Result;
use clap::Parser;

/// Run the CLI application
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    cli.command.run(&cli).await
}
