//! CLI command implementations for pulpit
//!
//! This module contains the implementation of the CLI commands:
//! status, list, upload, verse, contact, and browse.

mod browse;
mod contact;
mod list;
mod status;
mod upload;
mod verse;

pub use browse::BrowseCommand;
pub use contact::ContactCommand;
pub use list::ListCommand;
pub use status::StatusCommand;
pub use upload::UploadCommand;
pub use verse::VerseCommand;

use crate::error::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Probe the backend health endpoints and report connectivity
    Status(super::Status),

    /// List the media items of a collection
    List(super::List),

    /// Upload a media file with its metadata
    Upload(super::Upload),

    /// Look up a Bible verse
    Verse(super::Verse),

    /// Send a contact message to the ministry
    Contact(super::Contact),

    /// Browse the ministry pages in the terminal interface
    Browse(super::Browse),
}

impl Commands {
    /// Execute the command
    pub async fn run(&self, cli: &super::Cli) -> Result<()> {
        let config = cli.build_config();
        self.setup_log();
        match self {
            Self::Status(status) => StatusCommand::new(status).run(&config).await?,
            Self::List(list) => ListCommand::new(list).run(&config).await?,
            Self::Upload(upload) => UploadCommand::new(upload).run(&config).await?,
            Self::Verse(verse) => VerseCommand::new(verse).run(&config).await?,
            Self::Contact(contact) => ContactCommand::new(contact).run(&config).await?,
            Self::Browse(browse) => BrowseCommand::new(browse).run(&config).await?,
        }
        Ok(())
    }

    /// Setup logging configuration
    fn setup_log(&self) {
        use crate::config::LOG_LEVEL_ENV_VAR;
        use log::LevelFilter;
        use simple_logger::SimpleLogger;
        use std::env;

        let log_level = if let Ok(pulpit_log) = env::var(LOG_LEVEL_ENV_VAR) {
            match pulpit_log.as_str() {
                "trace" => LevelFilter::Trace,
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => LevelFilter::Info,
            }
        } else {
            LevelFilter::Info
        };

        SimpleLogger::new()
            .with_level(log_level)
            .init()
            .unwrap_or_else(|_| eprintln!("Warning: Logger already initialized"));
    }
}
