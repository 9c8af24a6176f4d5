//! CLI argument parsing for pulpit
//!
//! This module contains the CLI argument definitions and parsing logic
//! using the clap crate.

use crate::config::{Config, DEFAULT_BACKEND_HOST, DEFAULT_BACKEND_PORT, HEALTH_PROBE_TIMEOUT_SECS};
use crate::media::MediaKind;
use clap::{Args, Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// A terminal media console for church ministry backends
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Hostname of the media backend
    #[arg(short = 'H', long = "host", default_value = DEFAULT_BACKEND_HOST)]
    pub host: String,

    /// Port of the media backend
    #[arg(short = 'P', long = "port", default_value_t = DEFAULT_BACKEND_PORT)]
    pub port: u16,

    /// Time in seconds to wait for each health-check attempt
    #[arg(short, long, default_value_t = HEALTH_PROBE_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// The command to execute
    #[command(subcommand)]
    pub command: super::Commands,
}

impl Cli {
    /// Build a Config from CLI arguments
    pub fn build_config(&self) -> Config {
        Config::new()
            .with_backend_host(self.host.clone())
            .with_backend_port(self.port)
            .with_probe_timeout(self.timeout)
            .with_log_level(self.log_level)
    }
}

/// A media collection served by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MediaCollection {
    /// Gallery photos
    Images,
    /// Video sermons
    Videos,
    /// Audio sermons
    Audios,
}

impl MediaCollection {
    /// Returns the media kind of this collection
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaCollection::Images => MediaKind::Image,
            MediaCollection::Videos => MediaKind::Video,
            MediaCollection::Audios => MediaKind::Audio,
        }
    }
}

/// Status command arguments
#[derive(Args)]
pub struct Status;

/// List command arguments
#[derive(Args)]
pub struct List {
    /// The media collection to list
    #[arg(value_enum)]
    pub collection: MediaCollection,
}

/// Upload command arguments
#[derive(Args)]
pub struct Upload {
    /// The media collection to upload into
    #[arg(value_enum)]
    pub collection: MediaCollection,

    /// The file to upload
    #[arg(short, long)]
    pub file: PathBuf,

    /// Title of the item
    #[arg(long)]
    pub title: Option<String>,

    /// Speaker or pastor the item is attributed to
    #[arg(short, long)]
    pub speaker: Option<String>,

    /// Recording date
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category (sermon, teaching, testimony, ...)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Brief description of the content
    #[arg(long)]
    pub description: Option<String>,
}

/// Verse command arguments
#[derive(Args)]
pub struct Verse {
    /// Book name (e.g. John, "1 Corinthians")
    pub book: String,

    /// Chapter number
    pub chapter: u32,

    /// Verse number
    pub verse: u32,
}

/// Contact command arguments
#[derive(Args)]
pub struct Contact {
    /// Your name
    #[arg(short, long)]
    pub name: String,

    /// Your email address
    #[arg(short, long)]
    pub email: String,

    /// Message subject
    #[arg(short, long)]
    pub subject: Option<String>,

    /// Message body
    #[arg(short, long)]
    pub message: String,
}

/// Browse command arguments
#[derive(Args)]
pub struct Browse;
