//! # pulpit
//!
//! A terminal media console for church ministry backends.
//!
//! pulpit talks to a companion media backend (uploads, listings, health,
//! contact messages) and to the public bible-api.com verse service, and
//! renders the ministry's pages, media libraries, and playback controls
//! in the terminal.
//!
//! ## Components
//!
//! - [`backend`]: the startup connectivity probe and the REST client
//! - [`media`]: media items, per-page libraries, the playback state
//!   machine, and the upload workflow
//! - [`verse`]: the Bible verse lookup client
//! - [`content`]: the static page inventory and copy
//! - [`cli`] and [`tui`]: the command line and terminal interfaces
//!
//! ## Example
//!
//! ```no_run
//! use pulpit::{BackendClient, ConnectivityState, probe_backend};
//! use pulpit::config::BackendConfig;
//!
//! #[tokio::main]
//! async fn main() -> pulpit::Result<()> {
//!     let outcome = probe_backend(&BackendConfig::default(), 3).await;
//!     if outcome.state == ConnectivityState::Connected {
//!         let client = BackendClient::new(outcome.backend)?;
//!         for file in client.list_media(pulpit::MediaKind::Audio).await? {
//!             println!("{}", file.path);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod media;
pub mod tui;
pub mod utils;
pub mod verse;

// Re-export the main types for library users
pub use backend::{
    BackendClient, ConnectivityState, ContactMessage, ProbeOutcome, RemoteMediaFile,
    probe_backend,
};
pub use config::Config;
pub use content::Page;
pub use error::{Error, Result};
pub use media::{
    MediaItem, MediaKind, MediaLibrary, MediaPlayer, PlaybackState, UploadForm, UploadPhase,
    UploadWorkflow,
};
pub use tui::start_tui;
pub use verse::{BOOKS_OF_THE_BIBLE, Verse, VerseClient, VerseQuery};
