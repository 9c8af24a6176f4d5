//! Media handling for pulpit
//!
//! This module provides the media-page building blocks:
//! - Media items and kinds
//! - Per-page media libraries
//! - The playback transport state machine
//! - The upload workflow

pub mod item;
pub mod library;
pub mod player;
pub mod upload;

// Re-export main types for convenient access
pub use item::{MediaItem, MediaKind};
pub use library::MediaLibrary;
pub use player::{MediaPlayer, PlaybackState};
pub use upload::{UploadForm, UploadPhase, UploadRequest, UploadWorkflow};
