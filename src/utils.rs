//! Utility functions and helpers for pulpit
//!
//! This module provides various utility functions organized by functionality:
//! - Playback clock formatting and parsing
//! - Media file MIME detection
//! - Text formatting and display utilities

pub mod formatting;
pub mod media;
pub mod time;

// Re-export commonly used functions
pub use formatting::{StatusTone, contact_failure_status, format_media_description, status_tone};
pub use media::{media_mime_for_path, sanitize_filename_for_upload};
pub use time::{format_playback_clock, parse_clock_string};
