//! Formatting utilities for pulpit
//!
//! This module provides functions for formatting display strings,
//! particularly media item lines and status message classification.

use crate::config::{CONTACT_FAILED_PREFIX, STATUS_CONTACT_SERVER_UNAVAILABLE};
use crate::error::Error;

/// Formats a media item description for display
///
/// # Arguments
/// * `kind` - The media kind
/// * `title` - The item title
/// * `attribution` - The speaker or pastor
/// * `date` - The item date
///
/// # Returns
/// Returns a formatted string describing the item
pub fn format_media_description(kind: &str, title: &str, attribution: &str, date: &str) -> String {
    format!("[{kind}] {title} - {attribution} | {date}")
}

/// Tone of a status message, used to pick its display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// The operation completed successfully
    Success,
    /// The operation failed
    Failure,
    /// The operation is pending or informational
    Info,
}

/// Classifies a status message into a tone
///
/// The upload and contact workflows encode their outcome in the status
/// text itself, so classification is by substring.
pub fn status_tone(status: &str) -> StatusTone {
    if status.contains("success") {
        StatusTone::Success
    } else if status.contains("failed") || status.contains("Failed") {
        StatusTone::Failure
    } else {
        StatusTone::Info
    }
}

/// Maps a contact error to its user-visible status line
pub fn contact_failure_status(err: &Error) -> String {
    match err {
        Error::BackendRejected { message, .. } => format!("{CONTACT_FAILED_PREFIX}{message}"),
        Error::BackendUnreachable { .. } => STATUS_CONTACT_SERVER_UNAVAILABLE.to_string(),
        other => format!("{CONTACT_FAILED_PREFIX}{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_failure_status() {
        let rejected = Error::BackendRejected {
            operation: "Contact message".to_string(),
            status: 400,
            message: "Missing email".to_string(),
        };
        assert_eq!(
            contact_failure_status(&rejected),
            "Failed to send message: Missing email"
        );
    }

    #[test]
    fn test_format_media_description() {
        assert_eq!(
            format_media_description("audio", "The Power of Faith", "Pastor John Smith", "June 12, 2023"),
            "[audio] The Power of Faith - Pastor John Smith | June 12, 2023"
        );
    }

    #[test]
    fn test_status_tone() {
        assert_eq!(status_tone("Upload successful!"), StatusTone::Success);
        assert_eq!(status_tone("Message sent successfully!"), StatusTone::Success);
        assert_eq!(status_tone("Upload failed: Disk full"), StatusTone::Failure);
        assert_eq!(
            status_tone("Failed to send message: Server not available"),
            StatusTone::Failure
        );
        assert_eq!(status_tone("Please select a file first"), StatusTone::Info);
        assert_eq!(status_tone("Uploading..."), StatusTone::Info);
        assert_eq!(status_tone("Sending..."), StatusTone::Info);
    }
}
