//! Media file helpers for pulpit
//!
//! This module provides MIME detection for upload candidates and
//! filename sanitization for multipart submissions.

use std::path::Path;

/// Detects the MIME type of a media file from its extension
///
/// # Arguments
/// * `path` - Path to the media file
///
/// # Returns
/// Returns the MIME type, or `application/octet-stream` when the
/// extension is not recognized
pub fn media_mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "m4a" => "audio/m4a",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Sanitizes a filename for use in a multipart submission
///
/// # Arguments
/// * `filename` - The filename to sanitize
///
/// # Returns
/// Returns a URL-safe version of the filename
pub fn sanitize_filename_for_upload(filename: &str) -> String {
    use slugify::slugify;
    slugify!(filename, separator = ".")
}
