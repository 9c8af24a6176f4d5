//! Media item types for pulpit
//!
//! This module defines the media kinds served by the backend and the
//! item records rendered on the media pages.

use crate::backend::RemoteMediaFile;
use crate::config::{
    DEFAULT_VIDEO_THUMBNAIL, DURATION_UNKNOWN, LISTING_AUDIO_ATTRIBUTION, LISTING_AUDIO_TITLE,
    LISTING_IMAGE_TITLE, LISTING_VIDEO_ATTRIBUTION, LISTING_VIDEO_TITLE,
    PLACEHOLDER_AUDIO_ATTRIBUTION, PLACEHOLDER_AUDIO_TITLE, PLACEHOLDER_VIDEO_ATTRIBUTION,
    PLACEHOLDER_VIDEO_TITLE,
};
use chrono::{DateTime, Local};

/// The media kinds handled by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A gallery photo
    Image,
    /// A video sermon
    Video,
    /// An audio sermon
    Audio,
}

impl MediaKind {
    /// Returns all media kinds
    pub fn all() -> Vec<MediaKind> {
        vec![MediaKind::Image, MediaKind::Video, MediaKind::Audio]
    }

    /// Returns the backend listing path for this kind
    pub fn listing_path(&self) -> &'static str {
        match self {
            MediaKind::Image => "/api/images",
            MediaKind::Video => "/api/videos",
            MediaKind::Audio => "/api/audios",
        }
    }

    /// Returns the backend upload path for this kind
    pub fn upload_path(&self) -> &'static str {
        match self {
            MediaKind::Image => "/api/upload/image",
            MediaKind::Video => "/api/upload/video",
            MediaKind::Audio => "/api/upload/audio",
        }
    }

    /// Returns the name of the multipart file field for this kind
    pub fn form_field(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }

    /// Returns the name of the attribution form field, if the kind has one
    pub fn attribution_field(&self) -> Option<&'static str> {
        match self {
            MediaKind::Image => None,
            MediaKind::Video => Some("pastor"),
            MediaKind::Audio => Some("speaker"),
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        };
        write!(f, "{name}")
    }
}

/// One playable or viewable resource with metadata, shown on a media page
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    /// The kind of resource
    pub kind: MediaKind,
    /// Item title
    pub title: String,
    /// Speaker or pastor the item is attributed to
    pub attribution: String,
    /// Date the item was recorded or uploaded
    pub date: String,
    /// Absolute URL of the resource
    pub url: String,
    /// Optional thumbnail URL
    pub thumbnail: Option<String>,
    /// Optional duration, as a clock string
    pub duration: Option<String>,
}

impl MediaItem {
    /// Builds an item from a backend listing record
    ///
    /// Listing records carry no curated metadata, so titles and
    /// attributions fall back to fixed values per kind.
    pub fn from_listing(kind: MediaKind, base_url: &str, file: &RemoteMediaFile) -> Self {
        let title = file
            .original_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| default_listing_title(kind).to_string());

        Self {
            kind,
            title,
            attribution: default_listing_attribution(kind).to_string(),
            date: format_upload_date(file.upload_date.as_deref()),
            url: format!("{}{}", base_url, file.path),
            thumbnail: default_thumbnail(kind),
            duration: default_duration(kind),
        }
    }

    /// Builds an item from a successful upload response plus the
    /// submitted form metadata
    ///
    /// Blank metadata fields fall back to the placeholder values per
    /// kind; a blank date falls back to the current date.
    pub fn from_upload(
        kind: MediaKind,
        base_url: &str,
        file_path: &str,
        title: &str,
        attribution: &str,
        date: &str,
    ) -> Self {
        let title = non_empty_or(title, default_upload_title(kind));
        let attribution = non_empty_or(attribution, default_upload_attribution(kind));
        let date = if date.is_empty() {
            current_date()
        } else {
            date.to_string()
        };

        Self {
            kind,
            title,
            attribution,
            date,
            url: format!("{base_url}{file_path}"),
            thumbnail: default_thumbnail(kind),
            duration: default_duration(kind),
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn default_listing_title(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => LISTING_IMAGE_TITLE,
        MediaKind::Video => LISTING_VIDEO_TITLE,
        MediaKind::Audio => LISTING_AUDIO_TITLE,
    }
}

fn default_listing_attribution(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "",
        MediaKind::Video => LISTING_VIDEO_ATTRIBUTION,
        MediaKind::Audio => LISTING_AUDIO_ATTRIBUTION,
    }
}

fn default_upload_title(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => LISTING_IMAGE_TITLE,
        MediaKind::Video => PLACEHOLDER_VIDEO_TITLE,
        MediaKind::Audio => PLACEHOLDER_AUDIO_TITLE,
    }
}

fn default_upload_attribution(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "",
        MediaKind::Video => PLACEHOLDER_VIDEO_ATTRIBUTION,
        MediaKind::Audio => PLACEHOLDER_AUDIO_ATTRIBUTION,
    }
}

fn default_thumbnail(kind: MediaKind) -> Option<String> {
    match kind {
        MediaKind::Video => Some(DEFAULT_VIDEO_THUMBNAIL.to_string()),
        _ => None,
    }
}

fn default_duration(kind: MediaKind) -> Option<String> {
    match kind {
        MediaKind::Audio => Some(DURATION_UNKNOWN.to_string()),
        _ => None,
    }
}

fn current_date() -> String {
    Local::now().format("%-m/%-d/%Y").to_string()
}

fn format_upload_date(upload_date: Option<&str>) -> String {
    match upload_date {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|date| date.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => current_date(),
    }
}
