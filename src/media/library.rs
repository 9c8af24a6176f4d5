//! Media library management for pulpit
//!
//! This module provides the per-page list of media items, seeded with
//! sample content and extended by backend listings and successful
//! uploads.

use crate::backend::RemoteMediaFile;
use crate::media::{MediaItem, MediaKind};
use log::info;

/// Represents the media list shown on one page
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    /// The media kind held by this library
    kind: MediaKind,
    /// Items in display order
    items: Vec<MediaItem>,
    /// Whether the backend listing has been merged in
    synced: bool,
}

impl MediaLibrary {
    /// Creates a new empty library
    pub fn new(kind: MediaKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            synced: false,
        }
    }

    /// Creates a library seeded with the page's sample items
    pub fn with_sample_items(kind: MediaKind) -> Self {
        let mut library = Self::new(kind);
        for item in sample_items(kind) {
            library.append(item);
        }
        library
    }

    /// Returns the media kind held by this library
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Appends an item to the library
    pub fn append(&mut self, item: MediaItem) {
        self.items.push(item);
    }

    /// Merges a backend listing into the library
    ///
    /// Items are appended after the seeds, preserving listing order.
    pub fn merge_listing(&mut self, base_url: &str, files: &[RemoteMediaFile]) {
        for file in files {
            self.items
                .push(MediaItem::from_listing(self.kind, base_url, file));
        }
        self.synced = true;
        info!(
            "Merged {} backend {} files into the library",
            files.len(),
            self.kind
        );
    }

    /// Returns whether the backend listing has already been merged
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    /// Gets an item by index
    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    /// Gets all items in the library
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Returns whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the library
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Returns the sample items a page starts with before any backend data
fn sample_items(kind: MediaKind) -> Vec<MediaItem> {
    match kind {
        MediaKind::Image => vec![
            sample_image("https://images.unsplash.com/photo-1505506874110-6a7a69069a08?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80", 1),
            sample_image("https://images.unsplash.com/photo-1534337621606-e3df5ee0e97f?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80", 2),
            sample_image("https://images.unsplash.com/photo-1518837695005-2083093ee35b?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80", 3),
        ],
        MediaKind::Video => vec![
            sample_video(
                "The Power of Faith",
                "Pastor John Smith",
                "June 12, 2023",
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
                "https://images.unsplash.com/photo-1505506874110-6a7a69069a08?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
            ),
            sample_video(
                "Walking in Grace",
                "Pastor Sarah Johnson",
                "June 5, 2023",
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
                "https://images.unsplash.com/photo-1534337621606-e3df5ee0e97f?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
            ),
            sample_video(
                "Finding Peace in Troubled Times",
                "Pastor John Smith",
                "May 29, 2023",
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
                "https://images.unsplash.com/photo-1518837695005-2083093ee35b?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
            ),
        ],
        MediaKind::Audio => vec![
            sample_audio(
                "The Foundation of Faith",
                "Pastor Michael Brown",
                "December 15, 2024",
                "45:30",
            ),
            sample_audio(
                "Living in God's Grace",
                "Pastor Sarah Johnson",
                "December 8, 2024",
                "38:15",
            ),
            sample_audio(
                "Prayer and Fasting",
                "Prophet David Wilson",
                "December 1, 2024",
                "52:22",
            ),
        ],
    }
}

fn sample_image(url: &str, number: usize) -> MediaItem {
    MediaItem {
        kind: MediaKind::Image,
        title: format!("Church event {number}"),
        attribution: String::new(),
        date: String::new(),
        url: url.to_string(),
        thumbnail: None,
        duration: None,
    }
}

fn sample_video(title: &str, pastor: &str, date: &str, url: &str, thumbnail: &str) -> MediaItem {
    MediaItem {
        kind: MediaKind::Video,
        title: title.to_string(),
        attribution: pastor.to_string(),
        date: date.to_string(),
        url: url.to_string(),
        thumbnail: Some(thumbnail.to_string()),
        duration: None,
    }
}

fn sample_audio(title: &str, speaker: &str, date: &str, duration: &str) -> MediaItem {
    MediaItem {
        kind: MediaKind::Audio,
        title: title.to_string(),
        attribution: speaker.to_string(),
        date: date.to_string(),
        url: "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav".to_string(),
        thumbnail: None,
        duration: Some(duration.to_string()),
    }
}
