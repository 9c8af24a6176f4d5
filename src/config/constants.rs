//! Configuration constants for pulpit
//!
//! This module contains all hardcoded constants used throughout the application,
//! organized by functionality and following Rust naming conventions.

// =============================================================================
// Backend and Network Constants
// =============================================================================

/// Default hostname of the media backend
pub const DEFAULT_BACKEND_HOST: &str = "localhost";

/// Default port of the media backend
pub const DEFAULT_BACKEND_PORT: u16 = 5000;

/// Timeout for a single health-check attempt in seconds
pub const HEALTH_PROBE_TIMEOUT_SECS: u64 = 3;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("pulpit/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Backend API Routes
// =============================================================================

/// Primary health-check endpoint path
pub const API_HEALTH_PATH: &str = "/api/health";

/// Bare fallback health-check path
pub const HEALTH_FALLBACK_PATH: &str = "/health";

/// Contact message endpoint path
pub const API_CONTACT_PATH: &str = "/api/contact";

// =============================================================================
// Verse Lookup Constants
// =============================================================================

/// Base URL of the third-party verse lookup API
pub const VERSE_API_BASE: &str = "https://bible-api.com";

/// Translation requested from the verse API
pub const VERSE_TRANSLATION: &str = "kjv";

// =============================================================================
// Media Upload Constants
// =============================================================================

/// MIME types accepted for audio uploads
pub const AUDIO_ALLOWED_MIME_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/mp3",
    "audio/wav",
    "audio/ogg",
    "audio/m4a",
];

/// Thumbnail used for sermons that arrive without one
pub const DEFAULT_VIDEO_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1588072432839-8ffd4625f87d?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80";

// =============================================================================
// Upload and Contact Status Messages
// =============================================================================

/// Status shown when no file was selected for upload
pub const STATUS_SELECT_FILE_FIRST: &str = "Please select a file first";

/// Status shown when no audio file was selected for upload
pub const STATUS_SELECT_AUDIO_FIRST: &str = "Please select an audio file first";

/// Status shown when an audio file has an unacceptable format
pub const STATUS_INVALID_AUDIO_FORMAT: &str =
    "Please select a valid audio file (MP3, WAV, OGG, M4A)";

/// Status shown while an upload is in flight
pub const STATUS_UPLOADING: &str = "Uploading...";

/// Status shown while an audio upload is in flight
pub const STATUS_UPLOADING_AUDIO: &str = "Uploading audio...";

/// Status shown after a successful upload
pub const STATUS_UPLOAD_SUCCESSFUL: &str = "Upload successful!";

/// Prefix for upload failures that carry a server message
pub const UPLOAD_FAILED_PREFIX: &str = "Upload failed: ";

/// Status shown when the backend cannot be reached during an upload
pub const STATUS_UPLOAD_SERVER_UNAVAILABLE: &str =
    "Upload failed: Server not available. Please check your backend connection.";

/// Status shown when a second submission is rejected by the in-flight guard
pub const STATUS_UPLOAD_ALREADY_RUNNING: &str = "An upload is already in progress";

/// Status shown while a contact message is being sent
pub const STATUS_SENDING: &str = "Sending...";

/// Status shown after a contact message was delivered
pub const STATUS_MESSAGE_SENT: &str = "Message sent successfully!";

/// Prefix for contact failures that carry a server message
pub const CONTACT_FAILED_PREFIX: &str = "Failed to send message: ";

/// Status shown when the backend cannot be reached during a contact send
pub const STATUS_CONTACT_SERVER_UNAVAILABLE: &str =
    "Failed to send message: Server not available";

// =============================================================================
// Metadata Placeholder Values
// =============================================================================

/// Title used when a video upload form leaves the title blank
pub const PLACEHOLDER_VIDEO_TITLE: &str = "New Sermon";

/// Attribution used when a video upload form leaves the preacher blank
pub const PLACEHOLDER_VIDEO_ATTRIBUTION: &str = "Guest Preacher";

/// Title used when an audio upload form leaves the title blank
pub const PLACEHOLDER_AUDIO_TITLE: &str = "New Audio Sermon";

/// Attribution used when an audio upload form leaves the speaker blank
pub const PLACEHOLDER_AUDIO_ATTRIBUTION: &str = "Guest Speaker";

/// Title used for backend-listed videos without an original name
pub const LISTING_VIDEO_TITLE: &str = "Uploaded Sermon";

/// Attribution used for backend-listed videos
pub const LISTING_VIDEO_ATTRIBUTION: &str = "Unknown Pastor";

/// Title used for backend-listed audio files without an original name
pub const LISTING_AUDIO_TITLE: &str = "Uploaded Audio";

/// Attribution used for backend-listed audio files
pub const LISTING_AUDIO_ATTRIBUTION: &str = "Unknown Speaker";

/// Title used for backend-listed images without an original name
pub const LISTING_IMAGE_TITLE: &str = "Uploaded Image";

/// Duration string used when the length of an item is not known
pub const DURATION_UNKNOWN: &str = "Unknown";

// =============================================================================
// Logging Constants
// =============================================================================

/// Environment variable name for custom log level
pub const LOG_LEVEL_ENV_VAR: &str = "PULPIT_LOG";

/// Log message for the startup connectivity probe
pub const LOG_MSG_PROBING_BACKEND: &str = "Checking backend connectivity";

/// Log message emitted when a media listing is fetched
pub const LOG_MSG_FETCHING_LISTING: &str = "Fetching media listing";

// =============================================================================
// Ministry Identity
// =============================================================================

/// Name of the organization the console serves
pub const MINISTRY_NAME: &str = "THE NEW BREED MINISTRIES WORLDWIDE";

/// Tagline shown under the organization name
pub const MINISTRY_TAGLINE: &str = "Transforming Lives Through God's Word";
