//! Backend integration for pulpit
//!
//! This module provides everything that talks to the media backend:
//! - The startup connectivity probe
//! - The REST client for listings, uploads, and contact messages

pub mod client;
pub mod probe;

// Re-export main types and functions
pub use client::{BackendClient, ContactMessage, RemoteMediaFile, UploadResponse, UploadedFile};
pub use probe::{
    ConnectivityState, HealthCandidate, ProbeOutcome, health_candidates, probe_backend, probe_with,
};
