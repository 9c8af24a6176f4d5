//! Upload workflow for pulpit
//!
//! This module implements the submit-validate-post-update cycle that
//! adds a new media item to a page: precondition checks before any
//! network traffic, a user-visible status string through every phase,
//! and a guard that rejects a second submission while one is in flight.

use crate::backend::{BackendClient, UploadResponse};
use crate::config::{
    AUDIO_ALLOWED_MIME_TYPES, STATUS_INVALID_AUDIO_FORMAT, STATUS_SELECT_AUDIO_FIRST,
    STATUS_SELECT_FILE_FIRST, STATUS_UPLOAD_ALREADY_RUNNING, STATUS_UPLOAD_SERVER_UNAVAILABLE,
    STATUS_UPLOAD_SUCCESSFUL, STATUS_UPLOADING, STATUS_UPLOADING_AUDIO, UPLOAD_FAILED_PREFIX,
};
use crate::error::{Error, Result};
use crate::media::{MediaItem, MediaKind, MediaLibrary};
use crate::utils::media_mime_for_path;
use log::{debug, info};
use std::path::PathBuf;

/// Form payload for one upload submission
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    /// The file to upload, the only required field
    pub file: Option<PathBuf>,
    /// Item title
    pub title: String,
    /// Speaker or pastor
    pub attribution: String,
    /// Recording date
    pub date: String,
    /// Category (sermon, teaching, testimony, ...)
    pub category: String,
    /// Free-text description
    pub description: String,
}

impl UploadForm {
    /// Clears every field, the side effect of a successful submission
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the non-empty metadata fields as multipart text parts
    pub fn metadata_fields(&self, kind: MediaKind) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if !self.title.is_empty() {
            fields.push(("title", self.title.clone()));
        }
        if let Some(name) = kind.attribution_field() {
            if !self.attribution.is_empty() {
                fields.push((name, self.attribution.clone()));
            }
        }
        if !self.date.is_empty() {
            fields.push(("date", self.date.clone()));
        }
        if !self.category.is_empty() {
            fields.push(("category", self.category.clone()));
        }
        if !self.description.is_empty() {
            fields.push(("description", self.description.clone()));
        }
        fields
    }
}

/// Phase of the upload workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    /// No submission has been attempted yet
    Idle,
    /// A submission is on the wire
    InFlight,
    /// The last submission reached a terminal status
    Done,
}

/// A validated submission, ready to be posted
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Path of the file to post
    pub path: PathBuf,
    /// MIME type detected for the file
    pub mime: &'static str,
}

/// The upload workflow owned by one media page
#[derive(Debug, Clone)]
pub struct UploadWorkflow {
    kind: MediaKind,
    phase: UploadPhase,
    status: String,
}

impl UploadWorkflow {
    /// Creates an idle workflow for the given media kind
    pub fn new(kind: MediaKind) -> Self {
        Self {
            kind,
            phase: UploadPhase::Idle,
            status: String::new(),
        }
    }

    /// Returns the media kind this workflow uploads
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Returns the current user-visible status
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the current phase
    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    /// Validates the form and moves the workflow in flight
    ///
    /// Validation failures settle the workflow immediately with the
    /// matching status and no network traffic. A submission while one
    /// is already in flight is rejected without touching the status of
    /// the running upload.
    pub fn begin(&mut self, form: &UploadForm) -> Result<UploadRequest> {
        if self.phase == UploadPhase::InFlight {
            return Err(Error::UploadInFlight);
        }

        let request = match self.validate(form) {
            Ok(request) => request,
            Err(err) => {
                self.status = self.failure_status(&err);
                self.phase = UploadPhase::Done;
                return Err(err);
            }
        };

        self.status = match self.kind {
            MediaKind::Audio => STATUS_UPLOADING_AUDIO.to_string(),
            _ => STATUS_UPLOADING.to_string(),
        };
        self.phase = UploadPhase::InFlight;
        debug!(
            "Upload of '{}' started ({})",
            request.path.display(),
            request.mime
        );
        Ok(request)
    }

    /// Settles the workflow with the outcome of the posted submission
    ///
    /// On success exactly one item is appended to the library and the
    /// form is cleared; on failure the library and form are untouched.
    pub fn finish(
        &mut self,
        outcome: Result<UploadResponse>,
        base_url: &str,
        form: &mut UploadForm,
        library: &mut MediaLibrary,
    ) -> Result<()> {
        self.phase = UploadPhase::Done;
        match outcome {
            Ok(response) => {
                let item = MediaItem::from_upload(
                    self.kind,
                    base_url,
                    &response.file.path,
                    &form.title,
                    &form.attribution,
                    &form.date,
                );
                info!("Upload succeeded, adding '{}' to the page", item.title);
                library.append(item);
                form.clear();
                self.status = STATUS_UPLOAD_SUCCESSFUL.to_string();
                Ok(())
            }
            Err(err) => {
                self.status = self.failure_status(&err);
                Err(err)
            }
        }
    }

    /// Runs the full submit-validate-post-update cycle
    pub async fn submit(
        &mut self,
        client: &BackendClient,
        form: &mut UploadForm,
        library: &mut MediaLibrary,
    ) -> Result<()> {
        let request = self.begin(form)?;
        let outcome = client.upload(self.kind, &request, form).await;
        self.finish(outcome, &client.config().base_url(), form, library)
    }

    fn validate(&self, form: &UploadForm) -> Result<UploadRequest> {
        let path = form.file.clone().ok_or_else(|| Error::MediaFileNotFound {
            path: String::new(),
            context: "No file selected".to_string(),
        })?;

        let metadata = std::fs::metadata(&path).map_err(|err| Error::MediaFileNotFound {
            path: path.display().to_string(),
            context: format!("Failed to read file: {err}"),
        })?;
        if metadata.len() == 0 {
            return Err(Error::MediaFileNotFound {
                path: path.display().to_string(),
                context: "File is empty".to_string(),
            });
        }

        let mime = media_mime_for_path(&path);
        if self.kind == MediaKind::Audio && !AUDIO_ALLOWED_MIME_TYPES.contains(&mime) {
            return Err(Error::UnsupportedAudioFormat {
                mime: mime.to_string(),
            });
        }

        Ok(UploadRequest { path, mime })
    }

    fn failure_status(&self, err: &Error) -> String {
        match err {
            Error::MediaFileNotFound { .. } => match self.kind {
                MediaKind::Audio => STATUS_SELECT_AUDIO_FIRST.to_string(),
                _ => STATUS_SELECT_FILE_FIRST.to_string(),
            },
            Error::UnsupportedAudioFormat { .. } => STATUS_INVALID_AUDIO_FORMAT.to_string(),
            Error::UploadInFlight => STATUS_UPLOAD_ALREADY_RUNNING.to_string(),
            Error::BackendRejected { message, .. } => {
                format!("{UPLOAD_FAILED_PREFIX}{message}")
            }
            Error::BackendUnreachable { .. } => STATUS_UPLOAD_SERVER_UNAVAILABLE.to_string(),
            other => format!("{UPLOAD_FAILED_PREFIX}{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::UploadedFile;
    use std::fs;

    fn temp_media_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pulpit-upload-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    fn response(path: &str) -> UploadResponse {
        UploadResponse {
            file: UploadedFile {
                path: path.to_string(),
            },
        }
    }

    #[test]
    fn test_begin_without_file() {
        let mut workflow = UploadWorkflow::new(MediaKind::Video);
        let form = UploadForm::default();
        assert!(workflow.begin(&form).is_err());
        assert_eq!(workflow.status(), STATUS_SELECT_FILE_FIRST);
        assert_eq!(workflow.phase(), UploadPhase::Done);
    }

    #[test]
    fn test_begin_without_audio_file() {
        let mut workflow = UploadWorkflow::new(MediaKind::Audio);
        let form = UploadForm::default();
        assert!(workflow.begin(&form).is_err());
        assert_eq!(workflow.status(), STATUS_SELECT_AUDIO_FIRST);
    }

    #[test]
    fn test_begin_with_empty_file() {
        let path = temp_media_file("empty.mp4", b"");
        let mut workflow = UploadWorkflow::new(MediaKind::Video);
        let form = UploadForm {
            file: Some(path.clone()),
            ..Default::default()
        };
        assert!(workflow.begin(&form).is_err());
        assert_eq!(workflow.status(), STATUS_SELECT_FILE_FIRST);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_begin_rejects_non_audio_mime() {
        let path = temp_media_file("notes.txt", b"in the beginning");
        let mut workflow = UploadWorkflow::new(MediaKind::Audio);
        let form = UploadForm {
            file: Some(path.clone()),
            title: "Prayer and Fasting".to_string(),
            attribution: "Prophet David Wilson".to_string(),
            date: "December 1, 2024".to_string(),
            ..Default::default()
        };
        match workflow.begin(&form) {
            Err(Error::UnsupportedAudioFormat { mime }) => assert_eq!(mime, "text/plain"),
            other => panic!("Expected format rejection, got {other:?}"),
        }
        assert_eq!(workflow.status(), STATUS_INVALID_AUDIO_FORMAT);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_begin_moves_in_flight() {
        let path = temp_media_file("message.mp3", b"audio bytes");
        let mut workflow = UploadWorkflow::new(MediaKind::Audio);
        let form = UploadForm {
            file: Some(path.clone()),
            ..Default::default()
        };
        let request = workflow.begin(&form).unwrap();
        assert_eq!(request.mime, "audio/mpeg");
        assert_eq!(workflow.phase(), UploadPhase::InFlight);
        assert_eq!(workflow.status(), STATUS_UPLOADING_AUDIO);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_begin_rejects_concurrent_submission() {
        let path = temp_media_file("sermon.mp4", b"video bytes");
        let mut workflow = UploadWorkflow::new(MediaKind::Video);
        let form = UploadForm {
            file: Some(path.clone()),
            ..Default::default()
        };
        workflow.begin(&form).unwrap();
        match workflow.begin(&form) {
            Err(Error::UploadInFlight) => {}
            other => panic!("Expected in-flight rejection, got {other:?}"),
        }
        // The running upload's status is untouched
        assert_eq!(workflow.status(), STATUS_UPLOADING);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_finish_success_appends_and_clears() {
        let mut workflow = UploadWorkflow::new(MediaKind::Video);
        let mut library = MediaLibrary::with_sample_items(MediaKind::Video);
        let mut form = UploadForm {
            title: "Revival Night".to_string(),
            attribution: "Pastor Sarah Johnson".to_string(),
            date: "July 4, 2025".to_string(),
            ..Default::default()
        };
        let before = library.len();
        workflow
            .finish(
                Ok(response("/uploads/videos/revival.mp4")),
                "http://localhost:5000",
                &mut form,
                &mut library,
            )
            .unwrap();
        assert_eq!(library.len(), before + 1);
        assert_eq!(workflow.status(), STATUS_UPLOAD_SUCCESSFUL);
        assert!(form.title.is_empty());
        assert!(form.file.is_none());
        let added = library.get(before).unwrap();
        assert_eq!(added.title, "Revival Night");
        assert_eq!(added.url, "http://localhost:5000/uploads/videos/revival.mp4");
    }

    #[test]
    fn test_finish_failure_leaves_library_alone() {
        let mut workflow = UploadWorkflow::new(MediaKind::Video);
        let mut library = MediaLibrary::with_sample_items(MediaKind::Video);
        let mut form = UploadForm {
            title: "Revival Night".to_string(),
            ..Default::default()
        };
        let before = library.len();
        let outcome = Err(Error::BackendRejected {
            operation: "Upload".to_string(),
            status: 500,
            message: "Disk full".to_string(),
        });
        assert!(
            workflow
                .finish(outcome, "http://localhost:5000", &mut form, &mut library)
                .is_err()
        );
        assert_eq!(library.len(), before);
        assert_eq!(workflow.status(), "Upload failed: Disk full");
        assert_eq!(form.title, "Revival Night");
    }

    #[test]
    fn test_metadata_fields_skip_empty() {
        let form = UploadForm {
            title: "The Foundation of Faith".to_string(),
            attribution: "Pastor Michael Brown".to_string(),
            ..Default::default()
        };
        let fields = form.metadata_fields(MediaKind::Audio);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, "title");
        assert_eq!(fields[1].0, "speaker");

        // Images have no attribution field to post
        let fields = form.metadata_fields(MediaKind::Image);
        assert_eq!(fields.len(), 1);
    }
}
