//! Backend REST client for pulpit
//!
//! This module wraps the media backend's REST surface: media listings,
//! multipart uploads, and the contact endpoint. The backend address is
//! the one resolved by the connectivity probe, passed in explicitly.

use crate::config::{API_CONTACT_PATH, BackendConfig, USER_AGENT};
use crate::error::{Error, Result};
use crate::media::{MediaKind, UploadForm, UploadRequest};
use crate::utils::sanitize_filename_for_upload;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// One file record in a backend media listing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMediaFile {
    /// Server-relative path of the stored file
    pub path: String,
    /// Original filename at upload time
    #[serde(default)]
    pub original_name: Option<String>,
    /// Upload timestamp
    #[serde(default)]
    pub upload_date: Option<String>,
}

/// Body of a successful upload response
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// The stored file
    pub file: UploadedFile,
}

/// The stored-file portion of an upload response
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    /// Server-relative path of the stored file
    pub path: String,
}

/// A contact-form message
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message subject
    pub subject: String,
    /// Message body
    pub message: String,
}

/// HTTP client for the media backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Creates a client for the given backend address
    pub fn new(config: BackendConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| Error::HttpClientBuildFailed { source: err })?;

        Ok(Self { http, config })
    }

    /// Returns the backend address this client talks to
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Fetches the backend listing for a media kind
    pub async fn list_media(&self, kind: MediaKind) -> Result<Vec<RemoteMediaFile>> {
        let url = self.config.endpoint(kind.listing_path());
        debug!("Fetching {kind} listing from {url}");

        let operation = format!("{kind} listing");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| Error::BackendUnreachable {
                operation: operation.clone(),
                source: err,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::BackendRejected {
                operation,
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Vec<RemoteMediaFile>>()
            .await
            .map_err(|err| Error::BackendResponseInvalid {
                operation,
                source: err,
            })
    }

    /// Posts a validated upload as a multipart submission
    pub async fn upload(
        &self,
        kind: MediaKind,
        request: &UploadRequest,
        form: &UploadForm,
    ) -> Result<UploadResponse> {
        let url = self.config.endpoint(kind.upload_path());
        info!("Uploading '{}' to {url}", request.path.display());

        let operation = format!("{kind} upload");
        let bytes =
            tokio::fs::read(&request.path)
                .await
                .map_err(|err| Error::MediaFileNotFound {
                    path: request.path.display().to_string(),
                    context: format!("Failed to read file: {err}"),
                })?;

        let file_name = request
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .map(sanitize_filename_for_upload)
            .unwrap_or_else(|| "upload".to_string());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(request.mime)
            .map_err(|err| Error::UploadPayloadInvalid {
                path: request.path.display().to_string(),
                source: err,
            })?;

        let mut multipart = reqwest::multipart::Form::new().part(kind.form_field(), part);
        for (name, value) in form.metadata_fields(kind) {
            multipart = multipart.text(name, value);
        }

        let response = self
            .http
            .post(&url)
            .multipart(multipart)
            .send()
            .await
            .map_err(|err| Error::BackendUnreachable {
                operation: operation.clone(),
                source: err,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::BackendRejected {
                operation,
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<UploadResponse>()
            .await
            .map_err(|err| Error::BackendResponseInvalid {
                operation,
                source: err,
            })
    }

    /// Sends a contact-form message to the backend
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<()> {
        let url = self.config.endpoint(API_CONTACT_PATH);
        info!("Sending contact message from '{}'", message.name);

        let operation = "Contact message".to_string();
        let response = self
            .http
            .post(&url)
            .json(message)
            .send()
            .await
            .map_err(|err| Error::BackendUnreachable {
                operation: operation.clone(),
                source: err,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::BackendRejected {
                operation,
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_media_file_decoding() {
        let file: RemoteMediaFile = serde_json::from_str(
            r#"{"path": "/uploads/videos/v.mp4", "originalName": "easter.mp4", "uploadDate": "2024-12-15T09:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(file.path, "/uploads/videos/v.mp4");
        assert_eq!(file.original_name.as_deref(), Some("easter.mp4"));
    }

    #[test]
    fn test_remote_media_file_partial_record() {
        let file: RemoteMediaFile = serde_json::from_str(r#"{"path": "/uploads/a.mp3"}"#).unwrap();
        assert!(file.original_name.is_none());
        assert!(file.upload_date.is_none());
    }

    #[test]
    fn test_upload_response_decoding() {
        let response: UploadResponse = serde_json::from_str(
            r#"{"file": {"path": "/uploads/audios/a.mp3", "size": 1024}}"#,
        )
        .unwrap();
        assert_eq!(response.file.path, "/uploads/audios/a.mp3");
    }

    #[test]
    fn test_contact_message_encoding() {
        let message = ContactMessage {
            name: "Grace".to_string(),
            email: "grace@example.org".to_string(),
            subject: "Prayer request".to_string(),
            message: "Please pray for us".to_string(),
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"name\":\"Grace\""));
        assert!(json.contains("\"subject\":\"Prayer request\""));
    }
}
