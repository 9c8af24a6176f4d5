//! Integration tests for the upload workflow against a mock backend.

use pulpit::config::{
    STATUS_INVALID_AUDIO_FORMAT, STATUS_SELECT_FILE_FIRST, STATUS_UPLOAD_SERVER_UNAVAILABLE,
    STATUS_UPLOAD_SUCCESSFUL, BackendConfig,
};
use pulpit::{BackendClient, MediaKind, MediaLibrary, UploadForm, UploadWorkflow};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Spawns a mock backend that answers every request with the given
/// status and body, counting the requests it saw.
fn spawn_backend(status: u16, body: &'static str) -> (u16, Arc<AtomicUsize>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let requests = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&requests);
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            counter.fetch_add(1, Ordering::SeqCst);
            let response =
                tiny_http::Response::from_string(body).with_status_code(tiny_http::StatusCode(status));
            let _ = request.respond(response);
        }
    });

    (port, requests)
}

/// Returns a port nothing is listening on.
fn dead_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn temp_media_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pulpit-it-{}-{name}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn client_for(port: u16) -> BackendClient {
    BackendClient::new(BackendConfig::new("127.0.0.1", port)).unwrap()
}

#[tokio::test]
async fn upload_success_appends_one_item_and_clears_form() {
    let (port, requests) = spawn_backend(200, r#"{"file": {"path": "/uploads/videos/revival.mp4"}}"#);
    let client = client_for(port);
    let file = temp_media_file("revival.mp4", b"video bytes");

    let mut library = MediaLibrary::with_sample_items(MediaKind::Video);
    let mut workflow = UploadWorkflow::new(MediaKind::Video);
    let mut form = UploadForm {
        file: Some(file.clone()),
        title: "Revival Night".to_string(),
        attribution: "Pastor Sarah Johnson".to_string(),
        date: "July 4, 2025".to_string(),
        ..Default::default()
    };

    let before = library.len();
    workflow
        .submit(&client, &mut form, &mut library)
        .await
        .unwrap();

    assert_eq!(workflow.status(), STATUS_UPLOAD_SUCCESSFUL);
    assert_eq!(library.len(), before + 1);
    assert_eq!(requests.load(Ordering::SeqCst), 1);

    let added = library.get(before).unwrap();
    assert_eq!(added.title, "Revival Night");
    assert_eq!(
        added.url,
        format!("http://127.0.0.1:{port}/uploads/videos/revival.mp4")
    );

    // The form was cleared as a side effect of the success
    assert!(form.file.is_none());
    assert!(form.title.is_empty());

    fs::remove_file(file).ok();
}

#[tokio::test]
async fn upload_rejection_preserves_library_and_form() {
    let (port, requests) = spawn_backend(500, "Disk full");
    let client = client_for(port);
    let file = temp_media_file("teaching.mp4", b"video bytes");

    let mut library = MediaLibrary::with_sample_items(MediaKind::Video);
    let mut workflow = UploadWorkflow::new(MediaKind::Video);
    let mut form = UploadForm {
        file: Some(file.clone()),
        title: "Sunday Teaching".to_string(),
        ..Default::default()
    };

    let before = library.len();
    assert!(workflow.submit(&client, &mut form, &mut library).await.is_err());

    assert_eq!(workflow.status(), "Upload failed: Disk full");
    assert_eq!(library.len(), before);
    assert_eq!(requests.load(Ordering::SeqCst), 1);
    assert_eq!(form.title, "Sunday Teaching");

    fs::remove_file(file).ok();
}

#[tokio::test]
async fn upload_without_file_issues_no_network_request() {
    let (port, requests) = spawn_backend(200, r#"{"file": {"path": "/x"}}"#);
    let client = client_for(port);

    let mut library = MediaLibrary::with_sample_items(MediaKind::Image);
    let mut workflow = UploadWorkflow::new(MediaKind::Image);
    let mut form = UploadForm::default();

    assert!(workflow.submit(&client, &mut form, &mut library).await.is_err());

    assert_eq!(workflow.status(), STATUS_SELECT_FILE_FIRST);
    assert_eq!(library.len(), 3);
    assert_eq!(requests.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn audio_upload_with_text_file_is_rejected_client_side() {
    let (port, requests) = spawn_backend(200, r#"{"file": {"path": "/x"}}"#);
    let client = client_for(port);
    let file = temp_media_file("sermon-notes.txt", b"in the beginning");

    let mut library = MediaLibrary::with_sample_items(MediaKind::Audio);
    let mut workflow = UploadWorkflow::new(MediaKind::Audio);
    let mut form = UploadForm {
        file: Some(file.clone()),
        title: "The Foundation of Faith".to_string(),
        attribution: "Pastor Michael Brown".to_string(),
        date: "December 15, 2024".to_string(),
        category: "Sermon".to_string(),
        description: "Opening message of the series".to_string(),
    };

    assert!(workflow.submit(&client, &mut form, &mut library).await.is_err());

    assert_eq!(workflow.status(), STATUS_INVALID_AUDIO_FORMAT);
    assert_eq!(library.len(), 3);
    assert_eq!(requests.load(Ordering::SeqCst), 0);

    fs::remove_file(file).ok();
}

#[tokio::test]
async fn upload_to_unreachable_backend_reports_fixed_message() {
    let client = client_for(dead_port());
    let file = temp_media_file("offline.mp3", b"audio bytes");

    let mut library = MediaLibrary::new(MediaKind::Audio);
    let mut workflow = UploadWorkflow::new(MediaKind::Audio);
    let mut form = UploadForm {
        file: Some(file.clone()),
        ..Default::default()
    };

    assert!(workflow.submit(&client, &mut form, &mut library).await.is_err());

    assert_eq!(workflow.status(), STATUS_UPLOAD_SERVER_UNAVAILABLE);
    assert!(library.is_empty());

    fs::remove_file(file).ok();
}
