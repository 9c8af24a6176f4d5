//! Event handling for the TUI interface
//!
//! This module handles keyboard input for the TUI application. Network
//! operations release the state lock while the request is on the wire
//! and re-acquire it to apply the outcome.

use super::app::{AppState, InputMode};
use crate::{
    backend::ConnectivityState,
    config::{STATUS_MESSAGE_SENT, STATUS_SENDING},
    content::Page,
    error::Result,
    media::MediaKind,
    utils::contact_failure_status,
};
use crossterm::event::{Event, KeyCode, KeyEvent};
use log::info;
use std::sync::Arc;
use tokio::sync::Mutex;
use tui_input::backend::crossterm::EventHandler;

/// Handles keyboard input events
pub async fn handle_key_event(state_arc: Arc<Mutex<AppState>>, key_event: KeyEvent) -> Result<()> {
    {
        let state = state_arc.lock().await;
        if state.mode == InputMode::Editing {
            drop(state);
            return handle_editing_key(state_arc, key_event).await;
        }
    }

    let mut state = state_arc.lock().await;

    // Handle global keys first
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.quit();
            return Ok(());
        }
        KeyCode::Char('h') | KeyCode::F(1) => {
            state.toggle_help();
            return Ok(());
        }
        _ => {}
    }

    // If the help dialog is shown, any key closes it
    if state.show_help {
        state.show_help = false;
        return Ok(());
    }

    // Handle main interface keys
    match key_event.code {
        KeyCode::Tab | KeyCode::Right => {
            state.next_page();
            let page = state.page();
            drop(state);
            sync_media_page(state_arc, page).await;
        }
        KeyCode::BackTab | KeyCode::Left => {
            state.previous_page();
            let page = state.page();
            drop(state);
            sync_media_page(state_arc, page).await;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous_item();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.next_item();
        }
        KeyCode::Enter => {
            state.load_selected();
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            if state.player.toggle_play() {
                state.set_status_message("Playing".to_string());
            } else if state.player.item().is_some() {
                state.set_status_message("Paused".to_string());
            }
        }
        KeyCode::Char('[') => {
            let fraction = state.player.state().progress_percent / 100.0 - 0.05;
            state.player.seek(fraction);
        }
        KeyCode::Char(']') => {
            let fraction = state.player.state().progress_percent / 100.0 + 0.05;
            state.player.seek(fraction);
        }
        KeyCode::Char('-') => {
            let volume = state.player.state().volume - 0.1;
            state.player.set_volume(volume);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let volume = state.player.state().volume + 0.1;
            state.player.set_volume(volume);
        }
        KeyCode::Char('m') => {
            state.player.toggle_mute();
        }
        KeyCode::Char('e') => {
            state.start_editing();
        }
        KeyCode::Char('u') => {
            if let Some(kind) = state.page().media_kind() {
                drop(state);
                submit_upload(state_arc, kind).await;
            }
        }
        KeyCode::Char('r') => {
            if let Some(kind) = state.page().media_kind() {
                drop(state);
                refresh_listing(state_arc, kind, true).await;
            }
        }
        KeyCode::Char('s') => match state.page() {
            Page::Bible => {
                drop(state);
                search_verse(state_arc).await;
            }
            Page::Contact => {
                drop(state);
                send_contact(state_arc).await;
            }
            _ => {}
        },
        _ => {}
    }

    Ok(())
}

/// Handles a key while a form field is being edited
async fn handle_editing_key(state_arc: Arc<Mutex<AppState>>, key_event: KeyEvent) -> Result<()> {
    let mut state = state_arc.lock().await;
    match key_event.code {
        KeyCode::Esc => {
            state.cancel_editing();
        }
        KeyCode::Enter => {
            state.commit_input();
            state.cancel_editing();
        }
        KeyCode::Tab | KeyCode::Down => {
            state.commit_input();
            state.next_field();
        }
        _ => {
            state.input.handle_event(&Event::Key(key_event));
        }
    }
    Ok(())
}

/// Fetches the backend listing the first time a media page is visited
pub async fn sync_media_page(state_arc: Arc<Mutex<AppState>>, page: Page) {
    if let Some(kind) = page.media_kind() {
        refresh_listing(state_arc, kind, false).await;
    }
}

/// Merges the backend listing of a media kind into its library
async fn refresh_listing(state_arc: Arc<Mutex<AppState>>, kind: MediaKind, force: bool) {
    let client = {
        let mut state = state_arc.lock().await;
        if !force && state.library(kind).is_synced() {
            return;
        }
        if state.connectivity != ConnectivityState::Connected {
            state.set_status_message(format!("Server not available, using sample {kind} items"));
            return;
        }
        state.set_status_message(format!("Loading {kind} listing..."));
        state.client.clone()
    };

    let result = client.list_media(kind).await;

    let mut state = state_arc.lock().await;
    match result {
        Ok(files) => {
            let count = files.len();
            let base_url = client.config().base_url();
            let (_, library) = state.media_page_mut(kind);
            library.merge_listing(&base_url, &files);
            state.set_status_message(format!("Loaded {count} uploaded {kind} files"));
            state.set_error_message(None);
        }
        Err(err) => {
            state.set_error_message(Some(format!("Failed to load {kind} listing: {err}")));
        }
    }
}

/// Runs the upload workflow for the current media page
async fn submit_upload(state_arc: Arc<Mutex<AppState>>, kind: MediaKind) {
    let (client, request, form_snapshot) = {
        let mut state = state_arc.lock().await;
        let client = state.client.clone();
        let (panel, _) = state.media_page_mut(kind);
        let form_snapshot = panel.form.clone();
        match panel.workflow.begin(&form_snapshot) {
            Ok(request) => (client, request, form_snapshot),
            // The status already reflects the rejection
            Err(_) => return,
        }
    };

    info!("Submitting {kind} upload");
    let outcome = client.upload(kind, &request, &form_snapshot).await;

    let mut state = state_arc.lock().await;
    let base_url = state.client.config().base_url();
    let (panel, library) = state.media_page_mut(kind);
    let mut form = std::mem::take(&mut panel.form);
    let result = panel.workflow.finish(outcome, &base_url, &mut form, library);
    panel.form = form;
    if result.is_ok() {
        state.set_status_message("Upload complete".to_string());
    }
}

/// Runs one verse lookup for the query on the Bible page
async fn search_verse(state_arc: Arc<Mutex<AppState>>) {
    let (client, query) = {
        let mut state = state_arc.lock().await;
        let Some(client) = state.verse_client.clone() else {
            state.verse_error = Some("Verse lookup is unavailable".to_string());
            return;
        };
        state.verse_loading = true;
        state.verse_error = None;
        (client, state.verse_query.clone())
    };

    let result = client.lookup(&query).await;

    let mut state = state_arc.lock().await;
    state.verse_loading = false;
    match result {
        Ok(verse) => {
            state.verse_result = Some(verse);
        }
        Err(err) => {
            state.verse_error = Some(err.to_string());
        }
    }
}

/// Sends the contact form to the backend
async fn send_contact(state_arc: Arc<Mutex<AppState>>) {
    let (client, message) = {
        let mut state = state_arc.lock().await;
        state.contact_status = STATUS_SENDING.to_string();
        (state.client.clone(), state.contact_form.clone())
    };

    let result = client.send_contact(&message).await;

    let mut state = state_arc.lock().await;
    match result {
        Ok(()) => {
            state.contact_status = STATUS_MESSAGE_SENT.to_string();
            state.contact_form = Default::default();
        }
        Err(err) => {
            state.contact_status = contact_failure_status(&err);
        }
    }
}
