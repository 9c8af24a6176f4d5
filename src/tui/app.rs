//! TUI application state management for pulpit
//!
//! This module contains the application state structure and related
//! functionality for the TUI interface: the current page, the per-page
//! media libraries and upload panels, the playback widget, and the
//! verse and contact form state.

use crate::{
    backend::{BackendClient, ConnectivityState, ContactMessage},
    content::Page,
    media::{MediaKind, MediaLibrary, MediaPlayer, UploadForm, UploadWorkflow},
    verse::{Verse, VerseClient, VerseQuery},
};
use log::debug;
use std::{path::PathBuf, time::Instant};
use tui_input::Input;

/// The upload workflow and its form, owned by one media page
#[derive(Debug, Clone)]
pub struct UploadPanel {
    /// The page's upload workflow
    pub workflow: UploadWorkflow,
    /// The page's form state
    pub form: UploadForm,
}

impl UploadPanel {
    fn new(kind: MediaKind) -> Self {
        Self {
            workflow: UploadWorkflow::new(kind),
            form: UploadForm::default(),
        }
    }
}

/// Whether keystrokes navigate or feed the active form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate pages, lists, and transport controls
    Normal,
    /// Keys edit the active form field
    Editing,
}

/// Application state for the TUI
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pages in navigation order
    pub pages: Vec<Page>,
    /// Index of the current page
    pub page_index: usize,
    /// Connectivity indicator settled by the startup probe
    pub connectivity: ConnectivityState,
    /// Client bound to the probed backend address
    pub client: BackendClient,
    /// Client for the verse lookup API
    pub verse_client: Option<VerseClient>,
    /// Photo gallery library
    pub gallery: MediaLibrary,
    /// Video sermon library
    pub sermons: MediaLibrary,
    /// Audio sermon library
    pub audios: MediaLibrary,
    /// Gallery upload panel
    pub gallery_upload: UploadPanel,
    /// Sermon upload panel
    pub sermons_upload: UploadPanel,
    /// Audio upload panel
    pub audios_upload: UploadPanel,
    /// Selected item on the current media page
    pub selected_item: usize,
    /// The playback widget
    pub player: MediaPlayer,
    /// Verse search query
    pub verse_query: VerseQuery,
    /// Last verse result
    pub verse_result: Option<Verse>,
    /// Last verse error
    pub verse_error: Option<String>,
    /// Whether a verse lookup is running
    pub verse_loading: bool,
    /// Contact form state
    pub contact_form: ContactMessage,
    /// Contact submission status
    pub contact_status: String,
    /// Current input mode
    pub mode: InputMode,
    /// Active form field on the current page
    pub field_index: usize,
    /// Buffer for the field being edited
    pub input: Input,
    /// Status message to display
    pub status_message: String,
    /// Error message to display
    pub error_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Whether the help dialog is shown
    pub show_help: bool,
    /// Last playback tick
    pub last_tick: Instant,
}

impl AppState {
    /// Creates a new application state
    pub fn new(client: BackendClient, connectivity: ConnectivityState) -> Self {
        Self {
            pages: Page::all(),
            page_index: 0,
            connectivity,
            client,
            verse_client: VerseClient::new().ok(),
            gallery: MediaLibrary::with_sample_items(MediaKind::Image),
            sermons: MediaLibrary::with_sample_items(MediaKind::Video),
            audios: MediaLibrary::with_sample_items(MediaKind::Audio),
            gallery_upload: UploadPanel::new(MediaKind::Image),
            sermons_upload: UploadPanel::new(MediaKind::Video),
            audios_upload: UploadPanel::new(MediaKind::Audio),
            selected_item: 0,
            player: MediaPlayer::new(),
            verse_query: VerseQuery::default(),
            verse_result: None,
            verse_error: None,
            verse_loading: false,
            contact_form: ContactMessage::default(),
            contact_status: String::new(),
            mode: InputMode::Normal,
            field_index: 0,
            input: Input::default(),
            status_message: "Ready".to_string(),
            error_message: None,
            should_quit: false,
            show_help: false,
            last_tick: Instant::now(),
        }
    }

    /// Returns the current page
    pub fn page(&self) -> Page {
        self.pages[self.page_index]
    }

    /// Moves to the next page
    pub fn next_page(&mut self) {
        self.page_index = (self.page_index + 1) % self.pages.len();
        self.reset_page_cursor();
    }

    /// Moves to the previous page
    pub fn previous_page(&mut self) {
        self.page_index = if self.page_index == 0 {
            self.pages.len() - 1
        } else {
            self.page_index - 1
        };
        self.reset_page_cursor();
    }

    fn reset_page_cursor(&mut self) {
        self.selected_item = 0;
        self.field_index = 0;
        self.mode = InputMode::Normal;
        debug!("Switched to page {:?}", self.page());
    }

    /// Returns the library shown by a media kind
    pub fn library(&self, kind: MediaKind) -> &MediaLibrary {
        match kind {
            MediaKind::Image => &self.gallery,
            MediaKind::Video => &self.sermons,
            MediaKind::Audio => &self.audios,
        }
    }

    /// Returns the upload panel of a media kind
    pub fn upload_panel(&self, kind: MediaKind) -> &UploadPanel {
        match kind {
            MediaKind::Image => &self.gallery_upload,
            MediaKind::Video => &self.sermons_upload,
            MediaKind::Audio => &self.audios_upload,
        }
    }

    /// Returns the upload panel and library of a media kind as disjoint
    /// mutable borrows
    pub fn media_page_mut(&mut self, kind: MediaKind) -> (&mut UploadPanel, &mut MediaLibrary) {
        match kind {
            MediaKind::Image => (&mut self.gallery_upload, &mut self.gallery),
            MediaKind::Video => (&mut self.sermons_upload, &mut self.sermons),
            MediaKind::Audio => (&mut self.audios_upload, &mut self.audios),
        }
    }

    /// Moves to the next item on the current media page
    pub fn next_item(&mut self) {
        if let Some(kind) = self.page().media_kind() {
            let len = self.library(kind).len();
            if len > 0 {
                self.selected_item = (self.selected_item + 1) % len;
            }
        }
    }

    /// Moves to the previous item on the current media page
    pub fn previous_item(&mut self) {
        if let Some(kind) = self.page().media_kind() {
            let len = self.library(kind).len();
            if len > 0 {
                self.selected_item = if self.selected_item == 0 {
                    len - 1
                } else {
                    self.selected_item - 1
                };
            }
        }
    }

    /// Loads the selected item of the current media page into the player
    pub fn load_selected(&mut self) {
        if let Some(kind) = self.page().media_kind() {
            if let Some(item) = self.library(kind).get(self.selected_item).cloned() {
                self.set_status_message(format!("Loaded: {}", item.title));
                self.player.load(item);
            }
        }
    }

    /// Advances playback by the wall-clock time since the last tick
    pub fn tick_playback(&mut self) {
        let elapsed = self.last_tick.elapsed().as_secs_f64();
        self.last_tick = Instant::now();
        self.player.advance(elapsed);
    }

    /// Enters edit mode on the current page's form
    pub fn start_editing(&mut self) {
        if form_fields(self.page()).is_empty() {
            return;
        }
        self.mode = InputMode::Editing;
        self.input = Input::new(self.current_field_value());
    }

    /// Leaves edit mode without committing the buffer
    pub fn cancel_editing(&mut self) {
        self.mode = InputMode::Normal;
        self.input = Input::default();
    }

    /// Commits the edit buffer into the active field
    pub fn commit_input(&mut self) {
        let value = self.input.value().to_string();
        let page = self.page();
        let Some(&field) = form_fields(page).get(self.field_index) else {
            return;
        };

        match page {
            Page::Gallery | Page::Sermons | Page::Audio => {
                let Some(kind) = page.media_kind() else {
                    return;
                };
                let form = &mut self.upload_panel_mut(kind).form;
                match field {
                    "file" => {
                        form.file = if value.is_empty() {
                            None
                        } else {
                            Some(PathBuf::from(value))
                        }
                    }
                    "title" => form.title = value,
                    "pastor" | "speaker" => form.attribution = value,
                    "date" => form.date = value,
                    "category" => form.category = value,
                    "description" => form.description = value,
                    _ => {}
                }
            }
            Page::Contact => match field {
                "name" => self.contact_form.name = value,
                "email" => self.contact_form.email = value,
                "subject" => self.contact_form.subject = value,
                "message" => self.contact_form.message = value,
                _ => {}
            },
            Page::Bible => match field {
                "book" => self.verse_query.book = value,
                "chapter" => {
                    if let Ok(chapter) = value.parse() {
                        self.verse_query.chapter = chapter;
                    }
                }
                "verse" => {
                    if let Ok(verse) = value.parse() {
                        self.verse_query.verse = verse;
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    /// Moves editing to the next field, wrapping at the end
    pub fn next_field(&mut self) {
        let fields = form_fields(self.page());
        if fields.is_empty() {
            return;
        }
        self.field_index = (self.field_index + 1) % fields.len();
        self.input = Input::new(self.current_field_value());
    }

    /// Returns the stored value of the active field
    pub fn current_field_value(&self) -> String {
        self.field_value(self.field_index)
    }

    /// Returns the stored value of a field by index
    pub fn field_value(&self, index: usize) -> String {
        let page = self.page();
        let Some(&field) = form_fields(page).get(index) else {
            return String::new();
        };

        match page {
            Page::Gallery | Page::Sermons | Page::Audio => {
                let Some(kind) = page.media_kind() else {
                    return String::new();
                };
                let form = &self.upload_panel(kind).form;
                match field {
                    "file" => form
                        .file
                        .as_ref()
                        .map(|path| path.display().to_string())
                        .unwrap_or_default(),
                    "title" => form.title.clone(),
                    "pastor" | "speaker" => form.attribution.clone(),
                    "date" => form.date.clone(),
                    "category" => form.category.clone(),
                    "description" => form.description.clone(),
                    _ => String::new(),
                }
            }
            Page::Contact => match field {
                "name" => self.contact_form.name.clone(),
                "email" => self.contact_form.email.clone(),
                "subject" => self.contact_form.subject.clone(),
                "message" => self.contact_form.message.clone(),
                _ => String::new(),
            },
            Page::Bible => match field {
                "book" => self.verse_query.book.clone(),
                "chapter" => self.verse_query.chapter.to_string(),
                "verse" => self.verse_query.verse.to_string(),
                _ => String::new(),
            },
            _ => String::new(),
        }
    }

    fn upload_panel_mut(&mut self, kind: MediaKind) -> &mut UploadPanel {
        match kind {
            MediaKind::Image => &mut self.gallery_upload,
            MediaKind::Video => &mut self.sermons_upload,
            MediaKind::Audio => &mut self.audios_upload,
        }
    }

    /// Sets a status message
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = message;
    }

    /// Sets an error message
    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    /// Toggles the help dialog
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Marks the app for quitting
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Returns the editable field names of a page, in display order
pub fn form_fields(page: Page) -> &'static [&'static str] {
    match page {
        Page::Gallery => &["file", "title", "description"],
        Page::Sermons => &["title", "pastor", "date", "file"],
        Page::Audio => &["title", "speaker", "date", "category", "description", "file"],
        Page::Contact => &["name", "email", "subject", "message"],
        Page::Bible => &["book", "chapter", "verse"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;

    fn test_state() -> AppState {
        let client = BackendClient::new(BackendConfig::default()).unwrap();
        AppState::new(client, ConnectivityState::Disconnected)
    }

    #[test]
    fn test_page_navigation_wraps() {
        let mut state = test_state();
        assert_eq!(state.page(), Page::Home);
        state.previous_page();
        assert_eq!(state.page(), Page::Contact);
        state.next_page();
        assert_eq!(state.page(), Page::Home);
    }

    #[test]
    fn test_item_navigation_wraps() {
        let mut state = test_state();
        while state.page() != Page::Audio {
            state.next_page();
        }
        assert_eq!(state.selected_item, 0);
        state.previous_item();
        assert_eq!(state.selected_item, 2);
        state.next_item();
        assert_eq!(state.selected_item, 0);
    }

    #[test]
    fn test_load_selected_binds_player() {
        let mut state = test_state();
        while state.page() != Page::Audio {
            state.next_page();
        }
        state.load_selected();
        let item = state.player.item().unwrap();
        assert_eq!(item.title, "The Foundation of Faith");
        assert_eq!(state.player.state().duration_seconds, 2730.0);
    }

    #[test]
    fn test_commit_input_into_upload_form() {
        let mut state = test_state();
        while state.page() != Page::Sermons {
            state.next_page();
        }
        state.start_editing();
        state.input = Input::new("Revival Night".to_string());
        state.commit_input();
        assert_eq!(state.sermons_upload.form.title, "Revival Night");

        state.next_field();
        state.input = Input::new("Pastor Sarah Johnson".to_string());
        state.commit_input();
        assert_eq!(state.sermons_upload.form.attribution, "Pastor Sarah Johnson");
    }

    #[test]
    fn test_commit_input_into_verse_query() {
        let mut state = test_state();
        while state.page() != Page::Bible {
            state.next_page();
        }
        state.start_editing();
        state.input = Input::new("Psalms".to_string());
        state.commit_input();
        state.next_field();
        state.input = Input::new("23".to_string());
        state.commit_input();
        assert_eq!(state.verse_query.book, "Psalms");
        assert_eq!(state.verse_query.chapter, 23);
    }

    #[test]
    fn test_invalid_chapter_keeps_previous_value() {
        let mut state = test_state();
        while state.page() != Page::Bible {
            state.next_page();
        }
        state.field_index = 1;
        state.input = Input::new("not a number".to_string());
        state.commit_input();
        assert_eq!(state.verse_query.chapter, 3);
    }

    #[test]
    fn test_form_fields_inventory() {
        assert!(form_fields(Page::Home).is_empty());
        assert_eq!(form_fields(Page::Audio).len(), 6);
        assert_eq!(form_fields(Page::Contact).len(), 4);
    }

    #[test]
    fn test_page_switch_resets_edit_state() {
        let mut state = test_state();
        while state.page() != Page::Contact {
            state.next_page();
        }
        state.start_editing();
        assert_eq!(state.mode, InputMode::Editing);
        state.next_page();
        assert_eq!(state.mode, InputMode::Normal);
        assert_eq!(state.field_index, 0);
    }
}
