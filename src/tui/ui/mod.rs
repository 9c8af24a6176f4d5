//! UI rendering components for the TUI interface
//!
//! This module contains all the UI rendering functions and components
//! for the TUI application.

mod components;
mod dialogs;
mod layout;

pub use components::*;
pub use dialogs::*;
pub use layout::*;

use super::app::AppState;
use crate::content::Page;
use ratatui::Frame;

/// Draws the main UI
pub fn draw_ui(f: &mut Frame, state: &AppState) {
    // Create main layout
    let chunks = create_main_layout(f.area());

    // Draw header and navigation
    draw_header(f, chunks[0], state);
    draw_nav_tabs(f, chunks[1], state);

    // Draw the page body
    match state.page() {
        Page::Gallery | Page::Sermons | Page::Audio => draw_media_page(f, chunks[2], state),
        Page::Bible => draw_verse_page(f, chunks[2], state),
        Page::Contact => draw_contact_page(f, chunks[2], state),
        _ => draw_content_page(f, chunks[2], state),
    }

    // Draw footer
    draw_footer(f, chunks[3], state);

    // Draw overlays
    if state.show_help {
        draw_help_dialog(f);
    }
}
