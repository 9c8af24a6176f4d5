//! Layout utilities for the TUI interface
//!
//! This module provides layout creation functions for organizing
//! the TUI interface components.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Creates the main application layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Navigation tabs
            Constraint::Min(0),    // Page body
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

/// Creates the media page layout (item list and side panel)
pub fn create_media_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Item list
            Constraint::Percentage(45), // Player and upload panel
        ])
        .split(area)
        .to_vec()
}

/// Creates the media side panel layout
pub fn create_media_side_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Now playing
            Constraint::Length(3), // Progress bar
            Constraint::Min(6),    // Upload form
            Constraint::Length(4), // Status messages
        ])
        .split(area)
        .to_vec()
}

/// Creates the verse page layout
pub fn create_verse_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Search controls
            Constraint::Min(0),    // Result
        ])
        .split(area)
        .to_vec()
}

/// Creates the contact page layout (form and contact info)
pub fn create_contact_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Message form
            Constraint::Percentage(45), // Contact info
        ])
        .split(area)
        .to_vec()
}

/// Helper function to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
