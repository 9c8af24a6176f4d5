//! UI components for the TUI interface
//!
//! This module contains the individual UI components: header, navigation
//! tabs, media list, playback panel, upload and contact forms, the verse
//! search, and the footer.

use super::layout::{
    create_contact_layout, create_media_layout, create_media_side_layout, create_verse_layout,
};
use crate::backend::ConnectivityState;
use crate::config::{MINISTRY_NAME, MINISTRY_TAGLINE};
use crate::content::{
    CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, Page, SERVICE_TIMES, page_sections,
};
use crate::tui::app::{AppState, InputMode, form_fields};
use crate::utils::{StatusTone, status_tone};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

/// Draws the header with the ministry identity and the connectivity
/// indicator
pub fn draw_header(f: &mut Frame, area: Rect, state: &AppState) {
    let indicator_color = match state.connectivity {
        ConnectivityState::Checking => Color::Yellow,
        ConnectivityState::Connected => Color::Green,
        ConnectivityState::Disconnected => Color::Red,
    };

    let lines = vec![
        Line::from(Span::styled(
            MINISTRY_NAME,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(MINISTRY_TAGLINE, Style::default().fg(Color::Gray)),
            Span::raw("   "),
            Span::styled(
                format!(
                    "Server: {} ({})",
                    state.connectivity,
                    state.client.config()
                ),
                Style::default().fg(indicator_color),
            ),
        ]),
    ];

    let header = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(header, area);
}

/// Draws the page navigation tabs
pub fn draw_nav_tabs(f: &mut Frame, area: Rect, state: &AppState) {
    let labels: Vec<Line> = state
        .pages
        .iter()
        .map(|page| Line::from(page.nav_label()))
        .collect();

    let tabs = Tabs::new(labels)
        .block(Block::default().borders(Borders::ALL))
        .select(state.page_index)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

/// Draws a static content page
pub fn draw_content_page(f: &mut Frame, area: Rect, state: &AppState) {
    let page = state.page();
    let mut lines = Vec::new();

    for section in page_sections(page) {
        if let Some(heading) = section.heading {
            lines.push(Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        for paragraph in section.paragraphs {
            lines.push(Line::from(*paragraph));
        }
        for bullet in section.bullets {
            lines.push(Line::from(format!("  - {bullet}")));
        }
        lines.push(Line::from(""));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(page.title()))
        .wrap(Wrap { trim: true });

    f.render_widget(content, area);
}

/// Draws a media page: the item list plus the playback and upload panel
pub fn draw_media_page(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = create_media_layout(area);
    draw_media_list(f, chunks[0], state);

    let side = create_media_side_layout(chunks[1]);
    draw_now_playing(f, side[0], state);
    draw_progress_bar(f, side[1], state);
    draw_upload_form(f, side[2], state);
    draw_status_messages(f, side[3], state);
}

/// Draws the media item list of the current page
pub fn draw_media_list(f: &mut Frame, area: Rect, state: &AppState) {
    let page = state.page();
    let Some(kind) = page.media_kind() else {
        return;
    };
    let library = state.library(kind);
    let loaded_url = state.player.item().map(|item| item.url.clone());

    let items: Vec<ListItem> = library
        .items()
        .iter()
        .map(|item| {
            let is_loaded = loaded_url.as_deref() == Some(item.url.as_str());
            let prefix = if is_loaded { "♪ " } else { "  " };
            let style = if is_loaded {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let label = if item.attribution.is_empty() {
                format!("{prefix}{}", item.title)
            } else {
                format!("{prefix}{} - {} | {}", item.title, item.attribution, item.date)
            };
            ListItem::new(label).style(style)
        })
        .collect();

    let mut list_state = ListState::default();
    if !library.is_empty() {
        list_state.select(Some(state.selected_item.min(library.len() - 1)));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "{} ({}/{})",
            page.title(),
            state.selected_item + 1,
            library.len()
        )))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");

    f.render_stateful_widget(list, area, &mut list_state);
}

/// Draws the loaded item and its transport state
pub fn draw_now_playing(f: &mut Frame, area: Rect, state: &AppState) {
    let lines = if let Some(item) = state.player.item() {
        let playback = state.player.state();
        let (play_label, play_color) = if playback.is_playing {
            ("Playing", Color::Green)
        } else {
            ("Paused", Color::Yellow)
        };

        let volume_label = if playback.is_muted {
            "muted".to_string()
        } else {
            format!("{:.0}%", playback.volume * 100.0)
        };

        vec![
            Line::from(vec![
                Span::styled("Track: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(item.title.clone()),
            ]),
            Line::from(vec![
                Span::styled("By: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("{} | {}", item.attribution, item.date)),
            ]),
            Line::from(vec![
                Span::styled("State: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(play_label, Style::default().fg(play_color)),
                Span::raw("   "),
                Span::styled("Volume: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(volume_label),
            ]),
        ]
    } else {
        vec![Line::from("No item loaded - press ENTER on a list entry")]
    };

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Now Playing"))
        .wrap(Wrap { trim: true });

    f.render_widget(widget, area);
}

/// Draws the playback progress bar
pub fn draw_progress_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let playback = state.player.state();
    let (percent, label) = if state.player.item().is_some() {
        (playback.progress_percent as u16, state.player.clock())
    } else {
        (0, "-- / --".to_string())
    };

    let progress_bar = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.min(100))
        .label(label);

    f.render_widget(progress_bar, area);
}

/// Draws the upload form of the current media page
pub fn draw_upload_form(f: &mut Frame, area: Rect, state: &AppState) {
    let page = state.page();
    let Some(kind) = page.media_kind() else {
        return;
    };

    let mut lines = form_lines(state, page);
    let status = state.upload_panel(kind).workflow.status();
    if !status.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            status.to_string(),
            tone_style(status),
        )));
    }

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Upload"))
        .wrap(Wrap { trim: true });

    f.render_widget(form, area);
}

/// Draws status and error messages
pub fn draw_status_messages(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Status: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(&state.status_message),
    ])];

    if let Some(ref error_msg) = state.error_message {
        lines.push(Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(error_msg.clone(), Style::default().fg(Color::Red)),
        ]));
    }

    let status_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });

    f.render_widget(status_widget, area);
}

/// Draws the Bible search page
pub fn draw_verse_page(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = create_verse_layout(area);

    let controls = Paragraph::new(form_lines(state, Page::Bible))
        .block(Block::default().borders(Borders::ALL).title("Bible Search"));
    f.render_widget(controls, chunks[0]);

    let mut lines = Vec::new();
    if state.verse_loading {
        lines.push(Line::from("Loading Bible verse..."));
    } else if let Some(ref error) = state.verse_error {
        lines.push(Line::from(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else if let Some(ref verse) = state.verse_result {
        lines.push(Line::from(Span::styled(
            verse.reference.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(verse.text.trim().to_string()));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Translation: {}", verse.translation_name),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    } else {
        lines.push(Line::from("Use the search controls to find Bible verses"));
    }

    let result = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Verse"))
        .wrap(Wrap { trim: true });
    f.render_widget(result, chunks[1]);
}

/// Draws the contact page
pub fn draw_contact_page(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = create_contact_layout(area);

    let mut lines = form_lines(state, Page::Contact);
    if !state.contact_status.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            state.contact_status.clone(),
            tone_style(&state.contact_status),
        )));
    }
    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Send us a Message"),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(form, chunks[0]);

    let mut info = vec![
        Line::from(Span::styled(
            "Get In Touch",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(CONTACT_ADDRESS),
        Line::from(CONTACT_PHONE),
        Line::from(CONTACT_EMAIL),
        Line::from(""),
        Line::from(Span::styled(
            "Service Times",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for service in SERVICE_TIMES {
        info.push(Line::from(*service));
    }

    let info_widget = Paragraph::new(info)
        .block(Block::default().borders(Borders::ALL).title("Contact Info"))
        .wrap(Wrap { trim: true });
    f.render_widget(info_widget, chunks[1]);
}

/// Draws the footer with keyboard shortcuts
pub fn draw_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = match state.mode {
        InputMode::Editing => "ENTER: Commit | TAB: Next Field | ESC: Cancel Editing",
        InputMode::Normal => {
            "Q/ESC: Quit | TAB: Next Page | ↑/↓: Select | ENTER: Load | SPACE: Play/Pause | E: Edit Form | U: Upload | S: Send/Search | H: Help"
        }
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}

/// Builds the field lines of a page form, highlighting the active field
fn form_lines(state: &AppState, page: Page) -> Vec<Line<'static>> {
    form_fields(page)
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let active = index == state.field_index;
            let editing = active && state.mode == InputMode::Editing;
            let value = if editing {
                format!("{}_", state.input.value())
            } else {
                state.field_value(index)
            };

            let label_style = if active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            Line::from(vec![
                Span::styled(format!("{field:>12}: "), label_style),
                Span::raw(value),
            ])
        })
        .collect()
}

fn tone_style(status: &str) -> Style {
    match status_tone(status) {
        StatusTone::Success => Style::default().fg(Color::Green),
        StatusTone::Failure => Style::default().fg(Color::Red),
        StatusTone::Info => Style::default().fg(Color::Blue),
    }
}
