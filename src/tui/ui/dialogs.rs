//! Dialog components for the TUI interface
//!
//! This module contains the help dialog overlay.

use super::layout::centered_rect;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Draws the help dialog
pub fn draw_help_dialog(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());

    f.render_widget(Clear, area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  TAB / →      - Next page"),
        Line::from("  SHIFT-TAB / ← - Previous page"),
        Line::from("  ↑ / K        - Previous item"),
        Line::from("  ↓ / J        - Next item"),
        Line::from("  ENTER        - Load selected item"),
        Line::from(""),
        Line::from("Playback Controls:"),
        Line::from("  SPACE / P    - Toggle play/pause"),
        Line::from("  [ / ]        - Seek back/forward"),
        Line::from("  - / +        - Volume down/up"),
        Line::from("  M            - Toggle mute"),
        Line::from(""),
        Line::from("Forms:"),
        Line::from("  E            - Edit the page form"),
        Line::from("  U            - Submit upload (media pages)"),
        Line::from("  S            - Send message / search verse"),
        Line::from("  R            - Refresh backend listing"),
        Line::from(""),
        Line::from("Interface:"),
        Line::from("  H / F1       - Toggle this help"),
        Line::from("  Q / ESC      - Quit application"),
        Line::from(""),
        Line::from("Press any key to close this help..."),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White))
        .alignment(ratatui::layout::Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, area);
}
