//! Terminal User Interface for pulpit
//!
//! This module provides the interactive console using Ratatui: the
//! ministry pages, the media libraries with playback controls, the
//! upload and contact forms, and the verse search.

pub mod app;
pub mod events;
pub mod ui;

use app::AppState;
use events::{handle_key_event, sync_media_page};
use ui::draw_ui;

use crate::{
    backend::{BackendClient, ConnectivityState},
    error::{Error, Result},
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, sync::Arc, time::Duration};
use tokio::{sync::Mutex, time::interval};

/// Main TUI application
pub struct TuiApp {
    /// Application state
    state: Arc<Mutex<AppState>>,
    /// Terminal instance
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TuiApp {
    /// Creates a new TUI application
    pub fn new(client: BackendClient, connectivity: ConnectivityState) -> Result<Self> {
        // Setup terminal
        enable_raw_mode().map_err(|e| Error::TerminalSetupFailed {
            message: format!("Failed to enable raw mode: {e}"),
        })?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
            Error::TerminalSetupFailed {
                message: format!("Failed to setup terminal: {e}"),
            }
        })?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| Error::TerminalSetupFailed {
            message: format!("Failed to create terminal: {e}"),
        })?;

        let state = Arc::new(Mutex::new(AppState::new(client, connectivity)));

        Ok(Self { state, terminal })
    }

    /// Runs the TUI application
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI application");

        // Start playback tick task
        let state_clone = Arc::clone(&self.state);
        let tick_handle = tokio::spawn(async move {
            let mut interval = interval(Duration::from_millis(250));
            loop {
                interval.tick().await;
                if let Ok(mut state) = state_clone.try_lock() {
                    if state.should_quit {
                        break;
                    }
                    state.tick_playback();
                }
            }
        });

        // Main event loop
        let result = self.event_loop().await;

        // Cleanup
        tick_handle.abort();
        self.cleanup()?;

        result
    }

    /// Main event loop
    async fn event_loop(&mut self) -> Result<()> {
        loop {
            // Check if we should quit
            {
                let state = self.state.lock().await;
                if state.should_quit {
                    break;
                }
            }

            // Draw the UI
            let state = self.state.lock().await.clone();
            self.terminal
                .draw(|f| draw_ui(f, &state))
                .map_err(|e| Error::TerminalSetupFailed {
                    message: format!("Failed to draw UI: {e}"),
                })?;

            // Handle events
            if event::poll(Duration::from_millis(50)).map_err(|e| Error::TerminalSetupFailed {
                message: format!("Failed to poll for events: {e}"),
            })? {
                match event::read().map_err(|e| Error::TerminalSetupFailed {
                    message: format!("Failed to read event: {e}"),
                })? {
                    Event::Key(key_event) => {
                        if key_event.kind == KeyEventKind::Press {
                            handle_key_event(Arc::clone(&self.state), key_event).await?;
                        }
                    }
                    Event::Resize(_, _) => {
                        // Terminal was resized, will be handled on next draw
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Cleanup terminal state
    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode().map_err(|e| Error::TerminalSetupFailed {
            message: format!("Failed to disable raw mode: {e}"),
        })?;

        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .map_err(|e| Error::TerminalSetupFailed {
            message: format!("Failed to cleanup terminal: {e}"),
        })?;

        self.terminal
            .show_cursor()
            .map_err(|e| Error::TerminalSetupFailed {
                message: format!("Failed to show cursor: {e}"),
            })?;

        Ok(())
    }
}

/// Starts the TUI application
pub async fn start_tui(client: BackendClient, connectivity: ConnectivityState) -> Result<()> {
    let mut app = TuiApp::new(client, connectivity)?;

    // Fetch the first media page's listing eagerly so the libraries are
    // warm by the time the user reaches them
    sync_media_page(Arc::clone(&app.state), crate::content::Page::Gallery).await;

    app.run().await
}
