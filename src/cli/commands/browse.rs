//! Browse command implementation for pulpit
//!
//! This module implements the browse command which probes the backend
//! once and starts the terminal interface.

use crate::{
    backend::{BackendClient, probe_backend},
    config::Config,
    error::Result,
    start_tui,
};
use log::info;

/// Browse command implementation
pub struct BrowseCommand<'a> {
    _args: &'a super::super::Browse,
}

impl<'a> BrowseCommand<'a> {
    /// Create a new browse command
    pub fn new(args: &'a super::super::Browse) -> Self {
        Self { _args: args }
    }

    /// Execute the browse command
    pub async fn run(&self, config: &Config) -> Result<()> {
        let outcome = probe_backend(&config.backend, config.probe_timeout).await;
        info!("Starting TUI mode ({})", outcome.state);
        let client = BackendClient::new(outcome.backend.clone())?;
        start_tui(client, outcome.state).await
    }
}
