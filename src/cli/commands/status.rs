//! Status command implementation for pulpit
//!
//! This module implements the status command which probes the backend
//! health endpoints and reports the settled connectivity indicator.

use crate::{
    backend::{ConnectivityState, probe_backend},
    config::Config,
    error::Result,
};

/// Status command implementation
pub struct StatusCommand<'a> {
    _args: &'a super::super::Status,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command
    pub fn new(args: &'a super::super::Status) -> Self {
        Self { _args: args }
    }

    /// Execute the status command
    pub async fn run(&self, config: &Config) -> Result<()> {
        let outcome = probe_backend(&config.backend, config.probe_timeout).await;
        println!("Server: {} ({})", outcome.state, outcome.backend);
        if outcome.state == ConnectivityState::Disconnected {
            println!(
                "App running in offline mode. Start your backend server for full functionality."
            );
        }
        Ok(())
    }
}
