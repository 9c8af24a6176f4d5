//! Contact command implementation for pulpit
//!
//! This module implements the contact command which sends a message to
//! the ministry through the backend's contact endpoint.

use crate::{
    backend::{BackendClient, ContactMessage, probe_backend},
    config::{Config, STATUS_MESSAGE_SENT, STATUS_SENDING},
    error::Result,
    utils::contact_failure_status,
};

/// Contact command implementation
pub struct ContactCommand<'a> {
    args: &'a super::super::Contact,
}

impl<'a> ContactCommand<'a> {
    /// Create a new contact command
    pub fn new(args: &'a super::super::Contact) -> Self {
        Self { args }
    }

    /// Execute the contact command
    pub async fn run(&self, config: &Config) -> Result<()> {
        let outcome = probe_backend(&config.backend, config.probe_timeout).await;
        let client = BackendClient::new(outcome.backend)?;

        let message = ContactMessage {
            name: self.args.name.clone(),
            email: self.args.email.clone(),
            subject: self.args.subject.clone().unwrap_or_default(),
            message: self.args.message.clone(),
        };

        println!("{STATUS_SENDING}");
        match client.send_contact(&message).await {
            Ok(()) => {
                println!("{STATUS_MESSAGE_SENT}");
                Ok(())
            }
            Err(err) => {
                println!("{}", contact_failure_status(&err));
                Err(err)
            }
        }
    }
}
