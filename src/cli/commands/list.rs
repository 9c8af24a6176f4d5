//! List command implementation for pulpit
//!
//! This module implements the list command which shows the items of one
//! media collection: the page's sample items plus whatever the backend
//! listing returns.

use crate::{
    backend::{BackendClient, ConnectivityState, probe_backend},
    config::{Config, LOG_MSG_FETCHING_LISTING},
    error::Result,
    media::MediaLibrary,
    utils::format_media_description,
};
use log::info;

/// List command implementation
pub struct ListCommand<'a> {
    args: &'a super::super::List,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command
    pub fn new(args: &'a super::super::List) -> Self {
        Self { args }
    }

    /// Execute the list command
    pub async fn run(&self, config: &Config) -> Result<()> {
        let kind = self.args.collection.kind();
        let mut library = MediaLibrary::with_sample_items(kind);

        let outcome = probe_backend(&config.backend, config.probe_timeout).await;
        if outcome.state == ConnectivityState::Connected {
            info!("{LOG_MSG_FETCHING_LISTING}");
            let client = BackendClient::new(outcome.backend)?;
            let files = client.list_media(kind).await?;
            library.merge_listing(&client.config().base_url(), &files);
        } else {
            info!("Server not available, showing sample {kind} items only");
        }

        for item in library.items() {
            println!(
                "{}",
                format_media_description(
                    &item.kind.to_string(),
                    &item.title,
                    &item.attribution,
                    &item.date
                )
            );
        }
        Ok(())
    }
}
