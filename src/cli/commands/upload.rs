//! Upload command implementation for pulpit
//!
//! This module implements the upload command which runs the full
//! submit-validate-post-update cycle for one file and prints the
//! resulting status.

use crate::{
    backend::{BackendClient, probe_backend},
    config::Config,
    error::Result,
    media::{MediaLibrary, UploadForm, UploadWorkflow},
    utils::format_media_description,
};

/// Upload command implementation
pub struct UploadCommand<'a> {
    args: &'a super::super::Upload,
}

impl<'a> UploadCommand<'a> {
    /// Create a new upload command
    pub fn new(args: &'a super::super::Upload) -> Self {
        Self { args }
    }

    /// Execute the upload command
    pub async fn run(&self, config: &Config) -> Result<()> {
        let kind = self.args.collection.kind();
        let outcome = probe_backend(&config.backend, config.probe_timeout).await;
        let client = BackendClient::new(outcome.backend)?;

        let mut form = UploadForm {
            file: Some(self.args.file.clone()),
            title: self.args.title.clone().unwrap_or_default(),
            attribution: self.args.speaker.clone().unwrap_or_default(),
            date: self.args.date.clone().unwrap_or_default(),
            category: self.args.category.clone().unwrap_or_default(),
            description: self.args.description.clone().unwrap_or_default(),
        };

        let mut library = MediaLibrary::new(kind);
        let mut workflow = UploadWorkflow::new(kind);
        let result = workflow.submit(&client, &mut form, &mut library).await;

        println!("{}", workflow.status());
        if let Some(item) = library.get(0) {
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
        result
    }
}
