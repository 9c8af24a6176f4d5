//! Verse command implementation for pulpit
//!
//! This module implements the verse command which looks up a single
//! Bible verse and prints it.

use crate::{
    config::Config,
    error::Result,
    verse::{VerseClient, VerseQuery},
};

/// Verse command implementation
pub struct VerseCommand<'a> {
    args: &'a super::super::Verse,
}

impl<'a> VerseCommand<'a> {
    /// Create a new verse command
    pub fn new(args: &'a super::super::Verse) -> Self {
        Self { args }
    }

    /// Execute the verse command
    pub async fn run(&self, _config: &Config) -> Result<()> {
        let query = VerseQuery::new(self.args.book.clone(), self.args.chapter, self.args.verse);
        let verse = VerseClient::new()?.lookup(&query).await?;

        println!("{}", verse.reference);
        println!();
        println!("{}", verse.text.trim());
        println!();
        println!("Translation: {}", verse.translation_name);
        Ok(())
    }
}
