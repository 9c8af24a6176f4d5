//! Bible verse lookup for pulpit
//!
//! This module implements the verse-search page's client: one request
//! per user-initiated search against the public bible-api.com service,
//! no retry, no caching.

use crate::config::{USER_AGENT, VERSE_API_BASE, VERSE_TRANSLATION};
use crate::error::{Error, Result};
use log::info;
use serde::Deserialize;

/// The canonical 66 books, in order, for the book picker
pub const BOOKS_OF_THE_BIBLE: &[&str] = &[
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// One verse-search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseQuery {
    /// Book name, as listed in [`BOOKS_OF_THE_BIBLE`]
    pub book: String,
    /// Chapter number
    pub chapter: u32,
    /// Verse number
    pub verse: u32,
}

impl Default for VerseQuery {
    fn default() -> Self {
        Self {
            book: "John".to_string(),
            chapter: 3,
            verse: 16,
        }
    }
}

impl VerseQuery {
    /// Creates a query for one verse
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }

    /// Returns the human-readable scripture reference
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }

    /// Returns the lookup URL for this query
    ///
    /// Spaces in book names travel as `+`, which the API accepts for
    /// numbered books like "1 Corinthians".
    pub fn url(&self) -> String {
        format!(
            "{VERSE_API_BASE}/{}+{}:{}?translation={VERSE_TRANSLATION}",
            self.book.replace(' ', "+"),
            self.chapter,
            self.verse
        )
    }
}

/// One verse-search result
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Verse {
    /// Scripture reference as the API formats it
    pub reference: String,
    /// Verse text
    pub text: String,
    /// Human-readable translation name
    pub translation_name: String,
}

/// HTTP client for the verse lookup API
#[derive(Debug, Clone)]
pub struct VerseClient {
    http: reqwest::Client,
}

impl VerseClient {
    /// Creates a verse lookup client
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| Error::HttpClientBuildFailed { source: err })?;

        Ok(Self { http })
    }

    /// Looks up a single verse
    pub async fn lookup(&self, query: &VerseQuery) -> Result<Verse> {
        let reference = query.reference();
        info!("Looking up verse '{reference}'");

        let response = self.http.get(query.url()).send().await.map_err(|err| {
            Error::VerseUnreachable {
                reference: reference.clone(),
                source: err,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::VerseLookupFailed {
                reference,
                status: status.as_u16(),
            });
        }

        response
            .json::<Verse>()
            .await
            .map_err(|err| Error::VerseResponseInvalid {
                reference,
                source: err,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_books_list_is_complete() {
        assert_eq!(BOOKS_OF_THE_BIBLE.len(), 66);
        assert_eq!(BOOKS_OF_THE_BIBLE[0], "Genesis");
        assert_eq!(BOOKS_OF_THE_BIBLE[65], "Revelation");
        assert!(BOOKS_OF_THE_BIBLE.contains(&"John"));
    }

    #[test]
    fn test_default_query() {
        let query = VerseQuery::default();
        assert_eq!(query.reference(), "John 3:16");
    }

    #[test]
    fn test_query_url() {
        let query = VerseQuery::new("John", 3, 16);
        assert_eq!(
            query.url(),
            "https://bible-api.com/John+3:16?translation=kjv"
        );
    }

    #[test]
    fn test_query_url_with_spaced_book() {
        let query = VerseQuery::new("1 Corinthians", 13, 4);
        assert_eq!(
            query.url(),
            "https://bible-api.com/1+Corinthians+13:4?translation=kjv"
        );
    }

    #[test]
    fn test_verse_decoding() {
        let verse: Verse = serde_json::from_str(
            r#"{"reference": "John 3:16", "text": "For God so loved the world...", "translation_name": "King James Version", "verses": []}"#,
        )
        .unwrap();
        assert_eq!(verse.reference, "John 3:16");
        assert_eq!(verse.translation_name, "King James Version");
    }
}
