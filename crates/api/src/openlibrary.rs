//! Open Library client for book metadata enrichment.
//!
//! Lookup keys on ISBN-10 first; an ISBN-13 that misses is retried as its
//! converted ISBN-10. Failure is advisory — the reading-list UI falls back
//! to manual entry — so the client reports a miss rather than an error
//! wherever it reasonably can.

use atelier_core::isbn;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";

/// Metadata resolved for an ISBN.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookLookup {
    pub title: Option<String>,
    pub author: Option<String>,
    /// Cover image URL keyed on the ISBN that actually matched.
    pub cover_url: String,
    pub isbn_used: String,
}

#[derive(Debug, Deserialize)]
struct EditionDoc {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<AuthorRef>,
}

#[derive(Debug, Deserialize)]
struct AuthorRef {
    key: String,
}

#[derive(Debug, Deserialize)]
struct AuthorDoc {
    name: Option<String>,
}

/// Open Library catalog client. Base URLs are injectable for tests.
pub struct OpenLibrary {
    http: reqwest::Client,
    base_url: String,
    covers_url: String,
}

impl Default for OpenLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenLibrary {
    pub fn new() -> Self {
        Self::with_base_urls(DEFAULT_BASE_URL, DEFAULT_COVERS_URL)
    }

    pub fn with_base_urls(base_url: impl Into<String>, covers_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            covers_url: covers_url.into(),
        }
    }

    /// Resolve metadata for a normalized ISBN.
    ///
    /// Returns `Ok(None)` when the catalog has no record under either form
    /// of the ISBN.
    pub async fn lookup(&self, normalized_isbn: &str) -> Result<Option<BookLookup>, reqwest::Error> {
        let mut final_isbn = normalized_isbn.to_string();
        let mut response = self.fetch_edition(&final_isbn).await?;

        // An ISBN-13 miss may still exist in the catalog under its ISBN-10.
        if response.is_none() && normalized_isbn.len() == 13 {
            if let Ok(isbn10) = isbn::isbn13_to_isbn10(normalized_isbn) {
                final_isbn = isbn10;
                response = self.fetch_edition(&final_isbn).await?;
            }
        }

        let Some(edition) = response else {
            return Ok(None);
        };

        let author = match edition.authors.first() {
            Some(author_ref) => self.fetch_author_name(&author_ref.key).await,
            None => None,
        };

        Ok(Some(BookLookup {
            title: edition.title,
            author,
            cover_url: format!("{}/b/isbn/{final_isbn}-L.jpg", self.covers_url),
            isbn_used: final_isbn,
        }))
    }

    async fn fetch_edition(&self, isbn: &str) -> Result<Option<EditionDoc>, reqwest::Error> {
        let url = format!("{}/isbn/{isbn}.json", self.base_url);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    /// Author lookups are best-effort; a failure leaves the name empty.
    async fn fetch_author_name(&self, author_key: &str) -> Option<String> {
        let url = format!("{}{author_key}.json", self.base_url);
        let response = self.http.get(&url).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        let doc: AuthorDoc = response.json().await.ok()?;
        doc.name
    }
}
