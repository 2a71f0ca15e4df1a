//! Registry of known mod-list URLs
//!
//! The database document is an ordinary mod list whose first entry's
//! `Dependencies` array is reused as a flat list of URL fragments. An element
//! containing `https` starts a new prefix; every other element is a postfix
//! appended to the most recent prefix. That reinterpretation stays inside this
//! module.

use crate::modlist::constants::FULL_URL_MARKER;
use crate::modlist::error::{ModListError, Result};
use crate::modlist::fetcher::DocumentFetcher;
use crate::modlist::parser::parse_document;

/// Assemble full URLs from a prefix/postfix fragment sequence.
///
/// A postfix seen before any prefix is joined to the empty prefix.
pub fn assemble_database_urls<S: AsRef<str>>(fragments: &[S]) -> Vec<String> {
    let mut prefix = "";
    let mut urls = Vec::new();

    for fragment in fragments {
        let fragment = fragment.as_ref();
        if fragment.contains(FULL_URL_MARKER) {
            prefix = fragment;
        } else {
            urls.push(format!("{prefix}{fragment}"));
        }
    }

    urls
}

/// Lazily built list of every mod-list URL named by the database document
#[derive(Debug, Clone)]
pub struct DatabaseUrlRegistry {
    database_url: String,
    urls: Option<Vec<String>>,
}

impl DatabaseUrlRegistry {
    /// Create an empty registry backed by the database document at `database_url`
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            urls: None,
        }
    }

    /// URL of the database document
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// The assembled URLs, if already built
    pub fn cached(&self) -> Option<&[String]> {
        self.urls.as_deref()
    }

    /// Return every known mod-list URL, fetching the database document on first use
    pub async fn database_urls<F: DocumentFetcher>(&mut self, fetcher: &F) -> Result<&[String]> {
        if self.urls.is_none() {
            let urls = self.build(fetcher).await?;
            self.urls = Some(urls);
        }
        Ok(self.urls.as_deref().unwrap_or_default())
    }

    /// Forget the assembled URLs; the next query fetches the database document again
    pub fn reset(&mut self) {
        self.urls = None;
    }

    async fn build<F: DocumentFetcher>(&self, fetcher: &F) -> Result<Vec<String>> {
        let text = fetcher.fetch_text(&self.database_url).await?;
        let document = parse_document(&text, &self.database_url)?;

        let fragments = document
            .entries
            .first()
            .map(|entry| entry.dependency_ids.as_slice())
            .ok_or_else(|| ModListError::EmptyDatabase {
                url: self.database_url.clone(),
            })?;

        let urls = assemble_database_urls(fragments);
        for url in &urls {
            tracing::debug!("Known mod list: {}", url);
        }
        tracing::info!(
            "Found {} mod lists in database {}",
            urls.len(),
            self.database_url
        );

        Ok(urls)
    }
}
