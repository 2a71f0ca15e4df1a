//! Raw document retrieval
//!
//! The fetcher is a pure I/O boundary: it returns the body of a URL as text
//! and never caches, retries, or interprets it.

use crate::modlist::constants::MAX_REDIRECTS;
use crate::modlist::error::{ModListError, Result};
use std::future::Future;

/// Retrieves the text body of a document by URL
pub trait DocumentFetcher {
    /// Fetch the complete body at `url`
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP(S) fetcher backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a new fetcher, optionally overriding the User-Agent
    pub fn new(user_agent: Option<&str>) -> Result<Self> {
        let client = Self::build_http_client(user_agent)?;
        Ok(Self { client })
    }

    /// Build the HTTP client with proper configuration
    fn build_http_client(user_agent: Option<&str>) -> Result<reqwest::Client> {
        let user_agent = user_agent
            .map(str::to_string)
            .unwrap_or_else(Self::format_user_agent);

        tracing::debug!("Creating HTTP client with User-Agent: {}", user_agent);

        reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| ModListError::Config {
                detail: format!("failed to create HTTP client: {e}"),
            })
    }

    /// Default User-Agent string
    fn format_user_agent() -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::info!("Reading {}", url);

        let transport = |source: reqwest::Error| ModListError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModListError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(transport)
    }
}
