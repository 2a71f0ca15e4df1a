//! In-memory fetcher for unit tests

use crate::modlist::error::{ModListError, Result};
use crate::modlist::fetcher::DocumentFetcher;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned bodies by URL and records every request.
/// Unknown URLs answer HTTP 404.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    documents: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: &str, body: &str) -> Self {
        self.documents.insert(url.to_string(), body.to_string());
        self
    }

    /// Serve a database document whose first entry carries `fragments`
    pub fn with_database(self, url: &str, fragments: &[&str]) -> Self {
        let body = serde_json::json!({
            "Modlist": [{ "ModId": "database", "Dependencies": fragments }],
            "ModListName": "Database",
            "ModListID": "database",
        });
        self.with_document(url, &body.to_string())
    }

    /// Serve a mod list with a single entry
    pub fn with_list(self, url: &str, list_id: &str, mod_id: &str) -> Self {
        let body = serde_json::json!({
            "Modlist": [{ "ModId": mod_id, "Name": mod_id }],
            "ModListName": list_id.to_uppercase(),
            "ModListID": list_id,
        });
        self.with_document(url, &body.to_string())
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn fetch_count(&self) -> usize {
        self.requests().len()
    }
}

impl DocumentFetcher for StaticFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| ModListError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
    }
}
