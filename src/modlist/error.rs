//! Error types for mod-list loading

use std::path::PathBuf;

/// Errors raised while resolving, fetching, or parsing mod lists.
///
/// Every variant carries the location or path that failed.
#[derive(Debug, thiserror::Error)]
pub enum ModListError {
    /// The request could not be sent or its body could not be read.
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The document body does not match the mod-list shape.
    #[error("failed to parse mod list from {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// A local mod list could not be read.
    #[error("failed to read local mod list {}: {source}", .path.display())]
    LocalRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The database document has no entry to read URL fragments from.
    #[error("database document {url} contains no mod entries")]
    EmptyDatabase { url: String },

    /// Invalid or unreadable configuration.
    #[error("invalid configuration: {detail}")]
    Config { detail: String },
}

impl ModListError {
    /// Whether this failure happened on the network side
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::HttpStatus { .. })
    }

    /// Whether this failure is a malformed document
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// The URL, location, or path the failure refers to
    pub fn location(&self) -> String {
        match self {
            Self::Transport { url, .. }
            | Self::HttpStatus { url, .. }
            | Self::EmptyDatabase { url } => url.clone(),
            Self::Parse { location, .. } => location.clone(),
            Self::LocalRead { path, .. } => path.display().to_string(),
            Self::Config { .. } => String::new(),
        }
    }
}

/// Result type alias for mod-list operations.
pub type Result<T> = std::result::Result<T, ModListError>;
