//! Mod-list document parsing

use crate::modlist::error::{ModListError, Result};
use crate::modlist::types::ModListDocument;

/// Parse a mod-list document. `location` is only used for error reporting.
pub fn parse_document(text: &str, location: &str) -> Result<ModListDocument> {
    serde_json::from_str(text).map_err(|source| ModListError::Parse {
        location: location.to_string(),
        source,
    })
}

/// Serialize a document back to the wire format
pub fn to_json(document: &ModListDocument) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(|source| ModListError::Parse {
        location: document.list_id.clone(),
        source,
    })
}
