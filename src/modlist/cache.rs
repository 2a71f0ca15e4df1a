//! In-memory cache of loaded mod lists
//!
//! The cache holds the result of the last implicit load. It is either empty or
//! holds a full batch; it is only ever replaced wholesale.

use crate::modlist::types::{ModDescriptor, ModListDocument};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A cached batch of mod lists together with the locations it was loaded from
#[derive(Debug, Clone)]
pub struct CachedModLists {
    pub documents: Arc<Vec<ModListDocument>>,
    pub locations: Vec<String>,
    pub loaded_at: DateTime<Utc>,
}

/// Process-wide mod-list cache, owned by the service
#[derive(Debug, Clone, Default)]
pub struct ModListCache {
    entry: Option<CachedModLists>,
}

impl ModListCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a batch is cached
    pub fn is_populated(&self) -> bool {
        self.entry.is_some()
    }

    /// The cached documents, sharing the stored allocation
    pub fn documents(&self) -> Option<Arc<Vec<ModListDocument>>> {
        self.entry.as_ref().map(|entry| Arc::clone(&entry.documents))
    }

    /// The cached batch with its metadata
    pub fn entry(&self) -> Option<&CachedModLists> {
        self.entry.as_ref()
    }

    /// When the cached batch was loaded
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.entry.as_ref().map(|entry| entry.loaded_at)
    }

    /// Replace the whole cache with a freshly loaded batch
    pub fn replace(
        &mut self,
        locations: Vec<String>,
        documents: Arc<Vec<ModListDocument>>,
    ) {
        if self.entry.is_some() {
            tracing::info!("Replacing cached mod lists ({} lists)", documents.len());
        } else {
            tracing::info!("Caching {} mod lists", documents.len());
        }
        self.entry = Some(CachedModLists {
            documents,
            locations,
            loaded_at: Utc::now(),
        });
    }

    /// Drop the cached batch
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// First cached descriptor with `mod_id`, scanning lists in load order.
    ///
    /// `mod_id` uniqueness across lists is not enforced.
    pub fn find_mod(&self, mod_id: &str) -> Option<&ModDescriptor> {
        self.entry
            .as_ref()?
            .documents
            .iter()
            .find_map(|document| document.find_mod(mod_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(list_id: &str, mod_ids: &[&str]) -> ModListDocument {
        ModListDocument {
            entries: mod_ids
                .iter()
                .map(|id| ModDescriptor {
                    mod_id: id.to_string(),
                    name: format!("{list_id}:{id}"),
                    ..Default::default()
                })
                .collect(),
            list_name: list_id.to_uppercase(),
            list_id: list_id.to_string(),
        }
    }

    #[test]
    fn test_empty_cache() {
        let cache = ModListCache::new();
        assert!(!cache.is_populated());
        assert!(cache.documents().is_none());
        assert!(cache.find_mod("anything").is_none());
    }

    #[test]
    fn test_replace_and_clear() {
        let mut cache = ModListCache::new();
        let first = Arc::new(vec![document("a", &["x"])]);
        cache.replace(vec!["https://a/a.json".to_string()], Arc::clone(&first));

        assert!(cache.is_populated());
        assert!(Arc::ptr_eq(&cache.documents().unwrap(), &first));
        assert_eq!(cache.entry().unwrap().locations, vec!["https://a/a.json"]);

        let second = Arc::new(vec![document("b", &["y"])]);
        cache.replace(vec!["https://a/b.json".to_string()], Arc::clone(&second));
        assert!(Arc::ptr_eq(&cache.documents().unwrap(), &second));

        cache.clear();
        assert!(!cache.is_populated());
    }

    #[test]
    fn test_loaded_at_tracks_latest_replace() {
        let mut cache = ModListCache::new();
        assert!(cache.loaded_at().is_none());

        let before = Utc::now();
        cache.replace(vec![], Arc::new(vec![document("a", &["x"])]));
        let first = cache.loaded_at().unwrap();
        assert!(first >= before && first <= Utc::now());

        cache.replace(vec![], Arc::new(vec![document("b", &["y"])]));
        assert!(cache.loaded_at().unwrap() >= first);

        cache.clear();
        assert!(cache.loaded_at().is_none());
    }

    #[test]
    fn test_find_mod_returns_first_in_load_order() {
        let mut cache = ModListCache::new();
        cache.replace(
            vec![],
            Arc::new(vec![document("a", &["shared"]), document("b", &["shared", "own"])]),
        );

        assert_eq!(cache.find_mod("shared").unwrap().name, "a:shared");
        assert_eq!(cache.find_mod("own").unwrap().name, "b:own");
        assert!(cache.find_mod("missing").is_none());
    }
}
