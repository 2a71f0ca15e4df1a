use crate::modlist::cache::ModListCache;
use crate::modlist::config::ModListConfig;
use crate::modlist::error::{ModListError, Result};
use crate::modlist::fetcher::{DocumentFetcher, HttpFetcher};
use crate::modlist::parser::parse_document;
use crate::modlist::registry::DatabaseUrlRegistry;
use crate::modlist::resolver::{is_full_url, resolve_location};
use crate::modlist::types::{ModDescriptor, ModListDocument};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Service for resolving, fetching, and caching mod lists.
///
/// Owns both caches (registry URLs and loaded lists). Methods that may populate
/// a cache take `&mut self`, so access is serialized by construction; wrap the
/// service in a `tokio::sync::Mutex` to share it.
#[derive(Debug)]
pub struct ModListService<F = HttpFetcher> {
    fetcher: F,
    registry: DatabaseUrlRegistry,
    cache: ModListCache,
    installer_dir: PathBuf,
}

impl ModListService<HttpFetcher> {
    /// Create a service that fetches over HTTP
    pub fn new(config: &ModListConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = HttpFetcher::new(config.user_agent.as_deref())?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: DocumentFetcher> ModListService<F> {
    /// Create a service with a custom document fetcher
    pub fn with_fetcher(config: &ModListConfig, fetcher: F) -> Self {
        Self {
            fetcher,
            registry: DatabaseUrlRegistry::new(config.database_url.clone()),
            cache: ModListCache::new(),
            installer_dir: config.installer_dir.clone(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn registry(&self) -> &DatabaseUrlRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &ModListCache {
        &self.cache
    }

    /// Every known mod-list URL, built from the database document on first use
    pub async fn database_urls(&mut self) -> Result<Vec<String>> {
        Ok(self.registry.database_urls(&self.fetcher).await?.to_vec())
    }

    /// Turn a location into a fetchable URL.
    ///
    /// Full URLs are returned without touching the registry. Short names that
    /// match nothing come back unchanged. Only a failure to build the registry
    /// is an error.
    pub async fn resolve(&mut self, location: &str) -> Result<String> {
        if is_full_url(location) {
            return Ok(location.to_string());
        }
        let known_urls = self.registry.database_urls(&self.fetcher).await?;
        Ok(resolve_location(location, known_urls))
    }

    /// Fetch the document at `url` and parse it. No caching, no retries.
    pub async fn fetch_and_parse(&self, url: &str) -> Result<ModListDocument> {
        let text = self.fetcher.fetch_text(url).await?;
        parse_document(&text, url)
    }

    /// Resolve a single location and load it, bypassing the list cache
    pub async fn fetch_document(&mut self, location: &str) -> Result<ModListDocument> {
        let url = self.resolve(location).await?;
        self.fetch_and_parse(&url).await
    }

    /// Return mod lists, loading them if needed.
    ///
    /// Without `explicit_locations` every list known to the registry is loaded
    /// and cached; later calls reuse that batch until `reload` is set. Explicit
    /// locations are always fetched and never read or write the cache.
    ///
    /// Lists are fetched one after another in location order, and the first
    /// failure aborts the whole batch.
    pub async fn get_mod_lists(
        &mut self,
        reload: bool,
        explicit_locations: Option<&[String]>,
    ) -> Result<Arc<Vec<ModListDocument>>> {
        if let Some(locations) = explicit_locations {
            tracing::debug!("Loading {} explicit mod lists", locations.len());
            let documents = self.load_batch(locations).await?;
            return Ok(Arc::new(documents));
        }

        if !reload && let Some(documents) = self.cache.documents() {
            tracing::debug!("Using {} cached mod lists", documents.len());
            return Ok(documents);
        }

        let locations = self.database_urls().await?;
        let documents = Arc::new(self.load_batch(&locations).await?);
        self.cache.replace(locations, Arc::clone(&documents));
        Ok(documents)
    }

    /// Read a mod list from a path relative to the installer directory.
    ///
    /// Bypasses the resolver and both caches.
    pub async fn load_local(&self, path: impl AsRef<Path>) -> Result<ModListDocument> {
        let full_path = self.installer_dir.join(path.as_ref());
        tracing::info!("Loading {}", full_path.display());

        let text = tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|source| ModListError::LocalRead {
                path: full_path.clone(),
                source,
            })?;
        parse_document(&text, &full_path.display().to_string())
    }

    /// First cached descriptor with `mod_id`. Does not trigger a load.
    pub fn find_cached_mod(&self, mod_id: &str) -> Option<&ModDescriptor> {
        self.cache.find_mod(mod_id)
    }

    /// Clear both caches without fetching anything
    pub fn reset(&mut self) {
        tracing::debug!("Clearing mod-list caches");
        self.registry.reset();
        self.cache.clear();
    }

    async fn load_batch(&mut self, locations: &[String]) -> Result<Vec<ModListDocument>> {
        let mut documents = Vec::with_capacity(locations.len());
        for location in locations {
            documents.push(self.fetch_document(location).await?);
        }
        Ok(documents)
    }
}
