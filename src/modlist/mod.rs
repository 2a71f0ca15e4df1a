//! # Mod List Module
//!
//! Resolution, retrieval, and caching of remote mod-list documents.
//!
//! ## Key Components
//!
//! - [`service`] - Orchestrates resolution, fetching, and caching
//! - [`registry`] - Builds the known mod-list URLs from the database document
//! - [`resolver`] - Expands short locations into full URLs
//! - [`fetcher`] - Retrieves raw document text over HTTP
//! - [`parser`] - Parses documents into [`types::ModListDocument`]
//! - [`cache`] - In-memory cache of the last full load
//! - [`config`] - Service configuration
//! - [`error`] - Error taxonomy

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod service;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use service::ModListService;
