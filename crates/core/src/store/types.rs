//! Types shared by the catalog store and its source providers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notice::Notice;
use crate::product::Catalog;

/// Which front-end is loading the catalog.
///
/// The two front-ends share the persisted slot but differ in how they fall
/// back when it is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frontend {
    /// Public browsing page.
    Browse,
    /// Credential-gated editor.
    Admin,
}

impl Frontend {
    pub fn as_str(self) -> &'static str {
        match self {
            Frontend::Browse => "browse",
            Frontend::Admin => "admin",
        }
    }

    /// Whether a persisted but empty list counts as a hit.
    pub(crate) fn accepts_empty_persisted(self) -> bool {
        matches!(self, Frontend::Admin)
    }

    /// Whether a catalog read from the seed is written through immediately.
    pub(crate) fn persists_seed(self) -> bool {
        matches!(self, Frontend::Admin)
    }

    /// Whether a failed seed fetch falls back to the built-in sample.
    pub(crate) fn falls_back_to_sample(self) -> bool {
        matches!(self, Frontend::Browse)
    }
}

/// Where a loaded catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// The persisted slot.
    Persisted,
    /// The static seed resource.
    Seed,
    /// The built-in sample list.
    Sample,
    /// Nothing could be loaded.
    Empty,
}

impl CatalogSource {
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogSource::Persisted => "persisted",
            CatalogSource::Seed => "seed",
            CatalogSource::Sample => "sample",
            CatalogSource::Empty => "empty",
        }
    }
}

/// Result of [`CatalogStore::load`](super::CatalogStore::load).
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub source: CatalogSource,
    /// Notices produced while loading (seed failure, write-through failure).
    pub notices: Vec<Notice>,
}

/// Errors from a key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors fetching the seed resource.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(String),

    #[error("Seed request failed: {0}")]
    Http(String),

    #[error("Seed request returned status {0}")]
    Status(u16),

    #[error("Failed to parse seed catalog: {0}")]
    Parse(String),
}

/// Errors saving the catalog.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    #[error("Failed to serialize catalog: {0}")]
    Serialize(String),

    #[error("Failed to persist catalog: {0}")]
    PersistenceWrite(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_fallback_policy() {
        assert!(Frontend::Admin.accepts_empty_persisted());
        assert!(!Frontend::Browse.accepts_empty_persisted());

        assert!(Frontend::Admin.persists_seed());
        assert!(!Frontend::Browse.persists_seed());

        assert!(Frontend::Browse.falls_back_to_sample());
        assert!(!Frontend::Admin.falls_back_to_sample());
    }

    #[test]
    fn test_catalog_source_serialization() {
        assert_eq!(
            serde_json::to_string(&CatalogSource::Persisted).unwrap(),
            "\"persisted\""
        );
        assert_eq!(
            serde_json::to_string(&CatalogSource::Sample).unwrap(),
            "\"sample\""
        );
        assert_eq!(CatalogSource::Empty.as_str(), "empty");
    }

    #[test]
    fn test_quota_error_message() {
        let err = StorageError::QuotaExceeded {
            needed: 120,
            quota: 100,
        };
        assert_eq!(
            err.to_string(),
            "Storage quota exceeded: 120 bytes needed, 100 allowed"
        );
    }
}
