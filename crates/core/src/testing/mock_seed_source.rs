//! Mock seed source for testing.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::product::Catalog;
use crate::store::{SeedError, SeedSource};

/// Mock implementation of the SeedSource trait.
///
/// Returns a configured catalog, or fails as if the resource were
/// unreachable, and counts how often it was asked.
#[derive(Debug)]
pub struct MockSeedSource {
    catalog: Option<Catalog>,
    fetches: AtomicUsize,
}

impl MockSeedSource {
    /// A seed that serves `catalog`.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Some(catalog),
            fetches: AtomicUsize::new(0),
        }
    }

    /// A seed whose every fetch fails.
    pub fn failing() -> Self {
        Self {
            catalog: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of fetches performed.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SeedSource for MockSeedSource {
    async fn fetch(&self) -> Result<Catalog, SeedError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.catalog
            .clone()
            .ok_or_else(|| SeedError::Http("mock seed unavailable".to_string()))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
