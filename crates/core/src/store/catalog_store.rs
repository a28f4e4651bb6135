//! Load-with-fallback and save of the shared product list.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::{
    sample_catalog, CatalogSource, CatalogStoreError, Frontend, KeyValueStore, LoadedCatalog,
    SeedSource,
};
use crate::metrics::{
    CATALOG_LOADS, PERSISTED_READ_FAILURES, PERSISTENCE_WRITE_FAILURES, SEED_FETCH_FAILURES,
};
use crate::notice::Notice;
use crate::product::Catalog;

/// Default name of the persisted slot.
pub const DEFAULT_STORAGE_KEY: &str = "catalogProducts";

/// Owns the persisted slot and the seed, and produces a catalog per session.
///
/// Both front-ends get their own copy from [`load`](Self::load); they only
/// see each other's changes through the persisted slot.
pub struct CatalogStore {
    storage: Arc<dyn KeyValueStore>,
    seed: Arc<dyn SeedSource>,
    key: String,
}

impl CatalogStore {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        seed: Arc<dyn SeedSource>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            seed,
            key: key.into(),
        }
    }

    /// Name of the persisted slot.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the catalog for `frontend`.
    ///
    /// Sources are tried in order: the persisted slot, the seed resource,
    /// then (browse only) the built-in sample. Unreadable persisted data
    /// counts as absent. The admin front-end writes a seed-loaded catalog
    /// through to storage right away.
    pub async fn load(&self, frontend: Frontend) -> LoadedCatalog {
        let loaded = self.load_uncounted(frontend).await;
        CATALOG_LOADS
            .with_label_values(&[frontend.as_str(), loaded.source.as_str()])
            .inc();
        info!(
            "Loaded {} products for {} from {}",
            loaded.catalog.len(),
            frontend.as_str(),
            loaded.source.as_str()
        );
        loaded
    }

    async fn load_uncounted(&self, frontend: Frontend) -> LoadedCatalog {
        if let Some(catalog) = self.read_persisted() {
            if !catalog.is_empty() || frontend.accepts_empty_persisted() {
                return LoadedCatalog {
                    catalog,
                    source: CatalogSource::Persisted,
                    notices: Vec::new(),
                };
            }
            debug!("Persisted catalog is empty, falling through to seed");
        }

        match self.seed.fetch().await {
            Ok(catalog) => {
                let mut notices = Vec::new();
                if frontend.persists_seed() {
                    if let Err(e) = self.save(&catalog) {
                        notices.push(Notice::error(format!("Could not save products: {}", e)));
                    }
                }
                LoadedCatalog {
                    catalog,
                    source: CatalogSource::Seed,
                    notices,
                }
            }
            Err(e) => {
                SEED_FETCH_FAILURES.inc();
                error!("Failed to load seed catalog from {}: {}", self.seed.describe(), e);

                if frontend.falls_back_to_sample() {
                    LoadedCatalog {
                        catalog: sample_catalog(),
                        source: CatalogSource::Sample,
                        notices: Vec::new(),
                    }
                } else {
                    LoadedCatalog {
                        catalog: Catalog::new(),
                        source: CatalogSource::Empty,
                        notices: vec![Notice::error("Could not load products")],
                    }
                }
            }
        }
    }

    /// Read and parse the persisted slot. Missing, unreadable and malformed
    /// data all come back as `None`.
    pub fn read_persisted(&self) -> Option<Catalog> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                PERSISTED_READ_FAILURES.inc();
                warn!("Failed to read persisted catalog '{}': {}", self.key, e);
                return None;
            }
        };

        match serde_json::from_str::<Catalog>(&raw) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                PERSISTED_READ_FAILURES.inc();
                warn!("Ignoring malformed persisted catalog '{}': {}", self.key, e);
                None
            }
        }
    }

    /// Serialize the whole catalog and overwrite the persisted slot.
    pub fn save(&self, catalog: &Catalog) -> Result<(), CatalogStoreError> {
        let json =
            serde_json::to_string(catalog).map_err(|e| CatalogStoreError::Serialize(e.to_string()))?;

        self.storage.set(&self.key, &json).map_err(|e| {
            PERSISTENCE_WRITE_FAILURES.inc();
            error!("Failed to persist catalog '{}': {}", self.key, e);
            CatalogStoreError::from(e)
        })?;

        debug!("Persisted {} products to '{}'", catalog.len(), self.key);
        Ok(())
    }
}
