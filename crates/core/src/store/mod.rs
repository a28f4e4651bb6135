//! Catalog persistence: the key-value slot, the seed resource, and the
//! load-with-fallback chain that ties them together.

mod catalog_store;
mod memory;
mod sample;
mod seed;
mod sqlite;
mod types;

pub use catalog_store::{CatalogStore, DEFAULT_STORAGE_KEY};
pub use memory::MemoryKeyValueStore;
pub use sample::sample_catalog;
pub use seed::{FileSeedSource, HttpSeedSource};
pub use sqlite::SqliteKeyValueStore;
pub use types::*;

use async_trait::async_trait;

use crate::product::Catalog;

/// Trait for string key-value storage (the browser-storage equivalent).
pub trait KeyValueStore: Send + Sync {
    /// Read a slot. Missing slots are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Trait for the read-only seed resource.
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Fetch and parse the seed catalog.
    async fn fetch(&self) -> Result<Catalog, SeedError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}
