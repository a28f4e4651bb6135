//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the storage and seed traits,
//! so the catalog store and both front-ends can be exercised without files,
//! databases or network.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_core::testing::{fixtures, MockKeyValueStore, MockSeedSource};
//!
//! let storage = Arc::new(MockKeyValueStore::new());
//! let seed = Arc::new(MockSeedSource::with_catalog(fixtures::catalog(&[1, 2])));
//!
//! // Simulate a full browser storage
//! storage.fail_writes(true);
//! ```

mod mock_seed_source;
mod mock_storage;

pub use mock_seed_source::MockSeedSource;
pub use mock_storage::MockKeyValueStore;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::admin::ProductForm;
    use crate::product::{Catalog, Category, Product, ProductCategory};

    /// Create a product with reasonable defaults.
    pub fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            category: ProductCategory::from(category),
            description: format!("Description of {}", title),
            price: format!("${}00", id),
            image: format!("https://example.com/images/{}.png", id),
        }
    }

    /// Create a catalog with one product per id, cycling through categories.
    pub fn catalog(ids: &[u64]) -> Catalog {
        let products = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let category = Category::ALL[i % Category::ALL.len()];
                product(*id, &format!("Item {}", id), category.token())
            })
            .collect();
        Catalog::from_products(products).unwrap_or_default()
    }

    /// A filled-in, valid admin form.
    pub fn form(title: &str, category: &str) -> ProductForm {
        ProductForm {
            title: title.to_string(),
            category: category.to_string(),
            description: format!("Description of {}", title),
            price: "$1,000".to_string(),
            image: "https://example.com/images/new.png".to_string(),
        }
    }
}
