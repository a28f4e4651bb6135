//! Ordered, id-unique product list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{CatalogError, Product, ProductFields};

/// An ordered sequence of products with unique ids.
///
/// Insertion order is display order. Deserializing a list that repeats an
/// id fails, so persisted data can never break the invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    /// Id for the next created product: the current maximum plus one, or 1
    /// when empty. Ids of deleted products above the new maximum get reused.
    /// `None` once the maximum is `u64::MAX`.
    pub fn next_id(&self) -> Option<u64> {
        match self.products.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Append a new product under a freshly assigned id.
    pub fn create(&mut self, fields: ProductFields) -> Result<&Product, CatalogError> {
        let id = self
            .next_id()
            .ok_or(CatalogError::IdSpaceExhausted(u64::MAX))?;
        self.products.push(Product::from_fields(id, fields));
        Ok(&self.products[self.products.len() - 1])
    }

    /// Replace the product with `id` in place, keeping its id and position.
    pub fn update(&mut self, id: u64, fields: ProductFields) -> Result<&Product, CatalogError> {
        let index = self.position(id).ok_or(CatalogError::NotFound(id))?;
        self.products[index] = Product::from_fields(id, fields);
        Ok(&self.products[index])
    }

    /// Remove the product with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: u64) -> Result<Product, CatalogError> {
        let index = self.position(id).ok_or(CatalogError::NotFound(id))?;
        Ok(self.products.remove(index))
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = CatalogError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Self::from_products(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
