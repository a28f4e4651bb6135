//! Types for catalog products.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Label shown for products whose category is unset or unrecognized.
pub const UNCATEGORIZED_LABEL: &str = "Sin categoría";

/// Icon shown for products whose category is unset or unrecognized.
pub const UNCATEGORIZED_ICON: &str = "tag";

/// One of the fixed product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "categoria1")]
    Categoria1,
    #[serde(rename = "categoria2")]
    Categoria2,
    #[serde(rename = "categoria3")]
    Categoria3,
}

impl Category {
    /// Every known category, in display order.
    pub const ALL: [Category; 3] = [
        Category::Categoria1,
        Category::Categoria2,
        Category::Categoria3,
    ];

    /// Stored token for this category.
    pub fn token(self) -> &'static str {
        match self {
            Category::Categoria1 => "categoria1",
            Category::Categoria2 => "categoria2",
            Category::Categoria3 => "categoria3",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Categoria1 => "Categoría 1",
            Category::Categoria2 => "Categoría 2",
            Category::Categoria3 => "Categoría 3",
        }
    }

    /// Icon name used by front-ends.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Categoria1 => "tshirt",
            Category::Categoria2 => "mobile-alt",
            Category::Categoria3 => "home",
        }
    }

    /// Parse a stored token. Matching is exact.
    pub fn from_token(token: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.token() == token)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Category value as stored on a product.
///
/// Unrecognized values are kept verbatim so that a save never rewrites
/// what the user (or the seed file) put there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductCategory {
    Known(Category),
    Uncategorized(String),
}

impl ProductCategory {
    /// The known category, if any.
    pub fn known(&self) -> Option<Category> {
        match self {
            ProductCategory::Known(c) => Some(*c),
            ProductCategory::Uncategorized(_) => None,
        }
    }

    /// Raw stored value.
    pub fn as_str(&self) -> &str {
        match self {
            ProductCategory::Known(c) => c.token(),
            ProductCategory::Uncategorized(raw) => raw,
        }
    }

    pub fn label(&self) -> &'static str {
        self.known().map_or(UNCATEGORIZED_LABEL, Category::label)
    }

    pub fn icon(&self) -> &'static str {
        self.known().map_or(UNCATEGORIZED_ICON, Category::icon)
    }
}

impl Default for ProductCategory {
    fn default() -> Self {
        ProductCategory::Uncategorized(String::new())
    }
}

impl From<String> for ProductCategory {
    fn from(raw: String) -> Self {
        match Category::from_token(&raw) {
            Some(c) => ProductCategory::Known(c),
            None => ProductCategory::Uncategorized(raw),
        }
    }
}

impl From<&str> for ProductCategory {
    fn from(raw: &str) -> Self {
        ProductCategory::from(raw.to_string())
    }
}

impl From<Category> for ProductCategory {
    fn from(category: Category) -> Self {
        ProductCategory::Known(category)
    }
}

impl From<ProductCategory> for String {
    fn from(category: ProductCategory) -> Self {
        match category {
            ProductCategory::Known(c) => c.token().to_string(),
            ProductCategory::Uncategorized(raw) => raw,
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// System-assigned id, unique within a catalog.
    pub id: u64,
    /// Display title.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Category token (see [`ProductCategory`]).
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: ProductCategory,
    /// Free text description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Price as text, including any currency formatting.
    #[serde(default, deserialize_with = "text_or_number")]
    pub price: String,
    /// Image URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

impl Product {
    pub fn from_fields(id: u64, fields: ProductFields) -> Self {
        Self {
            id,
            title: fields.title,
            category: fields.category,
            description: fields.description,
            price: fields.price,
            image: fields.image,
        }
    }

    /// Content fields without the id.
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            title: self.title.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            image: self.image.clone(),
        }
    }
}

/// Everything a product carries except its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFields {
    pub title: String,
    pub category: ProductCategory,
    pub description: String,
    pub price: String,
    pub image: String,
}

/// Treats an explicit `null` like a missing value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a JSON string, a bare number or `null` and keeps the text.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Errors for catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate product id: {0}")]
    DuplicateId(u64),

    #[error("Product not found: {0}")]
    NotFound(u64),

    #[error("No product id left above {0}")]
    IdSpaceExhausted(u64),
}
