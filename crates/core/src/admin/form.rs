//! The editor's working form.

use serde::{Deserialize, Serialize};

use super::{FormField, ValidationError};
use crate::product::{Product, ProductCategory, ProductFields};

/// Image suggested for a new product.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300?text=Nuevo+Producto";

/// Raw field values as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
}

impl ProductForm {
    /// Empty form with the placeholder image pre-filled.
    pub fn blank() -> Self {
        Self {
            image: PLACEHOLDER_IMAGE.to_string(),
            ..Self::default()
        }
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            category: product.category.as_str().to_string(),
            description: product.description.clone(),
            price: product.price.clone(),
            image: product.image.clone(),
        }
    }

    /// Check that every required field is filled in.
    ///
    /// Whitespace-only values count as empty. Values are otherwise kept as
    /// entered, and a category outside the known set is stored verbatim.
    pub fn validate(&self) -> Result<ProductFields, ValidationError> {
        let missing: Vec<FormField> = [
            (FormField::Title, &self.title),
            (FormField::Category, &self.category),
            (FormField::Description, &self.description),
            (FormField::Price, &self.price),
            (FormField::Image, &self.image),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        Ok(ProductFields {
            title: self.title.clone(),
            category: ProductCategory::from(self.category.as_str()),
            description: self.description.clone(),
            price: self.price.clone(),
            image: self.image.clone(),
        })
    }
}
