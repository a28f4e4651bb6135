//! Admin-side product search.
//!
//! Wider than the public search: price text and the category label match too.

use crate::product::{Catalog, Product};

/// Products whose title, description, price or category label contain
/// `term`, case-insensitively. A blank term returns the whole catalog.
pub fn search<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a Product> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.iter().collect();
    }
    catalog.iter().filter(|p| matches(p, &needle)).collect()
}

fn matches(product: &Product, needle: &str) -> bool {
    [
        product.title.as_str(),
        product.description.as_str(),
        product.price.as_str(),
        product.category.label(),
    ]
    .iter()
    .any(|text| text.to_lowercase().contains(needle))
}
