//! Built-in sample catalog used when nothing else can be loaded.

use crate::product::{Catalog, Category, Product, ProductCategory};

fn sample(id: u64, category: Category, description: &str, price: &str) -> Product {
    Product {
        id,
        title: format!("Producto {}", id),
        category: ProductCategory::Known(category),
        description: description.to_string(),
        price: price.to_string(),
        image: format!("https://via.placeholder.com/300x300?text=Producto+{}", id),
    }
}

/// The fixed six-product sample catalog.
pub fn sample_catalog() -> Catalog {
    Catalog::from_products(vec![
        sample(
            1,
            Category::Categoria1,
            "Este es un producto de ejemplo con una descripción detallada. Incluye características y beneficios del producto.",
            "$1,500",
        ),
        sample(
            2,
            Category::Categoria1,
            "Descripción detallada del producto 2. Este producto tiene características únicas que lo hacen especial.",
            "$2,200",
        ),
        sample(
            3,
            Category::Categoria2,
            "El producto 3 es ideal para quienes buscan calidad y durabilidad. Fabricado con los mejores materiales.",
            "$1,800",
        ),
        sample(
            4,
            Category::Categoria2,
            "Un producto versátil que se adapta a diferentes necesidades. Perfecto para uso diario.",
            "$3,500",
        ),
        sample(
            5,
            Category::Categoria3,
            "Producto premium con acabados de lujo. Diseñado para quienes aprecian la exclusividad.",
            "$4,200",
        ),
        sample(
            6,
            Category::Categoria3,
            "La mejor relación calidad-precio del mercado. No encontrarás nada igual a este precio.",
            "$1,950",
        ),
    ])
    .unwrap_or_default()
}
