//! Product catalog for the NeoKart+ storefront.
//!
//! This crate provides the built-in product list, category filtering,
//! lookup by id, and the selection state behind the catalog view.

mod view;

pub use view::CatalogView;

use std::collections::HashSet;
use store_types::{Category, CategoryFilter, Product};
use thiserror::Error;

/// Errors from validating a product list.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate product id: {0}")]
    DuplicateId(u32),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Load the built-in product list.
pub fn load_builtin_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Fresh Apples",
            "₹120/kg",
            "https://images.unsplash.com/photo-1567306226416-28f0efdc88ce",
            Category::Fruits,
        ),
        Product::new(
            2,
            "Almonds (Badam)",
            "₹850/kg",
            "https://images.unsplash.com/photo-1601004890684-d8cbf643f5f2",
            Category::DryFruits,
        ),
        Product::new(
            3,
            "Basmati Rice",
            "₹90/kg",
            "https://images.unsplash.com/photo-1586201375761-83865001e17b",
            Category::Grains,
        ),
    ]
}

/// Filter products by category selection.
///
/// `All` keeps everything. A named selection keeps products whose category
/// token is exactly equal to it, so an unknown token yields nothing.
pub fn filter_by_category(products: &[Product], filter: &CategoryFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Get a product by ID.
pub fn get_product_by_id(products: &[Product], id: u32) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

/// Check that no two products share an id.
pub fn check_unique_ids(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
    }
    Ok(())
}
