//! Selection state behind the catalog view.

use std::rc::Rc;
use store_types::{CategoryFilter, Product};

use crate::filter_by_category;

/// A fixed product list plus the currently selected category.
///
/// Cloning is cheap; the product list is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    products: Rc<Vec<Product>>,
    selected: CategoryFilter,
}

impl CatalogView {
    /// Create a view over the given products with nothing filtered out.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Rc::new(products),
            selected: CategoryFilter::All,
        }
    }

    /// Replace the current selection. Always succeeds.
    pub fn select_category(&mut self, token: &str) {
        let filter = CategoryFilter::from_token(token);
        if !filter.is_known() {
            log::warn!("category {token:?} is not in the catalog; view will be empty");
        }
        log::info!("category selected: {filter}");
        self.selected = filter;
    }

    /// The current selection.
    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    /// Products passing the current selection.
    pub fn filtered(&self) -> Vec<Product> {
        filter_by_category(&self.products, &self.selected)
    }
}
