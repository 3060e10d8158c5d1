//! Storefront configuration.
//!
//! Defaults are compiled in. A page may override any field by embedding a
//! JSON object in `<script id="store-config" type="application/json">`,
//! including the product list itself.

use catalog::load_builtin_products;
use serde::{Deserialize, Serialize};
use store_types::{Product, Theme};

/// Id of the element holding configuration overrides.
pub const CONFIG_ELEMENT_ID: &str = "store-config";

/// Products, text and presentation settings for the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Brand shown in the header and hero banner
    pub brand: String,
    /// Hero banner subtitle
    pub tagline: String,
    /// Struck-through reference price on deal cards
    pub deal_reference_price: String,
    /// Trending banner text
    pub trending_message: String,
    /// Footer line
    pub footer_note: String,
    /// Theme applied on first render
    pub initial_theme: Theme,
    /// Catalog shown on the home and detail pages; ids must be unique
    pub products: Vec<Product>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            brand: "NeoKart+".to_string(),
            tagline: "Shop fresh groceries, dry fruits, grains, and daily essentials at your doorstep."
                .to_string(),
            deal_reference_price: "₹149".to_string(),
            trending_message: "Seasonal Fruits & Organic Grains – Healthy choices for your family!"
                .to_string(),
            footer_note: "© 2025 NeoKart+. Built with ❤️ using Rust + Yew.".to_string(),
            initial_theme: Theme::Light,
            products: load_builtin_products(),
        }
    }
}

impl StoreConfig {
    /// Parse configuration overrides from JSON.
    pub fn from_json(json: &str) -> catalog::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        catalog::check_unique_ids(&config.products)?;
        Ok(config)
    }

    /// Read overrides from the host page, falling back to defaults.
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(text) = text else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring invalid store config: {e}");
                Self::default()
            }
        }
    }
}
