//! Core types for the NeoKart+ storefront.
//!
//! This crate defines the shared data structures used by the
//! catalog and the web frontend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel category token meaning "no partitioning".
pub const ALL_TOKEN: &str = "All";

/// Class placed on the document root while the dark theme is active.
pub const DARK_MARKER: &str = "dark";

/// Product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Fresh fruit
    Fruits,
    /// Nuts and dried fruit
    #[serde(rename = "Dry Fruits")]
    DryFruits,
    /// Rice, wheat, pulses
    Grains,
}

impl Category {
    /// All categories, in filter bar order.
    pub const ALL: [Category; 3] = [Category::Fruits, Category::DryFruits, Category::Grains];

    /// The display token used for filtering.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::DryFruits => "Dry Fruits",
            Category::Grains => "Grains",
        }
    }

    /// Look up a category by its exact token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == token)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every token the filter bar offers, sentinel first.
pub fn category_tokens() -> Vec<&'static str> {
    std::iter::once(ALL_TOKEN)
        .chain(Category::ALL.iter().map(|c| c.as_str()))
        .collect()
}

/// A catalog item.
///
/// The price is a preformatted label; no arithmetic is ever done on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier
    pub id: u32,
    /// Display name
    pub title: String,
    /// Formatted price label (e.g. "₹120/kg")
    pub price: String,
    /// Image URL
    #[serde(rename = "img")]
    pub image: String,
    /// Category the product belongs to
    pub category: Category,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        price: impl Into<String>,
        image: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price: price.into(),
            image: image.into(),
            category,
        }
    }
}

/// The category selection of a catalog view.
///
/// Any token is accepted. A token naming no known category is kept as-is
/// and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No partitioning
    #[default]
    All,
    /// Exact, case-sensitive match on the category token
    Named(String),
}

impl CategoryFilter {
    /// Parse a filter token. Never fails.
    pub fn from_token(token: &str) -> Self {
        if token == ALL_TOKEN {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(token.to_string())
        }
    }

    /// The token this filter was built from.
    pub fn as_token(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_TOKEN,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Whether the token is the sentinel or one of the known categories.
    pub fn is_known(&self) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => Category::from_token(name).is_some(),
        }
    }

    /// Whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category.as_str() == name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Light/dark presentation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The opposite variant.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle button: the variant a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "🌞",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apples() -> Product {
        Product::new(1, "Fresh Apples", "₹120/kg", "https://example.com/a.jpg", Category::Fruits)
    }

    #[test]
    fn test_category_tokens_order() {
        assert_eq!(category_tokens(), vec!["All", "Fruits", "Dry Fruits", "Grains"]);
    }

    #[test]
    fn test_category_from_token_is_case_sensitive() {
        assert_eq!(Category::from_token("Dry Fruits"), Some(Category::DryFruits));
        assert_eq!(Category::from_token("dry fruits"), None);
        assert_eq!(Category::from_token("All"), None);
    }

    #[test]
    fn test_filter_from_token() {
        assert_eq!(CategoryFilter::from_token("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_token("Grains"),
            CategoryFilter::Named("Grains".to_string())
        );
        assert_eq!(CategoryFilter::from_token("Snacks").as_token(), "Snacks");
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_filter_matches() {
        let product = apples();

        assert!(CategoryFilter::All.matches(&product));
        assert!(CategoryFilter::from_token(Category::Fruits.as_str()).matches(&product));
        assert!(!CategoryFilter::from_token(Category::Grains.as_str()).matches(&product));
        assert!(!CategoryFilter::from_token("fruits").matches(&product));
        assert!(!CategoryFilter::from_token("Snacks").matches(&product));
    }

    #[test]
    fn test_filter_is_known() {
        assert!(CategoryFilter::All.is_known());
        assert!(CategoryFilter::from_token("Dry Fruits").is_known());
        assert!(!CategoryFilter::from_token("Snacks").is_known());
    }

    #[test]
    fn test_product_serialization_uses_storefront_field_names() {
        let json = serde_json::to_value(apples()).unwrap();

        assert_eq!(json["img"], "https://example.com/a.jpg");
        assert_eq!(json["category"], "Fruits");

        let parsed: Product = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, apples());
    }

    #[test]
    fn test_dry_fruits_serializes_with_space() {
        let json = serde_json::to_string(&Category::DryFruits).unwrap();
        assert_eq!(json, "\"Dry Fruits\"");
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        let theme = Theme::default();

        assert_eq!(theme, Theme::Light);
        assert!(theme.toggled().is_dark());
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn test_theme_toggle_icon() {
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
        assert_eq!(Theme::Dark.toggle_icon(), "🌞");
    }
}
