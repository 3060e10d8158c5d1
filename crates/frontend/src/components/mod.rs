//! Reusable UI components.

mod category_bar;
mod footer;
mod header;
mod product_card;
mod product_grid;

pub use category_bar::CategoryBar;
pub use footer::Footer;
pub use header::Header;
pub use product_card::{CardVariant, ProductCard};
pub use product_grid::ProductGrid;
