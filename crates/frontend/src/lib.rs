//! NeoKart+ storefront - Yew WASM frontend
//!
//! This crate provides the web UI: the product catalog, the theme toggle,
//! and placeholder pages for cart, wishlist and authentication.

mod app;
mod components;
mod config;
mod pages;
pub mod theme;

#[cfg(test)]
mod test_support;

pub use app::{App, AppProps, Route};
pub use config::StoreConfig;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let config = StoreConfig::from_document();
    log::info!("starting {} storefront", config.brand);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
