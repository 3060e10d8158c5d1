//! Grid of product cards.

use store_types::Product;
use yew::prelude::*;

use super::{CardVariant, ProductCard};

/// Properties for ProductGrid component.
#[derive(Properties, PartialEq)]
pub struct ProductGridProps {
    pub products: Vec<Product>,
    pub variant: CardVariant,
}

/// Product grid component.
#[function_component(ProductGrid)]
pub fn product_grid(props: &ProductGridProps) -> Html {
    if props.products.is_empty() {
        return html! {
            <div class="card">
                <p>{"No products found."}</p>
            </div>
        };
    }

    html! {
        <div class="product-grid">
            { for props.products.iter().map(|product| {
                html! {
                    <ProductCard key={product.id} product={product.clone()} variant={props.variant} />
                }
            })}
        </div>
    }
}
