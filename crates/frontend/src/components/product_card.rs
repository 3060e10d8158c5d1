//! Product card component.

use store_types::Product;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::config::StoreConfig;

/// Which section a card is rendered in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardVariant {
    NewArrival,
    Deal,
}

/// Properties for ProductCard component.
#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub variant: CardVariant,
}

/// Product card component.
#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let config = use_context::<StoreConfig>().unwrap_or_default();
    let product = &props.product;

    let (card_class, action) = match props.variant {
        CardVariant::NewArrival => ("product-card", "Add to Cart"),
        CardVariant::Deal => ("product-card deal", "Buy Now"),
    };

    html! {
        <div class={card_class}>
            <button class="wishlist-toggle" title="Add to wishlist">{"🤍"}</button>
            <Link<Route> to={Route::ProductDetail { id: product.id }}>
                <img class="product-image" src={product.image.clone()} alt={product.title.clone()} />
                <h3 class="product-title">{ &product.title }</h3>
            </Link<Route>>
            <p class="product-price">
                { &product.price }
                if props.variant == CardVariant::Deal {
                    {" "}
                    <span class="reference-price">{ &config.deal_reference_price }</span>
                }
            </p>
            <button class="btn btn-primary">{ action }</button>
        </div>
    }
}
