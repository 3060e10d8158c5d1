//! Product detail page component.

use catalog::get_product_by_id;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::config::StoreConfig;

/// Properties for ProductDetailPage.
#[derive(Properties, PartialEq)]
pub struct ProductDetailPageProps {
    pub id: u32,
}

/// Product detail page component.
#[function_component(ProductDetailPage)]
pub fn product_detail_page(props: &ProductDetailPageProps) -> Html {
    let config = use_context::<StoreConfig>().unwrap_or_default();

    let Some(product) = get_product_by_id(&config.products, props.id) else {
        log::debug!("no product with id {}", props.id);
        return html! {
            <div class="card">
                <h1>{"Product Not Found"}</h1>
                <p>{"The requested product could not be found."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-secondary">
                    {"Back to Shop"}
                </Link<Route>>
            </div>
        };
    };

    html! {
        <div class="card product-detail">
            <img class="product-image large" src={product.image.clone()} alt={product.title.clone()} />
            <div class="product-info">
                <span class="product-category">{ product.category.to_string() }</span>
                <h1>{ &product.title }</h1>
                <p class="product-price">{ &product.price }</p>
                <div class="product-actions">
                    <button class="btn btn-primary">{"Add to Cart"}</button>
                    <button class="btn btn-secondary">{"🤍 Wishlist"}</button>
                </div>
            </div>
        </div>
    }
}
