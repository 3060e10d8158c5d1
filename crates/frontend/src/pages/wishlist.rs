//! Wishlist page placeholder.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Wishlist page component.
#[function_component(WishlistPage)]
pub fn wishlist_page() -> Html {
    html! {
        <div class="card placeholder">
            <h1>{"❤️ Your Wishlist"}</h1>
            <p>{"Your wishlist is empty."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Browse Products"}
            </Link<Route>>
        </div>
    }
}
