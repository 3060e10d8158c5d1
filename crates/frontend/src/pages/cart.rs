//! Cart page placeholder.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Cart page component.
#[function_component(CartPage)]
pub fn cart_page() -> Html {
    html! {
        <div class="card placeholder">
            <h1>{"🛒 Your Cart"}</h1>
            <p>{"Your cart is empty."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Continue Shopping"}
            </Link<Route>>
        </div>
    }
}
