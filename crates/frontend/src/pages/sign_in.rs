//! Sign-in page shell. The form is not connected to anything.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Sign-in page component.
#[function_component(SignInPage)]
pub fn sign_in_page() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <div class="card auth-card">
            <h1>{"Sign In"}</h1>
            <form class="auth-form" {onsubmit}>
                <label>
                    {"Email"}
                    <input type="email" placeholder="you@example.com" />
                </label>
                <label>
                    {"Password"}
                    <input type="password" />
                </label>
                <button type="submit" class="btn btn-primary">{"Sign In"}</button>
            </form>
            <p class="auth-switch">
                {"New here? "}
                <Link<Route> to={Route::SignUp}>{"Create an account"}</Link<Route>>
            </p>
        </div>
    }
}
