//! Sign-up page shell.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Sign-up page component.
#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <div class="card auth-card">
            <h1>{"Create Account"}</h1>
            <form class="auth-form" {onsubmit}>
                <label>
                    {"Name"}
                    <input type="text" />
                </label>
                <label>
                    {"Email"}
                    <input type="email" placeholder="you@example.com" />
                </label>
                <label>
                    {"Password"}
                    <input type="password" />
                </label>
                <button type="submit" class="btn btn-primary">{"Sign Up"}</button>
            </form>
            <p class="auth-switch">
                {"Already have an account? "}
                <Link<Route> to={Route::SignIn}>{"Sign in"}</Link<Route>>
            </p>
        </div>
    }
}
