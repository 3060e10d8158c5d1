//! Main application component with routing and the theme flag.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Footer, Header};
use crate::config::StoreConfig;
use crate::pages::{CartPage, HomePage, ProductDetailPage, SignInPage, SignUpPage, WishlistPage};
use crate::theme::{DocumentRoot, ThemeController};

/// Application routes.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/product/:id")]
    ProductDetail { id: u32 },
    #[at("/cart")]
    Cart,
    #[at("/signin")]
    SignIn,
    #[at("/signup")]
    SignUp,
    #[at("/wishlist")]
    Wishlist,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::ProductDetail { id } => html! { <ProductDetailPage {id} /> },
        Route::Cart => html! { <CartPage /> },
        Route::SignIn => html! { <SignInPage /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::Wishlist => html! { <WishlistPage /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Properties for the App component.
#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: StoreConfig,
}

/// Main application component.
///
/// Owns the theme flag. The header receives the flag and a toggle callback;
/// after each change the controller pushes the flag onto the document root.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let initial = props.config.initial_theme;
    let theme = use_state(move || initial);
    let controller = use_mut_ref(|| ThemeController::new(DocumentRoot));

    use_effect_with(*theme, move |theme| {
        if controller.borrow_mut().sync(*theme) {
            log::info!("theme set to {theme}");
        }
    });

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggled()))
    };

    html! {
        <ContextProvider<StoreConfig> context={props.config.clone()}>
            <BrowserRouter>
                <div class="app-container">
                    <Header theme={*theme} {on_toggle} />
                    <main class="main-content">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </BrowserRouter>
        </ContextProvider<StoreConfig>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: &str = include_str!("../styles.css");

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::ProductDetail { id: 2 }.to_path(), "/product/2");
        assert_eq!(Route::Cart.to_path(), "/cart");
        assert_eq!(Route::SignIn.to_path(), "/signin");
        assert_eq!(Route::SignUp.to_path(), "/signup");
        assert_eq!(Route::Wishlist.to_path(), "/wishlist");
    }

    #[test]
    fn test_recognize_product_route() {
        assert_eq!(
            Route::recognize("/product/3"),
            Some(Route::ProductDetail { id: 3 })
        );
        assert_eq!(Route::recognize("/wishlist"), Some(Route::Wishlist));
    }

    #[test]
    fn test_layout_classes_are_styled() {
        // Dark styling hangs off the document root only.
        for class in [".app-container", ".main-content", "html.dark"] {
            assert!(STYLES.contains(class), "{class}");
        }
        assert!(!STYLES.contains("theme-dark"));
    }
}
