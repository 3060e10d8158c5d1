//! Sticky header with brand, search box, theme toggle and shortcuts.

use store_types::Theme;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::config::StoreConfig;

/// Properties for Header component.
#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

/// Header component.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let config = use_context::<StoreConfig>().unwrap_or_default();
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());

    let toggle_title = if props.theme.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    html! {
        <header class="site-header">
            <div class="header-inner">
                <Link<Route> to={Route::Home} classes="nav-brand">
                    { &config.brand }
                </Link<Route>>
                // Search is not wired up yet.
                <div class="header-search">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search products..."
                    />
                </div>
                <nav class="header-actions">
                    <button class="theme-toggle" title={toggle_title} {onclick}>
                        { props.theme.toggle_icon() }
                    </button>
                    <Link<Route> to={Route::Wishlist}>{"❤️"}</Link<Route>>
                    <Link<Route> to={Route::Cart}>{"🛒"}</Link<Route>>
                    <Link<Route> to={Route::SignIn}>{"🔐"}</Link<Route>>
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[tokio::test]
    async fn test_toggle_button_follows_theme() {
        let light = render(html! { <Header theme={Theme::Light} on_toggle={Callback::noop()} /> }).await;
        let dark = render(html! { <Header theme={Theme::Dark} on_toggle={Callback::noop()} /> }).await;

        assert!(light.contains("🌙"));
        assert!(light.contains("Switch to dark mode"));
        assert!(dark.contains("🌞"));
        assert!(dark.contains("Switch to light mode"));
    }

    #[tokio::test]
    async fn test_header_links() {
        let html = render(html! { <Header theme={Theme::Light} on_toggle={Callback::noop()} /> }).await;

        assert!(html.contains("NeoKart+"));
        for path in ["/wishlist", "/cart", "/signin"] {
            assert!(html.contains(&format!(r#"href="{path}""#)), "{path}");
        }
    }
}
