//! Page footer component.

use yew::prelude::*;

use crate::config::StoreConfig;

/// Page footer component.
#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_context::<StoreConfig>().unwrap_or_default();

    html! {
        <footer class="site-footer">
            { &config.footer_note }
        </footer>
    }
}
