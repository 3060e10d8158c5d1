//! Category filter buttons.

use store_types::{CategoryFilter, category_tokens};
use yew::prelude::*;

/// Properties for CategoryBar component.
#[derive(Properties, PartialEq)]
pub struct CategoryBarProps {
    pub selected: CategoryFilter,
    pub on_select: Callback<String>,
}

/// One button per category token, the current selection highlighted.
#[function_component(CategoryBar)]
pub fn category_bar(props: &CategoryBarProps) -> Html {
    html! {
        <div class="filter-bar">
            { for category_tokens().into_iter().map(|token| {
                let class = if props.selected.as_token() == token {
                    "filter-chip active"
                } else {
                    "filter-chip"
                };
                let onclick = props.on_select.reform(move |_: MouseEvent| token.to_string());

                html! {
                    <button key={token} {class} {onclick}>{ token }</button>
                }
            })}
        </div>
    }
}
