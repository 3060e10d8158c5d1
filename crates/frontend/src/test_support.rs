//! Server-side rendering of components for tests.

use tokio::task::LocalSet;
use yew::LocalServerRenderer;
use yew::prelude::*;
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

#[derive(Properties, PartialEq)]
pub struct TestRouterProps {
    pub children: Html,
}

/// Links need a navigator, so everything renders inside an in-memory router.
#[function_component(TestRouter)]
fn test_router(props: &TestRouterProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());

    html! {
        <Router {history}>
            { props.children.clone() }
        </Router>
    }
}

/// Render `children` to an HTML string.
pub async fn render(children: Html) -> String {
    let renderer =
        LocalServerRenderer::<TestRouter>::with_props(TestRouterProps { children }).hydratable(false);

    LocalSet::new().run_until(renderer.render()).await
}
