//! Home page: hero banner, catalog sections and testimonials.

use catalog::CatalogView;
use yew::prelude::*;

use crate::components::{CardVariant, CategoryBar, ProductGrid};
use crate::config::StoreConfig;

const TESTIMONIALS: [(&str, &str); 2] = [
    (
        "Absolutely love the freshness and quality of NeoKart+ groceries. Highly recommend!",
        "Priya K.",
    ),
    (
        "From fruits to dry fruits, all delivered neatly packed and on time. Great job!",
        "Anuj R.",
    ),
];

/// Home page component.
///
/// The category selection is local to this page and resets whenever the
/// page is mounted again. New Arrivals and Best Deals show the same
/// filtered list.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let config = use_context::<StoreConfig>().unwrap_or_default();
    let view = {
        let products = config.products.clone();
        use_state(move || CatalogView::new(products))
    };

    let on_select = {
        let view = view.clone();
        Callback::from(move |token: String| {
            let mut next = (*view).clone();
            next.select_category(&token);
            view.set(next);
        })
    };

    let products = view.filtered();

    html! {
        <div class="home">
            <section class="hero">
                <h1>{ format!("Welcome to {}", config.brand) }</h1>
                <p>{ &config.tagline }</p>
                <button class="btn btn-hero">{"Start Shopping"}</button>
            </section>

            <section class="section">
                <h2>{"🆕 New Arrivals"}</h2>
                <CategoryBar selected={view.selected().clone()} {on_select} />
                <ProductGrid products={products.clone()} variant={CardVariant::NewArrival} />
            </section>

            <section class="section">
                <h2>{"🔥 Trending Now"}</h2>
                <div class="trending-banner">
                    { format!("\"{}\"", config.trending_message) }
                </div>
            </section>

            <section class="section">
                <h2>{"💸 Best Deals"}</h2>
                <ProductGrid {products} variant={CardVariant::Deal} />
            </section>

            <section class="section testimonials">
                <h2>{"🌟 Customer Love"}</h2>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                        <blockquote class="testimonial" key={*author}>
                            { format!("\"{quote}\"") }
                            <footer>{ format!("– {author}") }</footer>
                        </blockquote>
                    })}
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[tokio::test]
    async fn test_same_products_in_both_sections() {
        let html = render(html! { <HomePage /> }).await;

        let (arrivals, deals) = html
            .split_once("Best Deals")
            .expect("deals section rendered");

        assert_eq!(arrivals.matches("Add to Cart").count(), 3);
        assert_eq!(arrivals.matches("Buy Now").count(), 0);
        assert_eq!(deals.matches("Buy Now").count(), 3);
        assert_eq!(deals.matches("₹149").count(), 3);
        assert_eq!(deals.matches("Add to Cart").count(), 0);

        // Title appears as image alt text and as the heading.
        for title in ["Fresh Apples", "Almonds (Badam)", "Basmati Rice"] {
            assert_eq!(arrivals.matches(title).count(), 2, "{title}");
            assert_eq!(deals.matches(title).count(), 2, "{title}");
        }
        assert!(!html.contains("No products found."));
    }

    #[tokio::test]
    async fn test_all_is_selected_on_mount() {
        let html = render(html! { <HomePage /> }).await;

        assert_eq!(html.matches("filter-chip active").count(), 1);
        assert!(html.contains(r#"class="filter-chip active">All<"#));
    }

    #[tokio::test]
    async fn test_configured_products_are_rendered() {
        let config = StoreConfig {
            products: vec![store_types::Product::new(
                9,
                "Walnuts",
                "₹1200/kg",
                "https://example.com/walnuts.jpg",
                store_types::Category::DryFruits,
            )],
            ..StoreConfig::default()
        };

        let html = render(html! {
            <ContextProvider<StoreConfig> context={config}>
                <HomePage />
            </ContextProvider<StoreConfig>>
        })
        .await;

        assert_eq!(html.matches("Walnuts").count(), 4);
        assert!(!html.contains("Fresh Apples"));
    }
}
