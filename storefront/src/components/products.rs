//! Product listing: category filter, lazy images and fade-in.

use artisan_ui::filter::ALL;
use artisan_ui::{FadeIn, LazyImages, ProductFilter};
use leptos::html;
use leptos::prelude::*;

use crate::browser::VisibilityWatcher;
use crate::catalog::Product;

/// Shown until a card scrolls into view.
const PLACEHOLDER_SRC: &str = "/static/img/placeholder.svg";

/// `.filter-btn` row. "All" comes first.
#[component]
pub fn FilterButtons(filter: RwSignal<ProductFilter>, categories: Vec<String>) -> impl IntoView {
    let buttons = std::iter::once(ALL.to_string()).chain(categories);

    view! {
        <div class="product-filters">
            {buttons
                .map(|category| {
                    let label = if category == ALL { "All".to_string() } else { category.clone() };
                    let active = category.clone();
                    let data_filter = category.clone();
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if filter.with(|f| f.is_active_button(&active)) {
                                    "filter-btn active"
                                } else {
                                    "filter-btn"
                                }
                            }
                            data-filter=data_filter
                            on:click=move |_| filter.update(|f| f.select(category.clone()))
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Grid of `.product-card`s, narrowed by the category filter and the
/// search query.
#[component]
pub fn ProductGrid(
    products: Vec<Product>,
    #[prop(optional)] filter: Option<RwSignal<ProductFilter>>,
    #[prop(optional)] query: Option<RwSignal<String>>,
) -> impl IntoView {
    let lazy = RwSignal::new(LazyImages::new());
    let fade = RwSignal::new(FadeIn::new());
    let watcher = StoredValue::new_local(VisibilityWatcher::new());
    on_cleanup(move || {
        watcher.try_with_value(|w| w.disconnect());
    });

    view! {
        <div class="products">
            {products
                .into_iter()
                .map(|product| {
                    view! {
                        <ProductCard
                            product=product
                            lazy=lazy
                            fade=fade
                            watcher=watcher
                            filter=filter
                            query=query
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductCard(
    product: Product,
    lazy: RwSignal<LazyImages>,
    fade: RwSignal<FadeIn>,
    watcher: StoredValue<VisibilityWatcher, LocalStorage>,
    filter: Option<RwSignal<ProductFilter>>,
    query: Option<RwSignal<String>>,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let id = product.id.to_string();
    let src = RwSignal::new(PLACEHOLDER_SRC.to_string());
    let animation = RwSignal::new(None::<String>);

    if let Some(data_src) = product.image_url.clone() {
        lazy.update(|l| l.observe(id.clone(), data_src));
    }

    let key = id.clone();
    card_ref.on_load(move |card| {
        let reveal = move || {
            let mut swapped = None;
            lazy.update(|l| swapped = l.on_intersect(&id));
            if let Some(data_src) = swapped {
                src.set(data_src);
            }

            let mut delay = None;
            fade.update(|f| delay = f.on_intersect(&id));
            if let Some(delay) = delay {
                animation.set(Some(format!("animation-delay: {}ms;", delay.as_millis())));
            }
        };
        watcher.with_value(|w| w.watch(&card, &key, reveal));
    });

    let visible = {
        let product = product.clone();
        move || {
            let in_category = filter.map_or(true, |f| f.with(|f| f.is_visible(product.category.as_deref())));
            let matches = query.map_or(true, |q| q.with(|q| product.matches(q)));
            in_category && matches
        }
    };

    let href = format!("/product/{}", product.id);
    let price = product.price_display();

    view! {
        <div
            node_ref=card_ref
            class=move || if animation.with(Option::is_some) { "product-card fade-in" } else { "product-card" }
            style=move || {
                let mut style = animation.get().unwrap_or_default();
                if !visible() {
                    style.push_str("display: none;");
                }
                style
            }
            data-category=product.category.clone().unwrap_or_default()
        >
            <img src=move || src.get() data-src=product.image_url.clone() alt=product.name.clone() loading="lazy"/>
            <div class="product-info">
                <h3>{product.name.clone()}</h3>
                <p class="price">{price}</p>
                <p class="stock">{product.stock.to_string()} " in stock"</p>
                <a href=href class="btn">"View Details"</a>
            </div>
        </div>
    }
}
