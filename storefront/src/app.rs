//! Application shell, layout and pages.

use artisan_commerce::ProductId;
use artisan_core::StorefrontConfig;
use artisan_ui::{anchor_target, is_tooltip_trigger, ProductFilter};
use leptos::ev;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::browser;
use crate::catalog::Catalog;
use crate::components::{
    AddToCartForm, CartBadge, CartTable, FilterButtons, FormField, HeroSlider, ProductGallery,
    ProductGrid, SearchBox, Toasts, ValidatedForm, WishlistButton,
};
use crate::context::provide_cart;

/// Products shown on the home page.
const FEATURED: usize = 4;

const TOOLTIP_SHOWN: &str = "tooltip-shown";

/// Root component. `config` and `catalog` are provided through context.
#[component]
pub fn App(config: StorefrontConfig, catalog: Catalog) -> impl IntoView {
    provide_meta_context();
    provide_context(catalog);
    let cart = provide_cart(&config);
    provide_context(config);

    enhance_page();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Artisan - handmade goods from independent makers"/>
        <Title text="Artisan"/>

        {match cart {
            Ok(_) => view! {
                <Router>
                    <Header/>
                    <Toasts/>
                    <main>
                        <Routes fallback>
                            <Route path=path!("") view=HomePage/>
                            <Route path=path!("/products") view=ProductsPage/>
                            <Route path=path!("/product/:id") view=ProductPage/>
                            <Route path=path!("/cart") view=CartPage/>
                            <Route path=path!("/contact") view=ContactPage/>
                            <Route path=path!("/*any") view=NotFound/>
                        </Routes>
                    </main>
                    <Footer/>
                </Router>
            }
            .into_any(),
            Err(err) => {
                tracing::error!(error = %err, "Cannot create the HTTP client");
                view! { <p class="alert alert-danger">"The store is unavailable right now."</p> }
                    .into_any()
            }
        }}
    }
}

/// Document-wide behaviour: smooth scrolling for in-page anchors and
/// tooltips for `data-bs-toggle="tooltip"` elements.
fn enhance_page() {
    let _ = window_event_listener(ev::click, |ev| {
        let Some(link) = browser::closest(ev.target(), "a[href^='#']") else {
            return;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        if let Some(id) = anchor_target(&href) {
            if browser::scroll_to(id) {
                ev.prevent_default();
            }
        }
    });

    let _ = window_event_listener(ev::mouseover, |ev| {
        if let Some(trigger) = tooltip_trigger(ev.target()) {
            let _ = trigger.class_list().add_1(TOOLTIP_SHOWN);
        }
    });
    let _ = window_event_listener(ev::mouseout, |ev| {
        if let Some(trigger) = tooltip_trigger(ev.target()) {
            let _ = trigger.class_list().remove_1(TOOLTIP_SHOWN);
        }
    });
}

fn tooltip_trigger(target: Option<web_sys::EventTarget>) -> Option<web_sys::Element> {
    let element = browser::closest(target, "[data-bs-toggle]")?;
    let toggle = element.get_attribute("data-bs-toggle");
    if !is_tooltip_trigger(toggle.as_deref()) {
        return None;
    }
    // The bubble text comes from the title; drop it so the native tooltip
    // does not show as well.
    if let Some(title) = element.get_attribute("title") {
        let _ = element.set_attribute("data-tooltip", &title);
        let _ = element.remove_attribute("title");
    }
    Some(element)
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    view! {
        <header>
            <h1><a href="/">"Artisan"</a></h1>
            <nav>
                <a href="/">"Home"</a>
                <a href="/products">"Products"</a>
                <a href="/contact">"Contact"</a>
                <CartBadge/>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer id="footer">
            <p>"Artisan - handmade goods from independent makers"</p>
            <a href="#top">"Back to top"</a>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

#[component]
fn HomePage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let featured = catalog.products.iter().take(FEATURED).cloned().collect::<Vec<_>>();

    view! {
        <div id="top"></div>
        <HeroSlider slides=catalog.slides.clone()/>
        <h2>"Featured"</h2>
        <ProductGrid products=featured/>
        <a href="/products" class="btn">"Browse all products"</a>
    }
}

#[component]
fn ProductsPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let filter = RwSignal::new(ProductFilter::new());
    let query = RwSignal::new(String::new());

    view! {
        <h2 id="top">"All Products"</h2>
        <SearchBox query=query/>
        <FilterButtons filter=filter categories=catalog.categories()/>
        <ProductGrid products=catalog.products.clone() filter=filter query=query/>
    }
}

#[component]
fn ProductPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let params = use_params_map();
    let id = move || ProductId::new(params.with(|p| p.get("id").unwrap_or_default()));

    move || match catalog.product(&id()).cloned() {
        Some(product) => {
            let description = product
                .description
                .clone()
                .unwrap_or_else(|| "No description available.".to_string());
            view! {
                <div class="product-detail">
                    <ProductGallery images=product.images() alt=product.name.clone()/>
                    <div>
                        <h1>{product.name.clone()}</h1>
                        <p class="price">{product.price_display()}</p>
                        <p class="description">{description}</p>
                        <p
                            class="stock"
                            data-bs-toggle="tooltip"
                            title="Made to order items ship within two weeks"
                        >
                            {product.stock.to_string()} " in stock"
                        </p>
                        <AddToCartForm product_id=product.id.clone() max=product.stock/>
                        <WishlistButton product_id=product.id.clone()/>
                        <a href="#reviews">"Reviews"</a>
                    </div>
                </div>
                <section id="reviews">
                    <h2>"Reviews"</h2>
                    <p>"No reviews yet."</p>
                </section>
            }
            .into_any()
        }
        None => view! {
            <p>"Product not found"</p>
            <a href="/products">"Back to products"</a>
        }
        .into_any(),
    }
}

#[component]
fn CartPage() -> impl IntoView {
    view! {
        <h2>"Shopping Cart"</h2>
        <CartTable/>
    }
}

#[component]
fn ContactPage() -> impl IntoView {
    let fields = vec![
        FormField::required("name", "Name", "text"),
        FormField::required("email", "Email", "email"),
        FormField::optional("order", "Order number", "text"),
        FormField::required("message", "Message", "text"),
    ];

    view! {
        <h2>"Contact us"</h2>
        <ValidatedForm action="/contact" fields=fields submit_label="Send"/>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
