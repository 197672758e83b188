//! Artisan storefront
//!
//! Client-side behaviour of the shop, running in the browser:
//! - Cart mirror synced with the server, badge and toasts
//! - Hero slider with autoplay, hover pause and swipe
//! - Product filter, search-as-you-type, lazy images and fade-in
//! - Form validation and button loading states

mod app;
mod browser;
mod catalog;
mod components;
mod context;

use artisan_core::StorefrontConfig;

const EMBEDDED_CONFIG: &str = include_str!("../storefront.toml");

#[cfg(feature = "csr")]
fn load_config() -> StorefrontConfig {
    match StorefrontConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::warn_1(&format!("Invalid storefront.toml, using defaults: {err:#}").into());
            StorefrontConfig::default()
        }
    }
}

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use app::App;
    use catalog::Catalog;

    console_error_panic_hook::set_once();

    let config = load_config();
    artisan_observability::init_writer_logging(&config.logging, browser::ConsoleWriter::default);

    let catalog = Catalog::embedded().unwrap_or_else(|err| {
        tracing::error!(error = %err, "Invalid catalog.json, showing an empty store");
        Catalog::default()
    });
    tracing::info!(
        products = catalog.products.len(),
        slides = catalog.slides.len(),
        "Storefront starting"
    );

    leptos::mount::mount_to_body(move || leptos::view! { <App config=config catalog=catalog/> });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = StorefrontConfig::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.cart.storage_key, "cart");
        assert_eq!(config.slider.interval_ms, 6000);
    }
}
