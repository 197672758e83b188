//! Fetch client for the storefront backend.

use artisan_commerce::cart::{CartBackend, CartState};
use artisan_commerce::wishlist::{WishlistAction, WishlistResponse};
use artisan_commerce::{CartError, ProductId};
use artisan_core::ApiConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::endpoints;
use crate::timeout::TimeoutConfig;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Rejected by server: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return FetchError::Timeout(e.to_string());
        }
        if is_connect(&e) {
            return FetchError::Connection(e.to_string());
        }
        if e.is_decode() {
            return FetchError::Deserialization(e.to_string());
        }
        FetchError::Request(e.to_string())
    }
}

impl From<FetchError> for CartError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Http { status, url } => CartError::Status {
                status,
                endpoint: url,
            },
            FetchError::Deserialization(msg) | FetchError::Rejected(msg) => {
                CartError::Malformed(msg)
            }
            other => CartError::Network(other.to_string()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_connect(e: &reqwest::Error) -> bool {
    e.is_connect()
}

#[cfg(target_arch = "wasm32")]
fn is_connect(_e: &reqwest::Error) -> bool {
    false
}

/// Client for the cart, update and wishlist endpoints.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: reqwest::Client,
    base_url: String,
    timeout: TimeoutConfig,
}

impl FetchClient {
    /// Create a client for the configured origin.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let timeout = TimeoutConfig::from(config);
        let builder = reqwest::Client::builder();

        // The browser's fetch has no per-request timeouts to configure.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .connect_timeout(timeout.connect)
            .timeout(timeout.total);

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            timeout,
        })
    }

    /// Point the client at another origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Absolute URL of an endpoint path.
    pub fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    pub fn timeout(&self) -> TimeoutConfig {
        self.timeout
    }

    /// Fetch the server cart.
    pub async fn get_cart(&self) -> Result<CartState, FetchError> {
        let url = self.url(endpoints::CART);
        let resp = self.send(self.client.get(&url), &url).await?;
        let cart = resp.json::<CartState>().await?;
        Ok(cart)
    }

    /// Add `quantity` units of a product.
    pub async fn post_add(&self, product_id: &ProductId, quantity: u32) -> Result<(), FetchError> {
        let url = self.url(endpoints::ADD_TO_CART);
        let form = endpoints::add_form(product_id, quantity);
        self.send(self.client.post(&url).form(&form), &url).await?;
        Ok(())
    }

    /// Remove a product.
    pub async fn get_remove(&self, product_id: &ProductId) -> Result<(), FetchError> {
        let url = self.url(&endpoints::remove_from_cart(product_id));
        self.send(self.client.get(&url), &url).await?;
        Ok(())
    }

    /// Overwrite quantities.
    pub async fn post_update(&self, cart: &CartState) -> Result<(), FetchError> {
        let url = self.url(endpoints::UPDATE_CART);
        let form = endpoints::update_form(cart);
        self.send(self.client.post(&url).form(&form), &url).await?;
        Ok(())
    }

    /// Toggle a wishlist entry. The JSON content type asks the server for a
    /// JSON answer instead of a redirect.
    pub async fn post_wishlist(&self, product_id: &ProductId) -> Result<WishlistAction, FetchError> {
        let url = self.url(&endpoints::toggle_wishlist(product_id));
        let req = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body("{}");
        let resp = self.send(req, &url).await?;
        let body = resp.json::<WishlistResponse>().await?;
        if body.status != "success" {
            return Err(FetchError::Rejected(body.status));
        }
        Ok(body.action)
    }

    async fn send(&self, req: RequestBuilder, url: &str) -> Result<Response, FetchError> {
        let resp = req.send().await?;

        let status = resp.status().as_u16();
        debug!(url, status, "Backend responded");
        if !resp.status().is_success() {
            return Err(FetchError::Http {
                status,
                url: url.to_string(),
            });
        }
        Ok(resp)
    }
}

#[async_trait(?Send)]
impl CartBackend for FetchClient {
    async fn fetch_cart(&self) -> Result<CartState, CartError> {
        Ok(self.get_cart().await?)
    }

    async fn add_item(&self, product_id: &ProductId, quantity: u32) -> Result<(), CartError> {
        Ok(self.post_add(product_id, quantity).await?)
    }

    async fn remove_item(&self, product_id: &ProductId) -> Result<(), CartError> {
        Ok(self.get_remove(product_id).await?)
    }

    async fn update_cart(&self, cart: &CartState) -> Result<(), CartError> {
        Ok(self.post_update(cart).await?)
    }

    async fn toggle_wishlist(&self, product_id: &ProductId) -> Result<WishlistAction, CartError> {
        Ok(self.post_wishlist(product_id).await?)
    }
}
