//! Cart state management for the Artisan storefront.
//!
//! This crate provides the client-side mirror of the server cart:
//!
//! - **Cart**: `CartState` (product id to quantity), `CartStore` which keeps it
//!   reconciled with the backend and persisted to session storage
//! - **Commands**: `CartCommand`, the typed actions the page dispatches
//! - **Stepper**: `QuantityStepper`, bounded increment/decrement of a quantity
//! - **Wishlist**: toggle responses from the backend
//!
//! # Example
//!
//! ```rust,ignore
//! use artisan_commerce::prelude::*;
//!
//! let store = CartStore::new(backend, session_store, notifier, view, &config.cart);
//! store.sync_with_server().await;
//!
//! store.dispatch(CartCommand::Add { product_id: ProductId::new("42"), quantity: 2 }).await;
//! println!("Items in cart: {}", store.total_count());
//! ```

pub mod cart;
pub mod error;
pub mod ids;
pub mod notify;
pub mod wishlist;

pub use error::CartError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{
        Badge, CartBackend, CartCommand, CartState, CartStore, CartSummary, CartView,
        QuantityStepper,
    };
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::notify::{NotificationKind, Notifier};
    pub use crate::wishlist::{WishlistAction, WishlistResponse};
}
