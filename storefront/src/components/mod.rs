//! Interactive page components.

mod cart;
mod forms;
mod gallery;
mod products;
mod search;
mod slider;
mod toasts;

pub use cart::{AddToCartForm, CartBadge, CartTable, WishlistButton};
pub use forms::{FormField, ValidatedForm};
pub use gallery::ProductGallery;
pub use products::{FilterButtons, ProductGrid};
pub use search::SearchBox;
pub use slider::HeroSlider;
pub use toasts::Toasts;
