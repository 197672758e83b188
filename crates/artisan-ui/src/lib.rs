//! Page behaviour for the Artisan storefront, independent of any DOM.
//!
//! Every component is a small state machine. Timers are modelled with
//! millisecond timestamps passed in by the caller, so the same logic
//! drives the browser build and the tests.
//!
//! - `slider` - Hero carousel, autoplay and swipe detection
//! - `toast` - Auto-dismissing notifications
//! - `search` - Debounced search-as-you-type
//! - `filter` - Category filter buttons
//! - `reveal` - Lazy image loading and fade-in on scroll
//! - `form` - Required-field validation and button loading states
//! - `gallery` - Product image gallery with thumbnails
//! - `page` - Anchors, tooltips and price formatting

pub mod filter;
pub mod form;
pub mod gallery;
pub mod page;
pub mod reveal;
pub mod search;
pub mod slider;
pub mod toast;

pub use filter::ProductFilter;
pub use form::{ButtonLoading, FormValidator};
pub use gallery::ImageGallery;
pub use page::{anchor_target, format_price, is_tooltip_trigger};
pub use reveal::{FadeIn, LazyImages};
pub use search::SearchDebounce;
pub use slider::{Autoplay, HeroSlider, SlideControl, SwipeDirection, SwipeTracker};
pub use toast::{Toast, ToastQueue};
