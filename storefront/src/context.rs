//! The page's single cart, and the signals it renders into.

use std::rc::Rc;
use std::time::Duration;

use artisan_commerce::prelude::*;
use artisan_core::StorefrontConfig;
use artisan_data::{FetchClient, FetchError};
use artisan_ui::ToastQueue;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::{self, SessionStorage};

pub type AppCart = CartStore<FetchClient, SessionStorage, ToastNotifier, SignalCartView>;

/// Copyable handle to the cart, provided through context.
pub type CartHandle = StoredValue<Rc<AppCart>, LocalStorage>;

/// Notifier that pushes onto the toast queue and schedules the dismissal.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastQueue>,
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        let now = browser::now_ms();
        let mut id = 0;
        let mut duration_ms = 0;
        self.toasts.update(|queue| {
            duration_ms = queue.duration_ms();
            id = queue.push(message, kind, now);
        });

        let toasts = self.toasts;
        set_timeout(
            move || {
                toasts.update(|queue| {
                    queue.dismiss(id);
                });
            },
            Duration::from_millis(duration_ms),
        );
    }
}

/// Badge and cart-icon state.
#[derive(Clone, Copy)]
pub struct CartSignals {
    pub summary: RwSignal<CartSummary>,
    pub bouncing: RwSignal<bool>,
}

/// Renders cart summaries into `CartSignals`.
#[derive(Clone, Copy)]
pub struct SignalCartView {
    signals: CartSignals,
    bounce: Duration,
}

impl CartView for SignalCartView {
    fn render(&self, summary: &CartSummary) {
        self.signals.summary.set(*summary);
        if summary.bounce {
            let bouncing = self.signals.bouncing;
            bouncing.set(true);
            set_timeout(move || bouncing.set(false), self.bounce);
        }
    }
}

/// Build the cart, publish it and its signals through context, and start
/// the first server sync.
pub fn provide_cart(config: &StorefrontConfig) -> Result<CartHandle, FetchError> {
    let toasts = RwSignal::new(ToastQueue::new(config.toast.duration_ms));
    let signals = CartSignals {
        summary: RwSignal::new(CartSummary::from_state(&CartState::new())),
        bouncing: RwSignal::new(false),
    };
    provide_context(toasts);
    provide_context(signals);

    let mut client = FetchClient::new(&config.api)?;
    if config.api.base_url.is_empty() {
        if let Some(origin) = browser::origin() {
            client = client.with_base_url(origin);
        }
    }

    let view = SignalCartView {
        signals,
        bounce: Duration::from_millis(config.cart.bounce_ms),
    };
    let store = CartStore::new(
        client,
        SessionStorage::open(),
        ToastNotifier { toasts },
        view,
        &config.cart,
    );
    let cart: CartHandle = StoredValue::new_local(Rc::new(store));
    provide_context(cart);

    let store = cart.get_value();
    spawn_local(async move {
        store.sync_with_server().await;
    });

    Ok(cart)
}

pub fn use_cart() -> CartHandle {
    expect_context::<CartHandle>()
}

pub fn use_cart_signals() -> CartSignals {
    expect_context::<CartSignals>()
}

pub fn use_config() -> StorefrontConfig {
    expect_context::<StorefrontConfig>()
}

/// Fire a cart command and forget about the outcome; the store reports
/// failures itself.
pub fn dispatch(cart: CartHandle, command: CartCommand) {
    let store = cart.get_value();
    spawn_local(async move {
        store.dispatch(command).await;
    });
}
