//! Client-side mirror of the server cart.

use std::cell::RefCell;

use artisan_cache::{Cache, SessionStore};
use artisan_core::CartConfig;
use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::cart::command::CartCommand;
use crate::cart::sequencer::Sequencer;
use crate::cart::state::CartState;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::notify::{NotificationKind, Notifier};
use crate::wishlist::WishlistAction;

const MSG_ADDED: &str = "Item added to cart!";
const MSG_ADD_FAILED: &str = "Failed to add item to cart";
const MSG_REMOVED: &str = "Item removed from cart";
const MSG_REMOVE_FAILED: &str = "Failed to remove item from cart";
const MSG_UPDATE_FAILED: &str = "Failed to update cart";
const MSG_WISHLIST_FAILED: &str = "Failed to update wishlist";

/// Snapshot fetches per sync before giving up on a busy cart.
const SYNC_ATTEMPTS: u32 = 3;

/// The server endpoints the cart talks to.
///
/// Futures are not `Send`: in the browser they wrap JS promises.
#[async_trait(?Send)]
pub trait CartBackend {
    /// `GET /api/cart`: the authoritative mapping.
    async fn fetch_cart(&self) -> Result<CartState, CartError>;

    /// `POST /add_to_cart`: additive update.
    async fn add_item(&self, product_id: &ProductId, quantity: u32) -> Result<(), CartError>;

    /// `GET /remove_from_cart/{id}`.
    async fn remove_item(&self, product_id: &ProductId) -> Result<(), CartError>;

    /// `POST /update_cart`: overwrite quantities with `cart`.
    async fn update_cart(&self, cart: &CartState) -> Result<(), CartError>;

    /// `POST /toggle_wishlist/{id}`.
    async fn toggle_wishlist(&self, product_id: &ProductId) -> Result<WishlistAction, CartError>;
}

/// Cart count badge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Visible(u64),
    Hidden,
}

impl Badge {
    pub fn for_count(count: u64) -> Self {
        if count > 0 {
            Badge::Visible(count)
        } else {
            Badge::Hidden
        }
    }

    /// Text the badge shows, if visible.
    pub fn text(&self) -> Option<String> {
        match self {
            Badge::Visible(n) => Some(n.to_string()),
            Badge::Hidden => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Badge::Visible(_))
    }
}

/// What the page needs to redraw after the cart changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of all quantities.
    pub total_count: u64,
    /// State of every cart badge.
    pub badge: Badge,
    /// Whether the cart icon should play its bounce animation.
    pub bounce: bool,
}

impl CartSummary {
    pub fn from_state(state: &CartState) -> Self {
        let total_count = state.total_count();
        Self {
            total_count,
            badge: Badge::for_count(total_count),
            bounce: total_count > 0,
        }
    }
}

/// Presentation of the cart summary (badges, icon animation).
pub trait CartView {
    fn render(&self, summary: &CartSummary);
}

/// Renders nothing.
impl CartView for () {
    fn render(&self, _summary: &CartSummary) {}
}

impl<V: CartView + ?Sized> CartView for &V {
    fn render(&self, summary: &CartSummary) {
        (**self).render(summary)
    }
}

/// The single cart instance of a page.
///
/// Local state only changes after the backend confirmed an add or remove;
/// a failed request leaves it untouched. Every change is persisted to
/// session storage and rendered. Errors never escape: they are logged, and
/// add/remove failures are surfaced as notifications.
///
/// All methods take `&self` so that requests can overlap on the single UI
/// thread; a `Sequencer` keeps a late response from overwriting a newer one.
pub struct CartStore<B, S, N, V> {
    backend: B,
    cache: Cache<S>,
    storage_key: String,
    notifier: N,
    view: V,
    state: RefCell<CartState>,
    sequencer: RefCell<Sequencer>,
}

impl<B, S, N, V> CartStore<B, S, N, V>
where
    B: CartBackend,
    S: SessionStore,
    N: Notifier,
    V: CartView,
{
    /// Create the store from the persisted copy and render it.
    ///
    /// Call `sync_with_server` afterwards to reconcile with the backend.
    pub fn new(backend: B, storage: S, notifier: N, view: V, config: &CartConfig) -> Self {
        let store = Self {
            backend,
            cache: Cache::new(storage),
            storage_key: config.storage_key.clone(),
            notifier,
            view,
            state: RefCell::new(CartState::new()),
            sequencer: RefCell::new(Sequencer::default()),
        };
        let loaded = store.load();
        *store.state.borrow_mut() = loaded;
        store.render();
        store
    }

    /// Read the persisted cart. Missing or unreadable data yields an empty
    /// cart.
    pub fn load(&self) -> CartState {
        match self.cache.get::<CartState>(&self.storage_key) {
            Ok(Some(state)) => state,
            Ok(None) => CartState::new(),
            Err(e) => {
                warn!(error = %e, key = %self.storage_key, "Failed to load persisted cart");
                CartState::new()
            }
        }
    }

    /// Replace local state with the server's cart.
    ///
    /// Returns whether a snapshot was applied. Failures are logged only. A
    /// snapshot overtaken by a mutation the server confirmed meanwhile is
    /// fetched again, up to `SYNC_ATTEMPTS` times. Local quantity edits
    /// made while the fetch was in flight are kept.
    pub async fn sync_with_server(&self) -> bool {
        for attempt in 1..=SYNC_ATTEMPTS {
            let ticket = self.sequencer.borrow_mut().issue_sync();

            let server = match self.backend.fetch_cart().await {
                Ok(server) => server,
                Err(e) => {
                    error!(error = %e, "Failed to sync cart with server");
                    return false;
                }
            };

            let replay = {
                let mut sequencer = self.sequencer.borrow_mut();
                if !sequencer.sync_is_current(ticket) {
                    debug!(attempt, "Cart snapshot overtaken by a confirmed change, fetching again");
                    continue;
                }
                sequencer.mark_synced(ticket)
            };

            debug!(items = server.len(), replayed = replay.len(), "Cart synced with server");
            {
                let mut state = self.state.borrow_mut();
                *state = server;
                for (product_id, quantity) in replay {
                    state.set(product_id, quantity);
                }
            }
            self.save();
            self.render();
            return true;
        }

        warn!(attempts = SYNC_ATTEMPTS, "Cart kept changing during sync; keeping local state");
        false
    }

    /// Add `quantity` units once the server confirms.
    pub async fn add_item(&self, product_id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            warn!(product_id = %product_id, "Refusing to add zero quantity");
            self.notifier.notify(MSG_ADD_FAILED, NotificationKind::Error);
            return false;
        }

        let ticket = self.sequencer.borrow_mut().issue_mutation();

        if let Err(e) = self.backend.add_item(&product_id, quantity).await {
            error!(product_id = %product_id, quantity, error = %e, "Error adding item to cart");
            self.notifier.notify(MSG_ADD_FAILED, NotificationKind::Error);
            return false;
        }

        let (stale, predates_sync) = {
            let mut sequencer = self.sequencer.borrow_mut();
            sequencer.confirm_mutation();
            (
                sequencer.is_stale(&product_id, ticket),
                sequencer.predates_sync(ticket),
            )
        };

        if stale {
            debug!(product_id = %product_id, "Add confirmed after a newer reset; keeping local state");
            self.notifier.notify(MSG_ADDED, NotificationKind::Success);
            return true;
        }

        if predates_sync {
            // The applied snapshot may or may not contain this add.
            debug!(product_id = %product_id, "Add confirmed after a newer snapshot; syncing again");
            self.sync_with_server().await;
            self.notifier.notify(MSG_ADDED, NotificationKind::Success);
            return true;
        }

        let added = self.state.borrow_mut().add(product_id.clone(), quantity);
        match added {
            Ok(new_quantity) => {
                debug!(product_id = %product_id, quantity = new_quantity, "Item added to cart");
                self.save();
                self.render();
                self.notifier.notify(MSG_ADDED, NotificationKind::Success);
                true
            }
            Err(e) => {
                error!(product_id = %product_id, error = %e, "Could not apply confirmed add");
                self.notifier.notify(MSG_ADD_FAILED, NotificationKind::Error);
                false
            }
        }
    }

    /// Remove a product once the server confirms.
    ///
    /// Returns whether a local entry was removed. A product that is not in
    /// the local cart never produces a notification.
    pub async fn remove_item(&self, product_id: &ProductId) -> bool {
        let ticket = self.sequencer.borrow_mut().issue_mutation();

        if let Err(e) = self.backend.remove_item(product_id).await {
            error!(product_id = %product_id, error = %e, "Error removing item from cart");
            if self.state.borrow().contains(product_id) {
                self.notifier
                    .notify(MSG_REMOVE_FAILED, NotificationKind::Error);
            }
            return false;
        }

        {
            let mut sequencer = self.sequencer.borrow_mut();
            sequencer.confirm_mutation();
            if sequencer.is_stale(product_id, ticket) {
                debug!(product_id = %product_id, "Discarding remove overtaken by a newer change");
                return false;
            }
            sequencer.mark_reset(product_id, ticket);
        }

        let removed = self.state.borrow_mut().remove(product_id).is_some();
        if removed {
            debug!(product_id = %product_id, "Item removed from cart");
            self.save();
            self.render();
            self.notifier.notify(MSG_REMOVED, NotificationKind::Warning);
        }
        removed
    }

    /// Set a quantity locally; zero or below removes the product through
    /// the server.
    ///
    /// Positive quantities are not sent to the server here; `commit_quantities`
    /// pushes them.
    pub async fn update_quantity(&self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(&product_id).await;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.sequencer
            .borrow_mut()
            .record_edit(&product_id, quantity);

        self.state.borrow_mut().set(product_id, quantity);
        self.save();
        self.render();
        true
    }

    /// Send every local quantity to `/update_cart`.
    ///
    /// On success the page is expected to reload.
    pub async fn commit_quantities(&self) -> bool {
        let snapshot = self.state.borrow().clone();

        match self.backend.update_cart(&snapshot).await {
            Ok(()) => {
                debug!(items = snapshot.len(), "Cart quantities committed");
                true
            }
            Err(e) => {
                error!(error = %e, "Error committing cart quantities");
                self.notifier
                    .notify(MSG_UPDATE_FAILED, NotificationKind::Error);
                false
            }
        }
    }

    /// Toggle a product on the shopper's wishlist.
    pub async fn toggle_wishlist(&self, product_id: &ProductId) -> Option<WishlistAction> {
        match self.backend.toggle_wishlist(product_id).await {
            Ok(action) => {
                let kind = match action {
                    WishlistAction::Added => NotificationKind::Success,
                    WishlistAction::Removed => NotificationKind::Info,
                };
                self.notifier.notify(action.message(), kind);
                Some(action)
            }
            Err(e) => {
                error!(product_id = %product_id, error = %e, "Error toggling wishlist");
                self.notifier
                    .notify(MSG_WISHLIST_FAILED, NotificationKind::Error);
                None
            }
        }
    }

    /// Run a command. Returns whether it took effect.
    pub async fn dispatch(&self, command: CartCommand) -> bool {
        debug!(command = command.name(), "Dispatching cart command");
        match command {
            CartCommand::Add {
                product_id,
                quantity,
            } => self.add_item(product_id, quantity).await,
            CartCommand::Remove { product_id } => self.remove_item(&product_id).await,
            CartCommand::SetQuantity {
                product_id,
                quantity,
            } => self.update_quantity(product_id, quantity).await,
            CartCommand::Sync => self.sync_with_server().await,
            CartCommand::Commit => self.commit_quantities().await,
        }
    }

    /// Sum of all quantities.
    pub fn total_count(&self) -> u64 {
        self.state.borrow().total_count()
    }

    /// Quantity of one product.
    pub fn quantity(&self, product_id: &ProductId) -> Option<u32> {
        self.state.borrow().quantity(product_id)
    }

    /// Snapshot of the current mapping.
    pub fn state(&self) -> CartState {
        self.state.borrow().clone()
    }

    /// Current summary, as last rendered.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_state(&self.state.borrow())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn cache(&self) -> &Cache<S> {
        &self.cache
    }

    fn save(&self) {
        let state = self.state.borrow();
        if let Err(e) = self.cache.set(&self.storage_key, &*state) {
            warn!(error = %e, key = %self.storage_key, "Failed to persist cart");
        }
    }

    fn render(&self) {
        let summary = self.summary();
        self.view.render(&summary);
    }
}
