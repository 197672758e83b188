//! Thin bindings to browser APIs.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;

use artisan_cache::{CacheError, SessionStore};
use leptos::prelude::{document, window};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, ScrollBehavior, ScrollIntoViewOptions,
};

/// Milliseconds since the epoch, from the JS clock.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Origin the page was served from, e.g. `https://shop.example`.
pub fn origin() -> Option<String> {
    window().location().origin().ok()
}

pub fn reload() {
    if let Err(err) = window().location().reload() {
        tracing::warn!(error = ?err, "Page reload failed");
    }
}

/// `window.confirm`. A blocked dialog counts as cancelled.
pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

/// Smoothly scroll the element with `id` into view. Returns `false` when no
/// such element exists.
pub fn scroll_to(id: &str) -> bool {
    let Some(target) = document().get_element_by_id(id) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Nearest ancestor of the event target (itself included) matching
/// `selector`.
pub fn closest(target: Option<web_sys::EventTarget>, selector: &str) -> Option<Element> {
    target?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// Attribute tying a watched element to its callback.
const WATCH_KEY: &str = "data-watch-key";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// First-sight callbacks by watch key. Each one is released once taken.
#[derive(Default)]
struct Pending {
    callbacks: HashMap<String, Box<dyn FnOnce()>>,
}

impl Pending {
    fn insert(&mut self, key: &str, on_visible: Box<dyn FnOnce()>) {
        self.callbacks.insert(key.to_string(), on_visible);
    }

    fn take(&mut self, key: &str) -> Option<Box<dyn FnOnce()>> {
        self.callbacks.remove(key)
    }

    fn len(&self) -> usize {
        self.callbacks.len()
    }

    fn clear(&mut self) {
        self.callbacks.clear();
    }
}

/// Runs a callback the first time each watched element enters the
/// viewport, through a single `IntersectionObserver`.
///
/// Dropping the watcher disconnects the observer and releases every
/// callback still waiting. Without `IntersectionObserver` support
/// callbacks run at once.
pub struct VisibilityWatcher {
    pending: Rc<RefCell<Pending>>,
    observer: Option<(IntersectionObserver, ObserverCallback)>,
}

impl VisibilityWatcher {
    pub fn new() -> Self {
        let pending = Rc::new(RefCell::new(Pending::default()));
        let fire = Rc::clone(&pending);

        let callback = ObserverCallback::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    let key = target.get_attribute(WATCH_KEY).unwrap_or_default();
                    let on_visible = fire.borrow_mut().take(&key);
                    if let Some(on_visible) = on_visible {
                        on_visible();
                    }
                }
            },
        );

        let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => Some((observer, callback)),
            Err(err) => {
                tracing::warn!(error = ?err, "IntersectionObserver unavailable, revealing at once");
                None
            }
        };
        Self { pending, observer }
    }

    /// Run `on_visible` once `element` first enters the viewport. `key`
    /// must be unique among the elements of this watcher.
    pub fn watch(&self, element: &Element, key: &str, on_visible: impl FnOnce() + 'static) {
        let Some((observer, _)) = &self.observer else {
            on_visible();
            return;
        };
        if let Err(err) = element.set_attribute(WATCH_KEY, key) {
            tracing::warn!(error = ?err, key, "Cannot tag element, revealing at once");
            on_visible();
            return;
        }
        self.pending.borrow_mut().insert(key, Box::new(on_visible));
        observer.observe(element);
    }

    /// Elements still waiting to be seen.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn disconnect(&self) {
        if let Some((observer, _)) = &self.observer {
            observer.disconnect();
        }
        self.pending.borrow_mut().clear();
    }
}

impl Default for VisibilityWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// `window.sessionStorage` as a cart mirror.
#[derive(Clone)]
pub struct SessionStorage {
    storage: Option<web_sys::Storage>,
}

impl SessionStorage {
    /// Open the page's session storage. Private browsing modes may deny
    /// it, in which case every access fails with `Unavailable`.
    pub fn open() -> Self {
        let storage = window().session_storage().ok().flatten();
        if storage.is_none() {
            tracing::warn!("sessionStorage unavailable, cart will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, CacheError> {
        self.storage
            .as_ref()
            .ok_or_else(|| CacheError::Unavailable("sessionStorage".to_string()))
    }
}

fn store_error(err: JsValue) -> CacheError {
    CacheError::StoreError(format!("{err:?}"))
}

impl SessionStore for SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.storage()?.get_item(key).map_err(store_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.storage()?.set_item(key, value).map_err(store_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), CacheError> {
        self.storage()?.remove_item(key).map_err(store_error)
    }
}

/// Log line sink for the tracing subscriber: buffers one formatted event
/// and hands it to `console.log` when dropped.
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf);
            web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_pending_fires_each_callback_once() {
        let fired = Rc::new(Cell::new(0));
        let mut pending = Pending::default();
        for key in ["mug", "bowl"] {
            let fired = Rc::clone(&fired);
            pending.insert(key, Box::new(move || fired.set(fired.get() + 1)));
        }
        assert_eq!(pending.len(), 2);

        if let Some(on_visible) = pending.take("mug") {
            on_visible();
        }
        assert!(pending.take("mug").is_none());
        assert!(pending.take("unknown").is_none());
        assert_eq!(fired.get(), 1);
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn test_pending_releases_callbacks() {
        let captured = Rc::new(());
        let mut pending = Pending::default();
        for key in ["mug", "bowl", "throw"] {
            let captured = Rc::clone(&captured);
            pending.insert(key, Box::new(move || drop(captured)));
        }
        assert_eq!(Rc::strong_count(&captured), 4);

        if let Some(on_visible) = pending.take("mug") {
            on_visible();
        }
        assert_eq!(Rc::strong_count(&captured), 3);

        pending.clear();
        assert_eq!(pending.len(), 0);
        assert_eq!(Rc::strong_count(&captured), 1);
    }
}
