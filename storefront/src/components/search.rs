//! Debounced product search box.

use std::time::Duration;

use artisan_ui::SearchDebounce;
use leptos::ev::Event;
use leptos::prelude::*;

use crate::browser::now_ms;
use crate::context::use_config;

/// Search-as-you-type box. `query` only changes once typing has paused
/// and the text is long enough (or empty).
#[component]
pub fn SearchBox(query: RwSignal<String>) -> impl IntoView {
    let config = use_config();
    let debounce = RwSignal::new(SearchDebounce::new(&config.search));
    let text = RwSignal::new(String::new());

    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        text.set(value.clone());

        let now = now_ms();
        let mut deadline = now;
        debounce.update(|d| deadline = d.input(value, now));

        set_timeout(
            move || {
                let mut ready = None;
                debounce.update(|d| ready = d.poll(now_ms()));
                if let Some(ready) = ready {
                    tracing::debug!(query = %ready, "Search submitted");
                    query.set(ready);
                }
            },
            Duration::from_millis(deadline.saturating_sub(now)),
        );
    };

    let on_clear = move |_| {
        let mut cleared = String::new();
        debounce.update(|d| cleared = d.clear());
        text.set(cleared.clone());
        query.set(cleared);
    };

    view! {
        <form class="search-form" role="search" on:submit=|ev| ev.prevent_default()>
            <input
                type="search"
                class="form-control search-input"
                name="q"
                placeholder="Search products"
                prop:value=move || text.get()
                on:input=on_input
            />
            <Show when=move || text.with(|t| !t.is_empty())>
                <button type="button" class="btn clear-search" aria-label="Clear search" on:click=on_clear>
                    "×"
                </button>
            </Show>
        </form>
    }
}
