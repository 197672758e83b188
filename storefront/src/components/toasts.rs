use artisan_ui::{Toast, ToastQueue};
use leptos::prelude::*;

/// Renders the toast queue. Toasts leave on their timer or when closed.
#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.with(|queue| queue.iter().cloned().collect::<Vec<_>>())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.class()
                            role="alert"
                            style="top: 20px; right: 20px; z-index: 9999; min-width: 300px;"
                        >
                            {toast.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| toasts.update(|queue| {
                                    queue.dismiss(id);
                                })
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
