//! Cart-facing components.

use artisan_commerce::cart::{CartCommand, QuantityStepper as Stepper, QUANTITY_FIELD_PREFIX};
use artisan_commerce::wishlist::WishlistAction;
use artisan_commerce::ProductId;
use std::time::Duration;

use artisan_ui::form::{ADDED_LABEL, ADDING_LABEL, REMOVING_LABEL, SUCCESS_HOLD_MS};
use artisan_ui::{format_price, ButtonLoading};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::catalog::Catalog;
use crate::context::{dispatch, use_cart, use_cart_signals, use_config};

const ADD_LABEL: &str = "Add to Cart";
const REMOVE_LABEL: &str = "Remove";
const REMOVE_CONFIRM: &str = "Are you sure you want to remove this item from your cart?";

/// Cart link with the item-count badge. The badge hides at zero and the
/// icon bounces after every change.
#[component]
pub fn CartBadge() -> impl IntoView {
    let signals = use_cart_signals();
    let class = move || {
        if signals.bouncing.get() {
            "cart-link cart-bounce"
        } else {
            "cart-link"
        }
    };

    view! {
        <a href="/cart" class=class>
            "Cart"
            <Show when=move || signals.summary.with(|s| s.badge.is_visible())>
                <span class="cart-count badge">
                    {move || signals.summary.with(|s| s.badge.text().unwrap_or_default())}
                </span>
            </Show>
        </a>
    }
}

/// `.add-to-cart-form`: quantity stepper plus submit button.
#[component]
pub fn AddToCartForm(product_id: ProductId, #[prop(optional)] max: Option<u32>) -> impl IntoView {
    let config = use_config();
    let cart = use_cart();
    let max = max.unwrap_or(config.cart.max_quantity);
    let stepper = RwSignal::new(Stepper::new(Stepper::MIN, max));
    let button = RwSignal::new(ButtonLoading::new());
    let label = RwSignal::new(ADD_LABEL.to_string());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut loading = None;
        button.update(|b| loading = b.begin(&label.get_untracked(), ADDING_LABEL));
        let Some(loading) = loading else {
            return;
        };

        let quantity = stepper.get_untracked().value().to_string();
        let fields = [("product_id", product_id.as_str()), ("quantity", quantity.as_str())];
        let command = match CartCommand::from_add_form(fields) {
            Ok(command) => command,
            Err(err) => {
                tracing::warn!(error = %err, "Rejected add-to-cart form");
                button.update(|b| {
                    b.finish();
                });
                return;
            }
        };

        label.set(loading);
        let store = cart.get_value();
        spawn_local(async move {
            let added = store.dispatch(command).await;
            let success = if added {
                button.try_update(|b| b.succeed(ADDED_LABEL)).flatten()
            } else {
                None
            };
            match success {
                Some(success) => {
                    label.try_set(success);
                    set_timeout(
                        move || restore_button(button, label),
                        Duration::from_millis(SUCCESS_HOLD_MS),
                    );
                }
                None => restore_button(button, label),
            }
        });
    };

    view! {
        <form class="add-to-cart-form" on:submit=on_submit>
            <StepperControls stepper=stepper on_change=|_: u32| {}/>
            <button
                type="submit"
                class=move || {
                    if button.with(|b| b.is_success()) {
                        "btn btn-primary btn-success"
                    } else {
                        "btn btn-primary"
                    }
                }
                disabled=move || button.with(|b| b.is_loading())
            >
                {move || label.get()}
            </button>
        </form>
    }
}

/// Leave the loading or success state. The button may be gone by now.
fn restore_button(button: RwSignal<ButtonLoading>, label: RwSignal<String>) {
    if let Some(original) = button.try_update(|b| b.finish()).flatten() {
        label.try_set(original);
    }
}

/// Decrease/increase buttons around a numeric input.
#[component]
fn StepperControls(
    stepper: RwSignal<Stepper>,
    #[prop(into)] on_change: Callback<u32>,
    #[prop(optional, into)] name: Option<String>,
) -> impl IntoView {
    let step = move |f: fn(&mut Stepper) -> Option<u32>| {
        let mut changed = None;
        stepper.update(|s| changed = f(s));
        if let Some(value) = changed {
            on_change.run(value);
        }
    };

    let on_typed = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let typed = raw.trim().parse::<i64>().unwrap_or(0);
        let mut value = 0;
        stepper.update(|s| value = s.set(typed));
        on_change.run(value);
    };

    view! {
        <div class="input-group quantity-stepper">
            <button
                type="button"
                class="btn qty-decrease"
                disabled=move || !stepper.with(|s| s.can_decrease())
                on:click=move |_| step(Stepper::decrease)
            >
                "-"
            </button>
            <input
                type="number"
                class="form-control quantity-input"
                name=name.unwrap_or_else(|| "quantity".to_string())
                min=Stepper::MIN.to_string()
                max=move || stepper.with(|s| s.max()).to_string()
                prop:value=move || stepper.with(|s| s.value()).to_string()
                on:change=on_typed
            />
            <button
                type="button"
                class="btn qty-increase"
                disabled=move || !stepper.with(|s| s.can_increase())
                on:click=move |_| step(Stepper::increase)
            >
                "+"
            </button>
        </div>
    }
}

/// Stepper bound to a cart line. Edits stay local until the cart is
/// committed.
#[component]
pub fn QuantityStepper(product_id: ProductId, quantity: u32) -> impl IntoView {
    let config = use_config();
    let cart = use_cart();
    let name = format!("{QUANTITY_FIELD_PREFIX}{product_id}");
    let stepper = RwSignal::new(Stepper::new(quantity, config.cart.max_quantity));

    let field = name.clone();
    let on_change = move |value: u32| {
        if let Some(command) = CartCommand::from_quantity_input(&field, &value.to_string()) {
            dispatch(cart, command);
        }
    };

    view! { <StepperControls stepper=stepper on_change=on_change name=name/> }
}

/// The cart page body: one row per line, totals, and the update button.
#[component]
pub fn CartTable() -> impl IntoView {
    let cart = use_cart();
    let signals = use_cart_signals();
    let catalog = expect_context::<Catalog>();
    let committing = RwSignal::new(false);

    let rows = {
        let catalog = catalog.clone();
        move || {
            signals.summary.track();
            let state = cart.with_value(|c| c.state());
            state
                .iter()
                .map(|(id, quantity)| {
                    let product = catalog.product(id).cloned();
                    let name = product
                        .as_ref()
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| id.to_string());
                    let subtotal = product
                        .as_ref()
                        .map(|p| format_price(p.price_cents * i64::from(quantity)))
                        .unwrap_or_default();
                    let remove_id = id.clone();
                    let remove_button = RwSignal::new(ButtonLoading::new());
                    let remove_label = RwSignal::new(REMOVE_LABEL.to_string());
                    let on_remove = move |_| {
                        if remove_button.with_untracked(|b| b.is_loading())
                            || !browser::confirm(REMOVE_CONFIRM)
                        {
                            return;
                        }
                        let mut loading = None;
                        remove_button.update(|b| {
                            loading = b.begin(&remove_label.get_untracked(), REMOVING_LABEL)
                        });
                        let Some(loading) = loading else {
                            return;
                        };
                        remove_label.set(loading);

                        let store = cart.get_value();
                        let id = remove_id.clone();
                        spawn_local(async move {
                            store.remove_item(&id).await;
                            restore_button(remove_button, remove_label);
                        });
                    };
                    view! {
                        <tr class="cart-row" data-product-id=id.to_string()>
                            <td>{name}</td>
                            <td><QuantityStepper product_id=id.clone() quantity=quantity/></td>
                            <td class="subtotal">{subtotal}</td>
                            <td>
                                <button
                                    type="button"
                                    class="btn btn-link remove-from-cart"
                                    disabled=move || remove_button.with(|b| b.is_loading())
                                    on:click=on_remove
                                >
                                    {move || remove_label.get()}
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        }
    };

    let total = move || {
        signals.summary.track();
        let cents = cart.with_value(|c| {
            let state = c.state();
            catalog.total_cents(state.iter())
        });
        format_price(cents)
    };

    let on_commit = move |_| {
        if committing.get_untracked() {
            return;
        }
        committing.set(true);
        let store = cart.get_value();
        spawn_local(async move {
            if store.commit_quantities().await {
                browser::reload();
            }
            committing.set(false);
        });
    };

    view! {
        <Show
            when=move || signals.summary.with(|s| s.total_count > 0)
            fallback=|| view! {
                <p>"Your cart is empty."</p>
                <a href="/products">"Continue shopping"</a>
            }
        >
            <table class="table cart-table">
                <thead>
                    <tr><th>"Item"</th><th>"Quantity"</th><th>"Subtotal"</th><th></th></tr>
                </thead>
                <tbody>{rows.clone()}</tbody>
            </table>
            <div class="cart-total">
                <strong>"Total"</strong>
                <strong>{total.clone()}</strong>
            </div>
            <button
                type="button"
                class="btn btn-primary update-cart"
                disabled=move || committing.get()
                on:click=on_commit
            >
                {move || if committing.get() { "Updating..." } else { "Update Cart" }}
            </button>
        </Show>
    }
}

/// Heart toggle for the wishlist.
#[component]
pub fn WishlistButton(product_id: ProductId) -> impl IntoView {
    let cart = use_cart();
    let saved = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let store = cart.get_value();
        let id = product_id.clone();
        spawn_local(async move {
            if let Some(action) = store.toggle_wishlist(&id).await {
                saved.set(action == WishlistAction::Added);
            }
            busy.set(false);
        });
    };

    view! {
        <button
            type="button"
            class=move || if saved.get() { "btn wishlist-toggle active" } else { "btn wishlist-toggle" }
            disabled=move || busy.get()
            data-bs-toggle="tooltip"
            title="Save for later"
            on:click=on_click
        >
            {move || if saved.get() { "♥" } else { "♡" }}
        </button>
    }
}
