use artisan_ui::form::LOADING_LABEL;
use artisan_ui::{ButtonLoading, FormValidator};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// One input of a `ValidatedForm`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    pub required: bool,
}

impl FormField {
    pub const fn required(name: &'static str, label: &'static str, kind: &'static str) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: &'static str) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }
}

/// `.needs-validation` form that posts natively to `action` once every
/// required field is filled, showing a loading label meanwhile.
#[component]
pub fn ValidatedForm(
    action: &'static str,
    fields: Vec<FormField>,
    #[prop(default = "Submit")] submit_label: &'static str,
) -> impl IntoView {
    let validator = RwSignal::new(FormValidator::new(
        fields.iter().filter(|f| f.required).map(|f| f.name),
    ));
    let values = fields
        .iter()
        .map(|f| (f.name, RwSignal::new(String::new())))
        .collect::<Vec<_>>();
    let missing = RwSignal::new(Vec::<String>::new());
    let button = RwSignal::new(ButtonLoading::new());
    let label = RwSignal::new(submit_label.to_string());

    let on_submit = {
        let values = values.clone();
        move |ev: SubmitEvent| {
            let current: Vec<(&str, String)> =
                values.iter().map(|(name, value)| (*name, value.get_untracked())).collect();

            let mut result = Ok(());
            validator.update(|v| {
                result = v.validate(current.iter().map(|(name, value)| (*name, value.as_str())));
            });

            match result {
                Ok(()) => {
                    missing.set(Vec::new());
                    let mut loading = None;
                    button.update(|b| loading = b.begin(&label.get_untracked(), LOADING_LABEL));
                    match loading {
                        Some(loading) => label.set(loading),
                        // Already submitting.
                        None => ev.prevent_default(),
                    }
                }
                Err(names) => {
                    ev.prevent_default();
                    ev.stop_propagation();
                    missing.set(names);
                }
            }
        }
    };

    view! {
        <form
            action=action
            method="post"
            novalidate=true
            class=move || validator.with(|v| v.class())
            on:submit=on_submit
        >
            {fields
                .into_iter()
                .zip(values)
                .map(|(field, (name, value))| {
                    let invalid = move || missing.with(|m| m.iter().any(|n| n == name));
                    view! {
                        <div class="mb-3">
                            <label class="form-label" for=name>{field.label}</label>
                            <input
                                id=name
                                name=name
                                type=field.kind
                                class=move || if invalid() { "form-control is-invalid" } else { "form-control" }
                                required=field.required
                                prop:value=move || value.get()
                                on:input=move |ev| value.set(event_target_value(&ev))
                            />
                            <Show when=invalid>
                                <div class="invalid-feedback">"This field is required."</div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || button.with(|b| b.is_loading())
            >
                {move || label.get()}
            </button>
        </form>
    }
}
