//! Labeled form input bound to a string signal.

use leptos::prelude::*;

/// Single labeled input used by the login and registration forms.
/// Disabled while the owning form has a submission in flight.
#[component]
pub fn TextField(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    busy: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || busy.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
