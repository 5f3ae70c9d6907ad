//! Labeled text input with an inline error slot.

use leptos::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, default = "text".into())] input_type: Signal<&'static str>,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <label class="text-field">
            <span class="text-field__label">{label}</span>
            <input
                class="text-field__input"
                class=("text-field__input--invalid", move || error.get().is_some())
                type=move || input_type.get()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                error
                    .get()
                    .map(|message| view! { <span class="text-field__error">{message}</span> })
            }}
        </label>
    }
}
