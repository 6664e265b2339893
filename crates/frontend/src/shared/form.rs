//! Small form building blocks shared by the details modals
use contracts::shared::validation::{validate, FieldRule, FieldValues};
use leptos::prelude::*;

/// Messages for the validation modal, ordered by the rules' field priority
pub fn validation_messages<T: FieldValues>(form: &T, rules: &[FieldRule]) -> Vec<String> {
    validate(form, rules).into_iter().map(|e| e.message).collect()
}

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div class="form-group">
            <label for=id.clone()>
                {label}
                {required.then_some(view! { <span class="required">" *"</span> })}
            </label>
            <input
                type=input_type
                id=id
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <textarea
                id=id
                rows="3"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
