//! Form Input Component
//!
//! Labeled text field bound into the enclosing `FormContext` by field.

use leptos::prelude::*;

use crate::components::dish_form::{use_form_context, DishField};

#[component]
pub fn Input(
    field: DishField,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let form = use_form_context();
    let name = field.as_str();

    view! {
        <div class="input-field">
            {label.map(|text| view! { <label for=name>{text}</label> })}
            <input
                type="text"
                id=name
                name=name
                placeholder=placeholder
                prop:value=move || form.value(field)
                on:input=move |ev| form.set_value(field, event_target_value(&ev))
            />
        </div>
    }
}
