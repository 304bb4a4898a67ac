//! Add-Dish Modal
//!
//! Collects a new dish and hands it to the caller's handler.

use leptos::context::Provider;
use leptos::prelude::*;

use food_api::DishDraft;

use crate::components::dish_form::{submit_and_close, DishField, DishForm, FormContext};
use crate::components::{Input, Modal};

/// `form` is provided only to this modal's subtree, so its `Input`s never
/// bind to a sibling modal's form.
#[component]
pub fn ModalAddFood(
    form: FormContext,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] handle_add_food: Callback<DishDraft>,
) -> impl IntoView {
    // Start from a blank form on every open
    Effect::new(move |_| {
        if is_open.get() {
            form.reset(DishForm::default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_and_close(
            &form.snapshot(),
            |draft| handle_add_food.run(draft),
            || set_is_open.run(()),
        );
    };

    view! {
        <Provider value=form>
            <Modal is_open=is_open on_close=set_is_open>
                <form class="food-form" on:submit=on_submit>
                    <h1>"Novo Prato"</h1>
                    <Input field=DishField::Image placeholder="Cole o link aqui" label="URL da imagem" />

                    <Input field=DishField::Name placeholder="Ex: Moda Italiana" label="Nome do prato" />
                    <Input field=DishField::Price placeholder="Ex: 19.90" label="Preço" />

                    <Input field=DishField::Description placeholder="Descrição" label="Descrição do prato" />
                    <button type="submit" data-testid="add-food-button">
                        <p class="text">"Adicionar Prato"</p>
                        <div class="icon">"✔"</div>
                    </button>
                </form>
            </Modal>
        </Provider>
    }
}
