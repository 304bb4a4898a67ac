//! Edit-Dish Modal
//!
//! Same form as the add modal, pre-filled from the dish being edited.

use leptos::context::Provider;
use leptos::prelude::*;

use food_api::{Dish, DishDraft};

use crate::components::dish_form::{submit_and_close, DishField, DishForm, FormContext};
use crate::components::{Input, Modal};

#[component]
pub fn ModalEditFood(
    form: FormContext,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] editing_food: Signal<Option<Dish>>,
    #[prop(into)] handle_update_food: Callback<DishDraft>,
) -> impl IntoView {
    // Re-seed from the selected dish whenever the modal opens or the selection changes
    Effect::new(move |_| {
        if is_open.get() {
            let seed = editing_food
                .with(|dish| dish.as_ref().map(DishForm::prefilled))
                .unwrap_or_default();
            form.reset(seed);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_and_close(
            &form.snapshot(),
            |draft| handle_update_food.run(draft),
            || set_is_open.run(()),
        );
    };

    view! {
        <Provider value=form>
            <Modal is_open=is_open on_close=set_is_open>
                <form class="food-form" on:submit=on_submit>
                    <h1>"Editar Prato"</h1>
                    <Input field=DishField::Image placeholder="Cole o link aqui" label="URL da imagem" />

                    <Input field=DishField::Name placeholder="Ex: Moda Italiana" label="Nome do prato" />
                    <Input field=DishField::Price placeholder="Ex: 19.90" label="Preço" />

                    <Input field=DishField::Description placeholder="Descrição" label="Descrição do prato" />
                    <button type="submit" data-testid="edit-food-button">
                        <p class="text">"Editar Prato"</p>
                        <div class="icon">"✔"</div>
                    </button>
                </form>
            </Modal>
        </Provider>
    }
}
