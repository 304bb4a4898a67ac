//! Dashboard Page
//!
//! Owns the dish list (through the store) and the two modals. Every mutation
//! is fire-and-forget: on success the server's answer is merged back into the
//! list, on failure the flow has already logged and nothing changes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use food_api::{create_dish, delete_dish, load_dishes, toggle_available, update_dish, Dish, DishDraft};

use crate::components::dish_form::{DishForm, FormContext};
use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::context::use_app_context;
use crate::store::{store_apply_change, use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (editing_food, set_editing_food) = signal::<Option<Dish>>(None);
    let (modal_open, set_modal_open) = signal(false);
    let (edit_modal_open, set_edit_modal_open) = signal(false);
    let add_form = FormContext::new(DishForm::default());
    let edit_form = FormContext::new(DishForm::default());

    // Load dishes on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            if let Ok(change) = load_dishes(&api).await {
                store_apply_change(&store, change);
            }
        });
    });

    let handle_add_food = move |draft: DishDraft| {
        let api = ctx.api();
        spawn_local(async move {
            if let Ok(change) = create_dish(&api, draft).await {
                store_apply_change(&store, change);
            }
        });
    };

    let handle_update_food = move |draft: DishDraft| {
        let Some(editing) = editing_food.get_untracked() else {
            log::warn!("[DASHBOARD] Edit submitted with no dish selected");
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            if let Ok(change) = update_dish(&api, &editing, &draft).await {
                store_apply_change(&store, change);
            }
        });
    };

    let handle_delete_food = move |id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            let (change, _) = delete_dish(&api, id).await;
            store_apply_change(&store, change);
        });
    };

    let handle_toggle_available = move |dish: Dish| {
        let api = ctx.api();
        spawn_local(async move {
            if let Ok(change) = toggle_available(&api, &dish).await {
                store_apply_change(&store, change);
            }
        });
    };

    let toggle_modal = move |_: ()| set_modal_open.update(|open| *open = !*open);
    let toggle_edit_modal = move |_: ()| set_edit_modal_open.update(|open| *open = !*open);

    let handle_edit_food = move |dish: Dish| {
        set_editing_food.set(Some(dish));
        set_edit_modal_open.set(true);
    };

    view! {
        <Header on_open_modal=toggle_modal />
        <ModalAddFood
            form=add_form
            is_open=modal_open
            set_is_open=toggle_modal
            handle_add_food=handle_add_food
        />
        <ModalEditFood
            form=edit_form
            is_open=edit_modal_open
            set_is_open=toggle_edit_modal
            editing_food=editing_food
            handle_update_food=handle_update_food
        />

        <div class="foods-container" data-testid="foods-list">
            // Whole dish as key so an edited or toggled dish re-renders its card
            <For
                each=move || store.dishes().get()
                key=|dish| dish.clone()
                children=move |dish| {
                    view! {
                        <FoodCard
                            dish=dish
                            on_edit=handle_edit_food
                            on_delete=handle_delete_food
                            on_toggle_available=handle_toggle_available
                        />
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use any_spawner::Executor;
    use leptos::prelude::*;

    use food_api::{Dish, DishDraft};

    use crate::components::dish_form::{DishField, DishForm, FormContext};
    use crate::components::{ModalAddFood, ModalEditFood};

    fn veggie() -> Dish {
        Dish {
            id: 2,
            name: "Veggie".to_string(),
            description: "Macarrão com pimentão".to_string(),
            price: "21.90".to_string(),
            available: true,
            image: "https://example.com/2.png".to_string(),
        }
    }

    fn run_effects() {
        let _ = Executor::init_futures_executor();
        Executor::poll_local();
    }

    #[test]
    fn test_open_modals_keep_their_own_forms() {
        // Effects spawn on construction, so the executor must exist first
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.with(|| {
            let add_form = FormContext::new(DishForm::default());
            let edit_form = FormContext::new(DishForm::default());
            add_form.set_value(DishField::Name, "left over".to_string());

            let _modals = view! {
                <ModalAddFood
                    form=add_form
                    is_open=true
                    set_is_open=|_: ()| {}
                    handle_add_food=|_: DishDraft| {}
                />
                <ModalEditFood
                    form=edit_form
                    is_open=true
                    set_is_open=|_: ()| {}
                    editing_food=Some(veggie())
                    handle_update_food=|_: DishDraft| {}
                />
            };
            run_effects();

            // Edit form is seeded from the selected dish, add form is blank
            assert_eq!(edit_form.snapshot(), DishForm::prefilled(&veggie()));
            assert_eq!(add_form.snapshot(), DishForm::default());

            // Forms are scoped to each modal's subtree, not the page
            assert!(use_context::<FormContext>().is_none());
        });
    }

    #[test]
    fn test_closed_edit_modal_does_not_seed() {
        // Effects spawn on construction, so the executor must exist first
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.with(|| {
            let edit_form = FormContext::new(DishForm::default());

            let _modal = view! {
                <ModalEditFood
                    form=edit_form
                    is_open=false
                    set_is_open=|_: ()| {}
                    editing_food=Some(veggie())
                    handle_update_food=|_: DishDraft| {}
                />
            };
            run_effects();

            assert_eq!(edit_form.snapshot(), DishForm::default());
        });
    }
}
