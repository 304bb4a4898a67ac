//! Food Card Component
//!
//! One dish with edit/delete buttons and an availability switch.

use leptos::prelude::*;

use food_api::Dish;

/// Text shown next to the availability switch
pub fn availability_label(available: bool) -> &'static str {
    if available {
        "Disponível"
    } else {
        "Indisponível"
    }
}

#[component]
pub fn FoodCard(
    dish: Dish,
    #[prop(into)] on_edit: Callback<Dish>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_toggle_available: Callback<Dish>,
) -> impl IntoView {
    let id = dish.id;
    let available = dish.available;
    let for_edit = dish.clone();
    let for_toggle = dish.clone();

    view! {
        <div class={if available { "food-card" } else { "food-card unavailable" }}>
            <header>
                <img src={dish.image.clone()} alt={dish.name.clone()} />
            </header>
            <section class="body">
                <h2>{dish.name.clone()}</h2>
                <p>{dish.description.clone()}</p>
                <p class="price">"R$ " <b>{dish.price.clone()}</b></p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon"
                        data-testid={format!("edit-food-{}", id)}
                        on:click=move |_| on_edit.run(for_edit.clone())
                    >
                        "✎"
                    </button>
                    <button
                        type="button"
                        class="icon"
                        data-testid={format!("remove-food-{}", id)}
                        on:click=move |_| on_delete.run(id)
                    >
                        "🗑"
                    </button>
                </div>
                <div class="availability-container">
                    <p>{availability_label(available)}</p>
                    <label class="switch" data-testid={format!("change-status-food-{}", id)}>
                        <input
                            type="checkbox"
                            checked=available
                            on:change=move |_| on_toggle_available.run(for_toggle.clone())
                        />
                        <span class="slider" />
                    </label>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_label() {
        assert_eq!(availability_label(true), "Disponível");
        assert_eq!(availability_label(false), "Indisponível");
    }
}
