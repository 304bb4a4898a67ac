//! Dish Form State
//!
//! Field values shared by the add/edit modals and their `Input`s.

use leptos::prelude::*;

use food_api::{Dish, DishDraft};

/// Named fields of the dish form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishField {
    Image,
    Name,
    Price,
    Description,
}

impl DishField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DishField::Image => "image",
            DishField::Name => "name",
            DishField::Price => "price",
            DishField::Description => "description",
        }
    }
}

/// Current text of every field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishForm {
    pub image: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl DishForm {
    /// Seed the form from an existing dish (edit modal)
    pub fn prefilled(dish: &Dish) -> Self {
        Self {
            image: dish.image.clone(),
            name: dish.name.clone(),
            price: dish.price.clone(),
            description: dish.description.clone(),
        }
    }

    pub fn value(&self, field: DishField) -> &str {
        match field {
            DishField::Image => &self.image,
            DishField::Name => &self.name,
            DishField::Price => &self.price,
            DishField::Description => &self.description,
        }
    }

    pub fn set_value(&mut self, field: DishField, value: String) {
        match field {
            DishField::Image => self.image = value,
            DishField::Name => self.name = value,
            DishField::Price => self.price = value,
            DishField::Description => self.description = value,
        }
    }

    pub fn to_draft(&self) -> DishDraft {
        DishDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            image: self.image.clone(),
        }
    }
}

/// Form context: `Input`s bind into it by field
#[derive(Clone, Copy)]
pub struct FormContext {
    values: RwSignal<DishForm>,
}

impl FormContext {
    pub fn new(initial: DishForm) -> Self {
        Self {
            values: RwSignal::new(initial),
        }
    }

    pub fn value(&self, field: DishField) -> String {
        self.values.with(|form| form.value(field).to_string())
    }

    pub fn set_value(&self, field: DishField, value: String) {
        self.values.update(|form| form.set_value(field, value));
    }

    pub fn reset(&self, form: DishForm) {
        self.values.set(form);
    }

    pub fn snapshot(&self) -> DishForm {
        self.values.get_untracked()
    }
}

/// Get the enclosing form's context
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}

/// Hand the collected draft to the submit handler once, then close.
/// Closing does not wait for (or depend on) the handler's request.
pub fn submit_and_close(form: &DishForm, on_submit: impl FnOnce(DishDraft), on_close: impl FnOnce()) {
    on_submit(form.to_draft());
    on_close();
}
