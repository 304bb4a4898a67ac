//! Catalog Models
//!
//! Data structures matching the food service's JSON bodies.

use serde::{Deserialize, Serialize};

/// A menu item as stored server-side
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dish {
    /// Server-assigned identifier
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Decimal kept as text, exactly as typed in the form
    pub price: String,
    pub available: bool,
    /// Image URL
    pub image: String,
}

impl Dish {
    /// The update payload: this dish with the draft's fields laid over it.
    /// `id` and `available` are kept.
    pub fn merged_with(&self, draft: &DishDraft) -> Dish {
        Dish {
            id: self.id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price.clone(),
            available: self.available,
            image: draft.image.clone(),
        }
    }

    /// Copy of this dish with a different availability
    pub fn with_availability(&self, available: bool) -> Dish {
        Dish {
            available,
            ..self.clone()
        }
    }
}

/// Field set collected by the add/edit forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl DishDraft {
    /// The create payload; new dishes always start available
    pub fn into_new_dish(self) -> NewDish {
        NewDish {
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            available: true,
        }
    }
}

impl From<&Dish> for DishDraft {
    fn from(dish: &Dish) -> Self {
        Self {
            name: dish.name.clone(),
            description: dish.description.clone(),
            price: dish.price.clone(),
            image: dish.image.clone(),
        }
    }
}

/// Body of `POST /foods`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDish {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub available: bool,
}
