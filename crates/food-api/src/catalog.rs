//! Catalog Reconciliation
//!
//! The locally held dish list. Every successful mutation maps to exactly one
//! [`CatalogChange`], and applying a change never leaves duplicate ids.

use crate::models::Dish;

/// One reconciliation step against the local list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogChange {
    /// Replace the whole list (load)
    Replace(Vec<Dish>),
    /// Append a dish the server just created
    Append(Dish),
    /// Swap the entry with the same id for the server's copy
    Update(Dish),
    /// Drop the entry with this id
    Remove(u32),
}

impl CatalogChange {
    pub fn apply(self, dishes: &mut Vec<Dish>) {
        match self {
            CatalogChange::Replace(loaded) => replace_all(dishes, loaded),
            CatalogChange::Append(dish) => append(dishes, dish),
            CatalogChange::Update(dish) => {
                replace_by_id(dishes, dish);
            }
            CatalogChange::Remove(id) => {
                remove_by_id(dishes, id);
            }
        }
    }
}

/// Replace local state wholesale, keeping server order
pub fn replace_all(dishes: &mut Vec<Dish>, loaded: Vec<Dish>) {
    *dishes = loaded;
}

/// Append at the end. An id that is already present is replaced in place.
pub fn append(dishes: &mut Vec<Dish>, dish: Dish) {
    if !replace_by_id(dishes, dish.clone()) {
        dishes.push(dish);
    }
}

/// Replace the entry with the same id; returns false when none matched
pub fn replace_by_id(dishes: &mut [Dish], updated: Dish) -> bool {
    match dishes.iter_mut().find(|dish| dish.id == updated.id) {
        Some(dish) => {
            *dish = updated;
            true
        }
        None => false,
    }
}

/// Remove the entry with this id; returns false when none matched
pub fn remove_by_id(dishes: &mut Vec<Dish>, id: u32) -> bool {
    let before = dishes.len();
    dishes.retain(|dish| dish.id != id);
    dishes.len() != before
}
