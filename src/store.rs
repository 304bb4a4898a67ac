//! Dish Store
//!
//! Uses Leptos reactive_stores so the list re-renders field by field.

use leptos::prelude::*;
use reactive_stores::Store;

use food_api::{CatalogChange, Dish};

/// Authoritative in-memory state of the dashboard
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Dishes in server order, then append order
    pub dishes: Vec<Dish>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply one reconciliation step to the dish list
pub fn store_apply_change(store: &AppStore, change: CatalogChange) {
    change.apply(&mut store.dishes().write());
}
