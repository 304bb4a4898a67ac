//! Food API
//!
//! Layered client for the food catalog REST service:
//! - models: wire entities (`Dish`, `DishDraft`, `NewDish`)
//! - client: HTTP wrapper and the `FoodApi` seam
//! - catalog: local list reconciliation
//! - dashboard: load/create/update/delete flows used by the UI

mod catalog;
mod client;
mod config;
mod dashboard;
mod error;
mod models;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use catalog::{append, remove_by_id, replace_all, replace_by_id, CatalogChange};
pub use client::{food_path, ApiClient, FoodApi, FOODS_PATH};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use dashboard::{create_dish, delete_dish, load_dishes, toggle_available, update_dish};
pub use error::{ApiError, ApiResult};
pub use models::{Dish, DishDraft, NewDish};
