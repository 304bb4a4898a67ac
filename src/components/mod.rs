//! UI Components
//!
//! Reusable Leptos components.

pub mod dish_form;
mod food_card;
mod header;
mod input;
mod modal;
mod modal_add_food;
mod modal_edit_food;

pub use food_card::FoodCard;
pub use header::Header;
pub use input::Input;
pub use modal::Modal;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
