//! In-memory `FoodApi` for tests
//!
//! Behaves like the json-server backend: ids are assigned on POST as one
//! past the highest existing id, PUT replaces by id, DELETE removes.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::client::{food_path, FoodApi, FOODS_PATH};
use crate::error::{ApiError, ApiResult};
use crate::models::{Dish, NewDish};

#[derive(Debug, Default)]
pub struct MemoryFoodApi {
    dishes: RefCell<Vec<Dish>>,
    requests: RefCell<Vec<String>>,
    fail_next: Cell<bool>,
}

impl MemoryFoodApi {
    pub fn with_dishes(dishes: Vec<Dish>) -> Self {
        Self {
            dishes: RefCell::new(dishes),
            ..Default::default()
        }
    }

    /// Server-side state
    pub fn dishes(&self) -> Vec<Dish> {
        self.dishes.borrow().clone()
    }

    /// Requests seen so far, as `METHOD /path`
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Make the next request fail with a 500 without touching state
    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    fn record(&self, method: &str, path: &str) -> ApiResult<()> {
        self.requests.borrow_mut().push(format!("{} {}", method, path));
        if self.fail_next.replace(false) {
            return Err(ApiError::Status {
                url: path.to_string(),
                status: 500,
            });
        }
        Ok(())
    }

    fn not_found(path: String) -> ApiError {
        ApiError::Status { url: path, status: 404 }
    }
}

#[async_trait(?Send)]
impl FoodApi for MemoryFoodApi {
    async fn list_foods(&self) -> ApiResult<Vec<Dish>> {
        self.record("GET", FOODS_PATH)?;
        Ok(self.dishes())
    }

    async fn create_food(&self, dish: &NewDish) -> ApiResult<Dish> {
        self.record("POST", FOODS_PATH)?;
        let mut dishes = self.dishes.borrow_mut();
        let id = dishes.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        let created = Dish {
            id,
            name: dish.name.clone(),
            description: dish.description.clone(),
            price: dish.price.clone(),
            available: dish.available,
            image: dish.image.clone(),
        };
        dishes.push(created.clone());
        Ok(created)
    }

    async fn update_food(&self, dish: &Dish) -> ApiResult<Dish> {
        let path = food_path(dish.id);
        self.record("PUT", &path)?;
        let mut dishes = self.dishes.borrow_mut();
        let slot = dishes
            .iter_mut()
            .find(|d| d.id == dish.id)
            .ok_or_else(|| Self::not_found(path))?;
        *slot = dish.clone();
        Ok(dish.clone())
    }

    async fn delete_food(&self, id: u32) -> ApiResult<()> {
        let path = food_path(id);
        self.record("DELETE", &path)?;
        let mut dishes = self.dishes.borrow_mut();
        let before = dishes.len();
        dishes.retain(|d| d.id != id);
        if dishes.len() == before {
            return Err(Self::not_found(path));
        }
        Ok(())
    }
}
