//! Dashboard Flows
//!
//! Network half of each dashboard operation. Each flow returns the single
//! [`CatalogChange`] to apply on success; failures are logged here and
//! handed back so callers can leave their state untouched.

use crate::catalog::CatalogChange;
use crate::client::FoodApi;
use crate::error::ApiResult;
use crate::models::{Dish, DishDraft};

/// Fetch the full list. No retry.
pub async fn load_dishes<A: FoodApi + ?Sized>(api: &A) -> ApiResult<CatalogChange> {
    match api.list_foods().await {
        Ok(dishes) => {
            log::info!("[DASHBOARD] Loaded {} dishes", dishes.len());
            Ok(CatalogChange::Replace(dishes))
        }
        Err(err) => {
            log::error!("[DASHBOARD] Failed to load dishes: {}", err);
            Err(err)
        }
    }
}

/// POST the draft as a new, available dish
pub async fn create_dish<A: FoodApi + ?Sized>(api: &A, draft: DishDraft) -> ApiResult<CatalogChange> {
    match api.create_food(&draft.into_new_dish()).await {
        Ok(created) => {
            log::info!("[DASHBOARD] Created dish {} ({})", created.id, created.name);
            Ok(CatalogChange::Append(created))
        }
        Err(err) => {
            log::error!("[DASHBOARD] Failed to create dish: {}", err);
            Err(err)
        }
    }
}

/// PUT the editing dish merged with the draft
pub async fn update_dish<A: FoodApi + ?Sized>(
    api: &A,
    editing: &Dish,
    draft: &DishDraft,
) -> ApiResult<CatalogChange> {
    put_dish(api, editing.merged_with(draft)).await
}

/// PUT the dish with its availability flipped
pub async fn toggle_available<A: FoodApi + ?Sized>(api: &A, dish: &Dish) -> ApiResult<CatalogChange> {
    put_dish(api, dish.with_availability(!dish.available)).await
}

async fn put_dish<A: FoodApi + ?Sized>(api: &A, dish: Dish) -> ApiResult<CatalogChange> {
    match api.update_food(&dish).await {
        Ok(updated) => {
            log::info!("[DASHBOARD] Updated dish {}", updated.id);
            Ok(CatalogChange::Update(updated))
        }
        Err(err) => {
            log::error!("[DASHBOARD] Failed to update dish {}: {}", dish.id, err);
            Err(err)
        }
    }
}

/// DELETE the dish. The removal is returned whatever the server says;
/// the request outcome comes alongside for logging only.
pub async fn delete_dish<A: FoodApi + ?Sized>(api: &A, id: u32) -> (CatalogChange, ApiResult<()>) {
    let result = api.delete_food(id).await;
    if let Err(err) = &result {
        match err.status() {
            Some(status) => log::warn!(
                "[DASHBOARD] Server refused delete of dish {} (status {}), removing locally anyway",
                id,
                status
            ),
            None => log::warn!("[DASHBOARD] Delete of dish {} failed, removing locally anyway: {}", id, err),
        }
    }
    (CatalogChange::Remove(id), result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryFoodApi;

    fn make_dish(id: u32, name: &str, available: bool) -> Dish {
        Dish {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            price: "19.90".to_string(),
            available,
            image: format!("https://example.com/{}.png", id),
        }
    }

    fn draft(name: &str, price: &str) -> DishDraft {
        DishDraft {
            name: name.to_string(),
            description: "Macarrão com vegetais".to_string(),
            price: price.to_string(),
            image: "https://example.com/new.png".to_string(),
        }
    }

    fn seeded() -> MemoryFoodApi {
        MemoryFoodApi::with_dishes(vec![
            make_dish(3, "Ao molho", true),
            make_dish(1, "Veggie", false),
            make_dish(2, "A la Camarón", true),
        ])
    }

    #[tokio::test]
    async fn test_load_keeps_server_order() {
        let api = seeded();
        let mut dishes = Vec::new();
        load_dishes(&api).await.unwrap().apply(&mut dishes);
        assert_eq!(dishes, api.dishes());
    }

    #[tokio::test]
    async fn test_load_failure_leaves_list_empty() {
        let api = seeded();
        api.fail_next();
        let mut dishes = Vec::new();
        if let Ok(change) = load_dishes(&api).await {
            change.apply(&mut dishes);
        }
        assert!(dishes.is_empty());
    }

    #[tokio::test]
    async fn test_create_appends_server_dish() {
        let api = seeded();
        let mut dishes = api.dishes();
        let before = dishes.clone();

        let change = create_dish(&api, draft("Nhoque", "22.00")).await.unwrap();
        change.apply(&mut dishes);

        assert_eq!(dishes.len(), before.len() + 1);
        assert_eq!(&dishes[..before.len()], &before[..]);
        let created = dishes.last().unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(created.name, "Nhoque");
        assert!(created.available);
        assert_eq!(api.requests(), vec!["POST /foods"]);
    }

    #[tokio::test]
    async fn test_create_failure_keeps_state() {
        let api = seeded();
        let before = api.dishes();
        api.fail_next();

        assert!(create_dish(&api, draft("Nhoque", "22.00")).await.is_err());
        assert_eq!(api.dishes(), before);
    }

    #[tokio::test]
    async fn test_update_replaces_only_matching_entry() {
        let api = seeded();
        let mut dishes = api.dishes();
        let editing = dishes[1].clone();

        let change = update_dish(&api, &editing, &draft("Veggie Plus", "25.00")).await.unwrap();
        change.apply(&mut dishes);

        assert_eq!(dishes.iter().map(|d| d.id).collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(dishes[1].name, "Veggie Plus");
        assert_eq!(dishes[1].price, "25.00");
        assert!(!dishes[1].available);
        assert_eq!(dishes[0], api.dishes()[0]);
        assert_eq!(dishes[2], api.dishes()[2]);
        assert_eq!(api.requests(), vec!["PUT /foods/1"]);
    }

    #[tokio::test]
    async fn test_update_failure_keeps_state() {
        let api = seeded();
        let dishes = api.dishes();
        api.fail_next();
        assert!(update_dish(&api, &dishes[0], &draft("X", "1.00")).await.is_err());
        assert_eq!(api.dishes(), dishes);
    }

    #[tokio::test]
    async fn test_toggle_available_flips_flag() {
        let api = seeded();
        let mut dishes = api.dishes();

        toggle_available(&api, &dishes[1]).await.unwrap().apply(&mut dishes);
        assert!(dishes[1].available);

        toggle_available(&api, &dishes[1]).await.unwrap().apply(&mut dishes);
        assert!(!dishes[1].available);
        assert_eq!(api.requests(), vec!["PUT /foods/1", "PUT /foods/1"]);
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let api = seeded();
        let mut dishes = api.dishes();

        let (change, result) = delete_dish(&api, 3).await;
        assert!(result.is_ok());
        change.apply(&mut dishes);

        assert!(dishes.iter().all(|d| d.id != 3));
        assert_eq!(dishes.len(), 2);
        assert_eq!(api.requests(), vec!["DELETE /foods/3"]);
    }

    #[tokio::test]
    async fn test_delete_removes_entry_even_when_request_fails() {
        let api = seeded();
        let mut dishes = api.dishes();
        api.fail_next();

        let (change, result) = delete_dish(&api, 2).await;
        assert_eq!(result.unwrap_err().status(), Some(500));
        change.apply(&mut dishes);

        assert!(dishes.iter().all(|d| d.id != 2));
        assert_eq!(api.dishes().len(), 3);
    }
}
