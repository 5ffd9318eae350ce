//! Listing operations invoked by the HTTP layer.

use tracing::info;

use super::{
    AvailableFoodsQuery, Food, FoodQuery, FoodUpdate, NewFood, SortDirection, FEATURED_LIMIT,
    TOP_DONOR_LIMIT,
};
use crate::common::{DeleteOutcome, DomainError, FoodId, InsertOutcome, UpdateOutcome};
use crate::kernel::BaseFoodStore;

pub async fn create_food(store: &dyn BaseFoodStore, input: NewFood) -> Result<InsertOutcome, DomainError> {
    let food = Food::from_new(input.validate()?);
    store.insert_food(&food).await?;

    info!(food_id = %food.id, donor = %food.donor_email, "Food listing created");
    Ok(InsertOutcome::new(food.id))
}

/// Missing listings yield `None`, not an error.
pub async fn get_food(store: &dyn BaseFoodStore, id: FoodId) -> Result<Option<Food>, DomainError> {
    Ok(store.find_food(id).await?)
}

pub async fn update_food(
    store: &dyn BaseFoodStore,
    id: FoodId,
    update: FoodUpdate,
) -> Result<UpdateOutcome, DomainError> {
    let update = update.validate()?;
    let matched = store.update_food(id, &update).await?;

    info!(food_id = %id, matched, "Food listing updated");
    Ok(UpdateOutcome::matched(matched))
}

/// Deleting a listing also removes the requests made against it.
pub async fn delete_food(store: &dyn BaseFoodStore, id: FoodId) -> Result<DeleteOutcome, DomainError> {
    let deleted = store.delete_food(id).await?;

    info!(food_id = %id, deleted, "Food listing deleted");
    Ok(DeleteOutcome::deleted(deleted))
}

pub async fn list_available(
    store: &dyn BaseFoodStore,
    params: AvailableFoodsQuery,
) -> Result<Vec<Food>, DomainError> {
    let query = params.into_food_query()?;
    Ok(store.query_foods(&query).await?)
}

/// Every listing donated by `email`, whatever its status
pub async fn list_owned(store: &dyn BaseFoodStore, email: &str) -> Result<Vec<Food>, DomainError> {
    Ok(store.query_foods(&FoodQuery::owned_by(email.trim())).await?)
}

pub async fn list_featured(
    store: &dyn BaseFoodStore,
    direction: SortDirection,
) -> Result<Vec<Food>, DomainError> {
    Ok(store
        .query_foods(&FoodQuery::by_quantity(direction, FEATURED_LIMIT))
        .await?)
}

pub async fn list_top_donors(
    store: &dyn BaseFoodStore,
    direction: SortDirection,
) -> Result<Vec<Food>, DomainError> {
    Ok(store
        .query_foods(&FoodQuery::by_quantity(direction, TOP_DONOR_LIMIT))
        .await?)
}
