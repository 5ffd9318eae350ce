use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    Json,
};

use crate::common::{DeleteOutcome, FoodId, InsertOutcome, UpdateOutcome};
use crate::domains::foods::{actions, AvailableFoodsQuery, Food, FoodUpdate, NewFood, OwnerQuery};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

pub async fn add_food_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<NewFood>, JsonRejection>,
) -> Result<(StatusCode, Json<InsertOutcome>), ApiError> {
    let Json(input) = payload?;
    let outcome = actions::create_food(state.deps.store(), input).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

pub async fn available_foods_handler(
    Extension(state): Extension<AppState>,
    query: Result<Query<AvailableFoodsQuery>, QueryRejection>,
) -> Result<Json<Vec<Food>>, ApiError> {
    let Query(params) = query?;
    Ok(Json(actions::list_available(state.deps.store(), params).await?))
}

/// Responds with JSON `null` when the listing does not exist
pub async fn get_food_handler(
    Extension(state): Extension<AppState>,
    id: Result<Path<FoodId>, PathRejection>,
) -> Result<Json<Option<Food>>, ApiError> {
    let Path(id) = id?;
    Ok(Json(actions::get_food(state.deps.store(), id).await?))
}

pub async fn update_food_handler(
    Extension(state): Extension<AppState>,
    id: Result<Path<FoodId>, PathRejection>,
    payload: Result<Json<FoodUpdate>, JsonRejection>,
) -> Result<Json<UpdateOutcome>, ApiError> {
    let Path(id) = id?;
    let Json(update) = payload?;
    Ok(Json(actions::update_food(state.deps.store(), id, update).await?))
}

pub async fn delete_food_handler(
    Extension(state): Extension<AppState>,
    id: Result<Path<FoodId>, PathRejection>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    let Path(id) = id?;
    Ok(Json(actions::delete_food(state.deps.store(), id).await?))
}

pub async fn featured_foods_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Food>>, ApiError> {
    let foods = actions::list_featured(state.deps.store(), state.deps.quantity_sort).await?;
    Ok(Json(foods))
}

pub async fn top_donator_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Food>>, ApiError> {
    let foods = actions::list_top_donors(state.deps.store(), state.deps.quantity_sort).await?;
    Ok(Json(foods))
}

/// Listings owned by the signed-in donor
pub async fn manage_my_food_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    query: Result<Query<OwnerQuery>, QueryRejection>,
) -> Result<Json<Vec<Food>>, ApiError> {
    let Query(OwnerQuery { email }) = query?;
    user.actor().must_own(&email)?;

    Ok(Json(actions::list_owned(state.deps.store(), &email).await?))
}
