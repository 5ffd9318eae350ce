use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    Json,
};

use crate::common::{DeleteOutcome, FoodRequestId, InsertOutcome};
use crate::domains::food_requests::{
    actions, submit_request, withdraw_request, FoodRequest, RequestListQuery, SubmitFoodRequest,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

pub async fn add_food_request_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<SubmitFoodRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InsertOutcome>), ApiError> {
    let Json(input) = payload?;
    let outcome = submit_request(state.deps.store(), input).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Requests on the caller's listings, or made by the caller with `role=requester`
pub async fn food_requests_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    query: Result<Query<RequestListQuery>, QueryRejection>,
) -> Result<Json<Vec<FoodRequest>>, ApiError> {
    let Query(RequestListQuery { email, role }) = query?;
    user.actor().must_own(&email)?;

    Ok(Json(actions::list_requests(state.deps.store(), &email, role).await?))
}

pub async fn withdraw_food_request_handler(
    Extension(state): Extension<AppState>,
    id: Result<Path<FoodRequestId>, PathRejection>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    let Path(id) = id?;
    Ok(Json(withdraw_request(state.deps.store(), id).await?))
}
