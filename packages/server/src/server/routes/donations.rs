use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    Json,
};

use crate::common::InsertOutcome;
use crate::domains::donations::{actions, Donation, NewDonation};
use crate::server::app::AppState;
use crate::server::error::ApiError;

pub async fn list_donations_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Donation>>, ApiError> {
    Ok(Json(actions::list_donations(state.deps.store()).await?))
}

pub async fn add_donation_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<NewDonation>, JsonRejection>,
) -> Result<(StatusCode, Json<InsertOutcome>), ApiError> {
    let Json(input) = payload?;
    let outcome = actions::record_donation(state.deps.store(), input).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
