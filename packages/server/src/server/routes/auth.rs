use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::{header::SET_COOKIE, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::common::{validation, AuthError};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Body of `POST /jwt`
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub email: String,
}

/// Sign a session token for `email` and hand it back as an HTTP-only cookie
pub async fn issue_session_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(SessionRequest { email }) = payload?;
    let email = validation::email("email", &email)?;

    let token = state
        .deps
        .jwt_service
        .create_token(&email)
        .map_err(AuthError::InternalError)?;
    let cookie = set_cookie(state.session_cookie.issue(&token))?;

    info!(email = %email, "Session issued");
    Ok(([(SET_COOKIE, cookie)], Json(json!({ "success": true }))))
}

pub async fn logout_handler(
    Extension(state): Extension<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let cookie = set_cookie(state.session_cookie.clear())?;
    Ok(([(SET_COOKIE, cookie)], Json(json!({ "success": true }))))
}

fn set_cookie(value: String) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(&value)
        .map_err(|e| AuthError::InternalError(anyhow::anyhow!("invalid cookie header: {e}")).into())
}
