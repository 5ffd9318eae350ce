//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::kernel::ServerDeps;
use crate::server::auth::SessionCookie;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: ServerDeps,
    pub session_cookie: SessionCookie,
}

/// Build the Axum application router
///
/// `allowed_origins` is the CORS allow-list; credentials are allowed so the
/// browser sends the session cookie cross-origin.
pub fn build_app(
    deps: ServerDeps,
    allowed_origins: &[String],
    session_cookie: SessionCookie,
) -> Router {
    let jwt_service = deps.jwt_service.clone();
    let app_state = AppState {
        deps,
        session_cookie,
    };

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        // Listings
        .route("/add-food", post(add_food_handler))
        .route("/all-available-foods", get(available_foods_handler))
        .route(
            "/food/:id",
            get(get_food_handler)
                .put(update_food_handler)
                .delete(delete_food_handler),
        )
        .route("/featured-foods", get(featured_foods_handler))
        .route("/top-donator", get(top_donator_handler))
        .route("/manageMyFood", get(manage_my_food_handler))
        // Request workflow
        .route("/addFoodRequest", post(add_food_request_handler))
        .route("/foodRequest", get(food_requests_handler))
        .route("/foodRequest/:id", delete(withdraw_food_request_handler))
        // Donations
        .route(
            "/donation",
            get(list_donations_handler).post(add_donation_handler),
        )
        // Session
        .route("/jwt", post(issue_session_handler))
        .route("/logout", post(logout_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
