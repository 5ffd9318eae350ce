use crate::common::{Actor, AuthError};
use crate::domains::auth::JwtService;
use crate::server::auth::read_session_token;
use crate::server::error::ApiError;
use axum::{extract::FromRequestParts, http::request::Parts, middleware::Next, response::Response};
use std::sync::Arc;
use tracing::debug;

/// Authenticated user information from the session JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
}

impl AuthUser {
    pub fn actor(&self) -> Actor {
        Actor::new(self.email.clone())
    }
}

/// JWT authentication middleware
///
/// Reads the session cookie, verifies it, and adds AuthUser to request extensions.
/// If no token or invalid token, request continues without AuthUser (public access).
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_user = extract_auth_user(&request, &jwt_service);

    if let Some(user) = auth_user {
        debug!("Authenticated user: {}", user.email);
        request.extensions_mut().insert(user);
    } else {
        debug!("No valid authentication token");
    }

    next.run(request).await
}

/// Extract and verify the session token from request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthUser> {
    let token = read_session_token(request.headers())?;
    let claims = jwt_service.verify_token(&token).ok()?;

    Some(AuthUser {
        email: claims.email,
    })
}

/// Protected handlers take `AuthUser` as an argument. A request without a
/// session is rejected with 401; one whose cookie failed verification gets
/// the same status with an "invalid token" message.
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let error = if read_session_token(&parts.headers).is_some() {
            AuthError::InvalidToken
        } else {
            AuthError::AuthenticationRequired
        };
        Err(error.into())
    }
}
