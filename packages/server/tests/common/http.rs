//! In-process HTTP client for the axum router.
//!
//! Requests go through the full middleware stack (CORS, session cookie,
//! extractors) via `tower::ServiceExt::oneshot`, without binding a socket.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use plateshare_core::domains::auth::JwtService;
use plateshare_core::domains::foods::SortDirection;
use plateshare_core::kernel::{BaseFoodStore, InMemoryFoodStore, ServerDeps};
use plateshare_core::server::{auth::SessionCookie, build_app};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_ORIGIN: &str = "http://localhost:5173";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON body; plain-text bodies come back as a JSON string
    pub body: Value,
}

impl TestResponse {
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
    }

    pub fn error_message(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

pub struct TestApp {
    router: Router,
    jwt_service: Arc<JwtService>,
}

impl TestApp {
    pub fn new(store: Arc<dyn BaseFoodStore>) -> Self {
        Self::with_quantity_sort(store, SortDirection::Desc)
    }

    pub fn with_quantity_sort(store: Arc<dyn BaseFoodStore>, quantity_sort: SortDirection) -> Self {
        let jwt_service = Arc::new(JwtService::new(TEST_JWT_SECRET, "test_issuer".to_string()));
        let deps = ServerDeps::new(store, jwt_service.clone(), quantity_sort);
        let router = build_app(deps, &[TEST_ORIGIN.to_string()], SessionCookie::new(false));

        Self {
            router,
            jwt_service,
        }
    }

    /// App backed by a fresh in-memory store; the store handle is returned for seeding
    pub fn in_memory() -> (Self, InMemoryFoodStore) {
        let store = InMemoryFoodStore::new();
        (Self::new(Arc::new(store.clone())), store)
    }

    /// `Cookie` header value carrying a valid session for `email`
    pub fn session_for(&self, email: &str) -> String {
        let token = self
            .jwt_service
            .create_token(email)
            .expect("Failed to sign test token");
        format!("token={}", token)
    }

    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.request(request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn get_as(&self, uri: &str, cookie: &str) -> TestResponse {
        self.send(Method::GET, uri, None, Some(cookie)).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body), None).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body), None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None, None).await
    }
}
