//! Session cookie handling.
//!
//! The signed JWT travels in an HTTP-only cookie named `token`. Browsers on a
//! different site than the API need `Secure; SameSite=None`; local development
//! over plain http uses `SameSite=Strict` instead.

use axum::http::{header::COOKIE, HeaderMap};

use crate::domains::auth::SESSION_TTL_HOURS;

pub const SESSION_COOKIE: &str = "token";

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCookie {
    secure: bool,
}

impl SessionCookie {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// `Set-Cookie` value carrying a freshly issued token
    pub fn issue(&self, token: &str) -> String {
        format!(
            "{SESSION_COOKIE}={token}; HttpOnly; Path=/; Max-Age={}; {}",
            SESSION_TTL_HOURS * 3600,
            self.site_attributes()
        )
    }

    /// `Set-Cookie` value that expires the session immediately
    pub fn clear(&self) -> String {
        format!(
            "{SESSION_COOKIE}=; HttpOnly; Path=/; Max-Age=0; {}",
            self.site_attributes()
        )
    }

    fn site_attributes(&self) -> &'static str {
        if self.secure {
            "Secure; SameSite=None"
        } else {
            "SameSite=Strict"
        }
    }
}

/// Value of the session cookie, if the request carries a non-empty one
pub fn read_session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
