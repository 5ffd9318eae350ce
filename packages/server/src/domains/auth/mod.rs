//! Auth domain - session tokens
//!
//! Responsibilities:
//! - Issuing signed, time-limited session tokens for an email identity
//! - Verifying tokens presented back in the session cookie

pub mod jwt;

pub use jwt::{Claims, JwtService, SESSION_TTL_HOURS};
