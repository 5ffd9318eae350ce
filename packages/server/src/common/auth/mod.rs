//! Authorization checks for handler code
//!
//! ```rust
//! use plateshare_core::common::auth::Actor;
//!
//! Actor::new("donor@example.org")
//!     .must_own("donor@example.org")
//!     .unwrap();
//! ```
//!
//! Authentication (who is calling) happens in the session middleware;
//! this module only answers whether that identity may touch a scope.

mod builder;
mod errors;

pub use builder::Actor;
pub(crate) use builder::same_email;
pub use errors::AuthError;
