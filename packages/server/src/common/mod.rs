// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod error;
pub mod id;
pub mod outcome;
pub mod validation;

pub use auth::{Actor, AuthError};
pub use entity_ids::*;
pub use error::DomainError;
pub use id::{Id, V7};
pub use outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
