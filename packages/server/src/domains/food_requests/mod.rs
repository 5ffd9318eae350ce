//! Food requests domain - the request/status workflow
//!
//! A recipient's request flips the listing to `requested`; withdrawing the
//! last outstanding request flips it back to `available`. Both transitions
//! write the request table and the listing status in one transaction.

pub mod actions;
pub mod data;
pub mod models;
pub mod workflow;

pub use data::{RequestFilter, RequestListQuery, RequestRole, SubmitFoodRequest};
pub use models::FoodRequest;
pub use workflow::{submit_request, withdraw_request};
