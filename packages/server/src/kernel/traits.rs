// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. The request
// workflow and the listing actions in `domains` are written against them.
//
// Naming convention: Base* for trait names

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{FoodId, FoodRequestId};
use crate::domains::donations::Donation;
use crate::domains::food_requests::{FoodRequest, RequestFilter};
use crate::domains::foods::{Food, FoodQuery, FoodStatus, FoodUpdate};

/// Result of an atomic request insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestInsert {
    /// Request stored and listing marked `requested`
    Created,
    /// The (requester email, listing) pair already has a request; nothing written
    Duplicate,
    /// The listing vanished before the insert; nothing written
    MissingFood,
}

/// Result of an atomic request withdrawal
#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    pub request: FoodRequest,
    /// Listing status after recomputation; `None` if the listing is gone
    pub food_status: Option<FoodStatus>,
}

// =============================================================================
// Food Store Trait (Infrastructure - persistence)
// =============================================================================

#[async_trait]
pub trait BaseFoodStore: Send + Sync {
    /// Cheap round-trip used by the health endpoint
    async fn health_check(&self) -> Result<()>;

    // --- listings -----------------------------------------------------------

    async fn insert_food(&self, food: &Food) -> Result<()>;

    async fn find_food(&self, id: FoodId) -> Result<Option<Food>>;

    async fn query_foods(&self, query: &FoodQuery) -> Result<Vec<Food>>;

    /// Apply a partial update; returns the number of listings matched (0 or 1)
    async fn update_food(&self, id: FoodId, update: &FoodUpdate) -> Result<u64>;

    /// Delete a listing and its requests; returns the number of listings deleted
    async fn delete_food(&self, id: FoodId) -> Result<u64>;

    // --- requests -----------------------------------------------------------

    /// Email comparison is case-insensitive
    async fn find_request_for(
        &self,
        requester_email: &str,
        food_id: FoodId,
    ) -> Result<Option<FoodRequest>>;

    /// Insert the request and set its listing to `requested`, atomically
    async fn create_request(&self, request: &FoodRequest) -> Result<RequestInsert>;

    /// Delete the request and recompute its listing's status, atomically.
    /// `None` when no request has this id.
    async fn withdraw_request(&self, id: FoodRequestId) -> Result<Option<Withdrawal>>;

    /// Newest first
    async fn query_requests(&self, filter: &RequestFilter) -> Result<Vec<FoodRequest>>;

    // --- donations ----------------------------------------------------------

    async fn insert_donation(&self, donation: &Donation) -> Result<()>;

    /// Newest first
    async fn list_donations(&self) -> Result<Vec<Donation>>;
}
