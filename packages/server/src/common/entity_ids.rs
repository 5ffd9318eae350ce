//! Typed ID definitions for all domain entities.
//!
//! ```rust
//! use plateshare_core::common::{FoodId, FoodRequestId};
//!
//! let food_id = FoodId::new();
//! let request_id = FoodRequestId::new();
//!
//! // This would be a compile error:
//! // let wrong: FoodRequestId = food_id;
//! ```

// Re-export the core Id type and version marker
pub use super::id::{Id, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for donated food listings.
pub struct Food;

/// Marker type for recipient requests against a listing.
pub struct FoodRequest;

/// Marker type for donation ledger records.
pub struct Donation;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Food listings.
pub type FoodId = Id<Food>;

/// Typed ID for FoodRequest records.
pub type FoodRequestId = Id<FoodRequest>;

/// Typed ID for Donation records.
pub type DonationId = Id<Donation>;
