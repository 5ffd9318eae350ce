//! Foods domain - donor listings
//!
//! Responsibilities:
//! - Listing CRUD (create, read by id, partial update, delete)
//! - Browsing: available listings with name search and expiry sort
//! - Owner-scoped listing views and the featured / top-donor rankings

pub mod actions;
pub mod data;
pub mod models;

pub use data::{
    AvailableFoodsQuery, FoodOrder, FoodQuery, FoodUpdate, NewFood, OwnerQuery, SortDirection,
};
pub use models::{Food, FoodStatus};

/// Size of the featured listings strip
pub const FEATURED_LIMIT: i64 = 6;

/// Size of the top-donor strip
pub const TOP_DONOR_LIMIT: i64 = 3;
