use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::{FoodId, FoodRequestId};
use crate::domains::food_requests::SubmitFoodRequest;
use crate::domains::foods::Food;

/// A recipient's claim against a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequest {
    pub id: FoodRequestId,
    pub food_id: FoodId,
    pub requester_email: String,
    pub requester_name: Option<String>,
    /// Copied from the listing so donors can list incoming requests without a join
    pub donor_email: String,
    pub notes: Option<String>,
    pub metadata: serde_json::Value,
    pub requested_at: DateTime<Utc>,
}

impl FoodRequest {
    pub fn new(input: SubmitFoodRequest, food: &Food) -> Self {
        Self {
            id: FoodRequestId::new(),
            food_id: food.id,
            requester_email: input.requester_email,
            requester_name: input.requester_name,
            donor_email: food.donor_email.clone(),
            notes: input.notes,
            metadata: input
                .metadata
                .unwrap_or_else(|| serde_json::Value::Object(Default::default())),
            requested_at: Utc::now(),
        }
    }
}
