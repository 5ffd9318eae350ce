use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::FoodStatus;
use crate::common::FoodId;
use crate::domains::foods::data::{FoodUpdate, NewFood};

/// A donated food listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub quantity: i32,
    pub expiration_date: NaiveDate,
    pub pickup_location: String,
    pub donor_email: String,
    pub donor_name: Option<String>,
    pub donor_image: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    pub status: FoodStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Food {
    /// Build a fresh listing from a validated payload. New listings are always available.
    pub fn from_new(input: NewFood) -> Self {
        let now = Utc::now();
        Self {
            id: FoodId::new(),
            name: input.name,
            quantity: input.quantity,
            expiration_date: input.expiration_date,
            pickup_location: input.pickup_location,
            donor_email: input.donor_email,
            donor_name: input.donor_name,
            donor_image: input.donor_image,
            image_url: input.image_url,
            notes: input.notes,
            status: FoodStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update; fields absent from `update` keep their value.
    pub fn apply(&mut self, update: &FoodUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(expiration_date) = update.expiration_date {
            self.expiration_date = expiration_date;
        }
        if let Some(pickup_location) = &update.pickup_location {
            self.pickup_location = pickup_location.clone();
        }
        if let Some(image_url) = &update.image_url {
            self.image_url = Some(image_url.clone());
        }
        if let Some(notes) = &update.notes {
            self.notes = Some(notes.clone());
        }
        self.updated_at = Utc::now();
    }
}
