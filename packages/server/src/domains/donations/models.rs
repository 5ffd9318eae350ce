use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::validation::{email, optional_text, required_text};
use crate::common::{DomainError, DonationId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: DonationId,
    pub donor_name: String,
    pub donor_email: String,
    /// Smallest currency unit (cents)
    pub amount: i64,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /donation`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub donor_name: String,
    pub donor_email: String,
    pub amount: i64,
    #[serde(default)]
    pub message: Option<String>,
}

impl Donation {
    pub fn from_new(input: NewDonation) -> Result<Self, DomainError> {
        if input.amount <= 0 {
            return Err(DomainError::validation("amount must be positive"));
        }

        Ok(Self {
            id: DonationId::new(),
            donor_name: required_text("donorName", &input.donor_name)?,
            donor_email: email("donorEmail", &input.donor_email)?,
            amount: input.amount,
            message: optional_text(input.message),
            created_at: Utc::now(),
        })
    }
}
