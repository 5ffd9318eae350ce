use serde::Deserialize;

use crate::common::validation::{email, optional_text};
use crate::common::{DomainError, FoodId};

/// Body of `POST /addFoodRequest`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFoodRequest {
    pub food_id: FoodId,
    pub requester_email: String,
    #[serde(default)]
    pub requester_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Free-form client data kept alongside the request (must be a JSON object)
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl SubmitFoodRequest {
    pub fn validate(self) -> Result<Self, DomainError> {
        let metadata = match self.metadata {
            None | Some(serde_json::Value::Null) => None,
            Some(value @ serde_json::Value::Object(_)) => Some(value),
            Some(_) => return Err(DomainError::validation("metadata must be a JSON object")),
        };

        Ok(Self {
            food_id: self.food_id,
            requester_email: email("requesterEmail", &self.requester_email)?,
            requester_name: optional_text(self.requester_name),
            notes: optional_text(self.notes),
            metadata,
        })
    }
}

/// Which side of the request the `email` query parameter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestRole {
    /// Requests made against the caller's listings
    #[default]
    Donor,
    /// Requests the caller has made
    Requester,
}

/// Query string of `GET /foodRequest`
#[derive(Debug, Clone, Deserialize)]
pub struct RequestListQuery {
    pub email: String,
    #[serde(default)]
    pub role: RequestRole,
}

/// Store-level request filter; filters combine with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub donor_email: Option<String>,
    pub requester_email: Option<String>,
    pub food_id: Option<FoodId>,
}

impl RequestFilter {
    pub fn for_role(role: RequestRole, email: impl Into<String>) -> Self {
        match role {
            RequestRole::Donor => Self {
                donor_email: Some(email.into()),
                ..Self::default()
            },
            RequestRole::Requester => Self {
                requester_email: Some(email.into()),
                ..Self::default()
            },
        }
    }
}
