use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::common::validation::{email, optional_text, required_text};
use crate::common::DomainError;
use crate::domains::foods::FoodStatus;

// ============================================================================
// Write payloads
// ============================================================================

/// Body of `POST /add-food`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFood {
    pub name: String,
    #[serde(deserialize_with = "quantity::deserialize")]
    pub quantity: i32,
    #[serde(deserialize_with = "calendar_date::deserialize")]
    pub expiration_date: NaiveDate,
    pub pickup_location: String,
    pub donor_email: String,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub donor_image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewFood {
    /// Trim and check every field; blank optionals become `None`.
    pub fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            name: required_text("name", &self.name)?,
            quantity: self.quantity,
            expiration_date: self.expiration_date,
            pickup_location: required_text("pickupLocation", &self.pickup_location)?,
            donor_email: email("donorEmail", &self.donor_email)?,
            donor_name: optional_text(self.donor_name),
            donor_image: optional_text(self.donor_image),
            image_url: optional_text(self.image_url),
            notes: optional_text(self.notes),
        })
    }
}

/// Body of `PUT /food/:id`: a partial update, absent fields stay as they are
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "quantity::deserialize_option")]
    pub quantity: Option<i32>,
    #[serde(default, deserialize_with = "calendar_date::deserialize_option")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FoodUpdate {
    pub fn is_empty(&self) -> bool {
        self == &FoodUpdate::default()
    }

    /// Normalises the fields first, so an update made only of blanks counts
    /// as empty.
    pub fn validate(self) -> Result<Self, DomainError> {
        let update = Self {
            name: self
                .name
                .map(|name| required_text("name", &name))
                .transpose()?,
            quantity: self.quantity,
            expiration_date: self.expiration_date,
            pickup_location: self
                .pickup_location
                .map(|location| required_text("pickupLocation", &location))
                .transpose()?,
            image_url: optional_text(self.image_url),
            notes: optional_text(self.notes),
        };
        if update.is_empty() {
            return Err(DomainError::validation("update must change at least one field"));
        }
        Ok(update)
    }
}

// ============================================================================
// Queries
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

#[derive(Debug, Error)]
#[error("expected \"asc\" or \"desc\", got {0:?}")]
pub struct ParseSortDirectionError(String);

impl FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ParseSortDirectionError(s.to_string())),
        }
    }
}

/// Result ordering for listing queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoodOrder {
    /// Most recently created first
    #[default]
    Newest,
    ExpirationDate(SortDirection),
    Quantity(SortDirection),
}

/// Store-level listing query. Every filter is optional and they combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodQuery {
    pub status: Option<FoodStatus>,
    /// Exact owner match, case-insensitive
    pub donor_email: Option<String>,
    /// Case-insensitive substring match on the name
    pub name_contains: Option<String>,
    pub order: FoodOrder,
    pub limit: Option<i64>,
}

impl FoodQuery {
    pub fn available() -> Self {
        Self {
            status: Some(FoodStatus::Available),
            ..Self::default()
        }
    }

    pub fn owned_by(email: impl Into<String>) -> Self {
        Self {
            donor_email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn by_quantity(direction: SortDirection, limit: i64) -> Self {
        Self {
            order: FoodOrder::Quantity(direction),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn matching(mut self, name: impl Into<String>) -> Self {
        self.name_contains = Some(name.into());
        self
    }

    pub fn ordered(mut self, order: FoodOrder) -> Self {
        self.order = order;
        self
    }
}

/// Query string of `GET /all-available-foods`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailableFoodsQuery {
    #[serde(rename = "searchParams", default)]
    pub search_params: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl AvailableFoodsQuery {
    /// Blank values are treated as absent; an unknown sort is rejected.
    pub fn into_food_query(self) -> Result<FoodQuery, DomainError> {
        let mut query = FoodQuery::available();

        if let Some(search) = optional_text(self.search_params) {
            query = query.matching(search);
        }

        if let Some(sort) = optional_text(self.sort) {
            let direction = sort
                .parse::<SortDirection>()
                .map_err(|e| DomainError::validation(format!("sort: {e}")))?;
            query = query.ordered(FoodOrder::ExpirationDate(direction));
        }

        Ok(query)
    }
}

/// Query string of the owner-scoped listing routes (`GET /manageMyFood`)
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerQuery {
    pub email: String,
}

// ============================================================================
// Lenient field decoding
// ============================================================================

/// Quantity is canonically a non-negative integer. Older clients send it as
/// text (`"12"`), so numeric strings are accepted and normalised here.
mod quantity {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    fn normalise<E: Error>(raw: Raw) -> Result<i32, E> {
        let value = match raw {
            Raw::Number(n) => n,
            Raw::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("quantity must be a whole number, got {text:?}")))?,
        };
        if value < 0 {
            return Err(E::custom("quantity must not be negative"));
        }
        i32::try_from(value).map_err(|_| E::custom("quantity is too large"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        normalise(Raw::deserialize(deserializer)?)
    }

    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i32>, D::Error> {
        Option::<Raw>::deserialize(deserializer)?
            .map(normalise)
            .transpose()
    }
}

/// Expiration dates arrive either as `YYYY-MM-DD` or as a full RFC 3339
/// timestamp from date pickers; both reduce to the calendar date.
mod calendar_date {
    use chrono::{DateTime, NaiveDate};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    fn parse<E: Error>(raw: &str) -> Result<NaiveDate, E> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
            .map_err(|_| E::custom(format!("expected a date like 2030-01-31, got {raw:?}")))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw)
    }

    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse(&raw))
            .transpose()
    }
}
