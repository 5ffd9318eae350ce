// TestDependencies - in-memory implementations for testing
//
// `InMemoryFoodStore` mirrors the Postgres adapter's semantics (case-insensitive
// emails, newest-first ordering, atomic request transitions) so domain and
// HTTP tests run without a database.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::cmp::Reverse;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{BaseFoodStore, RequestInsert, Withdrawal};
use crate::common::auth::same_email;
use crate::common::{FoodId, FoodRequestId};
use crate::domains::donations::Donation;
use crate::domains::food_requests::{FoodRequest, RequestFilter};
use crate::domains::foods::{Food, FoodOrder, FoodQuery, FoodStatus, FoodUpdate, NewFood, SortDirection};

#[derive(Default)]
struct StoreState {
    // Insertion order is kept; it breaks created_at ties like `id DESC` does in SQL
    foods: Vec<Food>,
    requests: Vec<FoodRequest>,
    donations: Vec<Donation>,
    skip_duplicate_precheck: bool,
}

#[derive(Clone, Default)]
pub struct InMemoryFoodStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryFoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a listing without validation and return its id
    pub fn seed_food(&self, input: NewFood) -> FoodId {
        let food = Food::from_new(input);
        let id = food.id;
        self.state().foods.push(food);
        id
    }

    pub fn food(&self, id: FoodId) -> Option<Food> {
        self.state().foods.iter().find(|f| f.id == id).cloned()
    }

    pub fn food_count(&self) -> usize {
        self.state().foods.len()
    }

    pub fn set_status(&self, id: FoodId, status: FoodStatus) {
        if let Some(food) = self.state().foods.iter_mut().find(|f| f.id == id) {
            food.status = status;
        }
    }

    pub fn requests_for(&self, food_id: FoodId) -> Vec<FoodRequest> {
        self.state()
            .requests
            .iter()
            .filter(|r| r.food_id == food_id)
            .cloned()
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.state().requests.len()
    }

    /// Make `find_request_for` always miss, so duplicates are only caught by
    /// `create_request` (the race the unique index exists for).
    pub fn skip_duplicate_precheck(&self) {
        self.state().skip_duplicate_precheck = true;
    }
}

/// Newest first, with later inserts ahead on equal timestamps
fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> chrono::DateTime<chrono::Utc>) -> Vec<T> {
    let mut sorted: Vec<T> = items.iter().rev().cloned().collect();
    sorted.sort_by_key(|item| Reverse(created_at(item)));
    sorted
}

fn sort_by_direction<K: Ord>(foods: &mut [Food], direction: SortDirection, key: impl Fn(&Food) -> K) {
    match direction {
        SortDirection::Asc => foods.sort_by(|a, b| key(a).cmp(&key(b))),
        SortDirection::Desc => foods.sort_by(|a, b| key(b).cmp(&key(a))),
    }
}

#[async_trait]
impl BaseFoodStore for InMemoryFoodStore {
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    async fn insert_food(&self, food: &Food) -> Result<()> {
        self.state().foods.push(food.clone());
        Ok(())
    }

    async fn find_food(&self, id: FoodId) -> Result<Option<Food>> {
        Ok(self.food(id))
    }

    async fn query_foods(&self, query: &FoodQuery) -> Result<Vec<Food>> {
        let state = self.state();
        let mut foods: Vec<Food> = newest_first(&state.foods, |f| f.created_at)
            .into_iter()
            .filter(|f| query.status.map_or(true, |status| f.status == status))
            .filter(|f| {
                query
                    .donor_email
                    .as_deref()
                    .map_or(true, |email| same_email(&f.donor_email, email))
            })
            .filter(|f| {
                query.name_contains.as_deref().map_or(true, |needle| {
                    f.name.to_lowercase().contains(&needle.to_lowercase())
                })
            })
            .collect();

        match query.order {
            FoodOrder::Newest => {}
            FoodOrder::ExpirationDate(direction) => {
                sort_by_direction(&mut foods, direction, |f| f.expiration_date)
            }
            FoodOrder::Quantity(direction) => sort_by_direction(&mut foods, direction, |f| f.quantity),
        }

        if let Some(limit) = query.limit {
            foods.truncate(usize::try_from(limit).unwrap_or(0));
        }

        Ok(foods)
    }

    async fn update_food(&self, id: FoodId, update: &FoodUpdate) -> Result<u64> {
        let mut state = self.state();
        match state.foods.iter_mut().find(|f| f.id == id) {
            Some(food) => {
                food.apply(update);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_food(&self, id: FoodId) -> Result<u64> {
        let mut state = self.state();
        let before = state.foods.len();
        state.foods.retain(|f| f.id != id);
        let deleted = (before - state.foods.len()) as u64;
        if deleted > 0 {
            state.requests.retain(|r| r.food_id != id);
        }
        Ok(deleted)
    }

    async fn find_request_for(
        &self,
        requester_email: &str,
        food_id: FoodId,
    ) -> Result<Option<FoodRequest>> {
        let state = self.state();
        if state.skip_duplicate_precheck {
            return Ok(None);
        }
        Ok(state
            .requests
            .iter()
            .find(|r| r.food_id == food_id && same_email(&r.requester_email, requester_email))
            .cloned())
    }

    async fn create_request(&self, request: &FoodRequest) -> Result<RequestInsert> {
        let mut state = self.state();

        if !state.foods.iter().any(|f| f.id == request.food_id) {
            return Ok(RequestInsert::MissingFood);
        }
        let duplicate = state.requests.iter().any(|r| {
            r.food_id == request.food_id && same_email(&r.requester_email, &request.requester_email)
        });
        if duplicate {
            return Ok(RequestInsert::Duplicate);
        }

        state.requests.push(request.clone());
        if let Some(food) = state.foods.iter_mut().find(|f| f.id == request.food_id) {
            food.status = FoodStatus::Requested;
        }
        Ok(RequestInsert::Created)
    }

    async fn withdraw_request(&self, id: FoodRequestId) -> Result<Option<Withdrawal>> {
        let mut state = self.state();

        let Some(index) = state.requests.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        let request = state.requests.remove(index);

        let outstanding = state
            .requests
            .iter()
            .filter(|r| r.food_id == request.food_id)
            .count();
        let food_status = state
            .foods
            .iter_mut()
            .find(|f| f.id == request.food_id)
            .map(|food| {
                food.status = FoodStatus::for_outstanding(outstanding);
                food.status
            });

        Ok(Some(Withdrawal {
            request,
            food_status,
        }))
    }

    async fn query_requests(&self, filter: &RequestFilter) -> Result<Vec<FoodRequest>> {
        let state = self.state();
        Ok(newest_first(&state.requests, |r| r.requested_at)
            .into_iter()
            .filter(|r| {
                filter
                    .donor_email
                    .as_deref()
                    .map_or(true, |email| same_email(&r.donor_email, email))
            })
            .filter(|r| {
                filter
                    .requester_email
                    .as_deref()
                    .map_or(true, |email| same_email(&r.requester_email, email))
            })
            .filter(|r| filter.food_id.map_or(true, |id| r.food_id == id))
            .collect())
    }

    async fn insert_donation(&self, donation: &Donation) -> Result<()> {
        self.state().donations.push(donation.clone());
        Ok(())
    }

    async fn list_donations(&self) -> Result<Vec<Donation>> {
        Ok(newest_first(&self.state().donations, |d| d.created_at))
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// A valid listing payload owned by `donor@example.org`
pub fn food_named(name: &str, quantity: i32) -> NewFood {
    NewFood {
        name: name.to_string(),
        quantity,
        expiration_date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap_or_default(),
        pickup_location: "Community Hall".to_string(),
        donor_email: "donor@example.org".to_string(),
        donor_name: Some("Donor".to_string()),
        donor_image: None,
        image_url: None,
        notes: None,
    }
}
