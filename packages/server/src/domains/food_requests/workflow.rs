//! The two cross-table transitions: submit and withdraw.
//!
//! Duplicate key: (requester email, listing id). The pre-check gives a clean
//! rejection in the common case; the unique index behind `create_request`
//! settles concurrent submits that both pass it.

use tracing::{debug, info, warn};

use super::{FoodRequest, SubmitFoodRequest};
use crate::common::{DeleteOutcome, DomainError, FoodRequestId, InsertOutcome};
use crate::kernel::{BaseFoodStore, RequestInsert};

/// Submit a request for a listing and mark the listing `requested`.
///
/// Fails with `NotFound` when the listing does not exist and with
/// `DuplicateRequest` when the requester already has a request on it;
/// neither case writes anything.
pub async fn submit_request(
    store: &dyn BaseFoodStore,
    input: SubmitFoodRequest,
) -> Result<InsertOutcome, DomainError> {
    let input = input.validate()?;

    let food = store
        .find_food(input.food_id)
        .await?
        .ok_or(DomainError::NotFound("food"))?;

    if store
        .find_request_for(&input.requester_email, food.id)
        .await?
        .is_some()
    {
        warn!(food_id = %food.id, requester = %input.requester_email, "Duplicate food request rejected");
        return Err(DomainError::DuplicateRequest);
    }

    let request = FoodRequest::new(input, &food);
    match store.create_request(&request).await? {
        RequestInsert::Created => {
            info!(
                request_id = %request.id,
                food_id = %request.food_id,
                requester = %request.requester_email,
                "Food requested"
            );
            Ok(InsertOutcome::new(request.id))
        }
        RequestInsert::Duplicate => {
            warn!(food_id = %request.food_id, requester = %request.requester_email, "Concurrent duplicate food request rejected");
            Err(DomainError::DuplicateRequest)
        }
        RequestInsert::MissingFood => Err(DomainError::NotFound("food")),
    }
}

/// Withdraw a request and recompute its listing's status.
///
/// A request id that no longer exists is a no-op reported as
/// `deletedCount: 0`, so repeating a withdrawal never flips status twice.
pub async fn withdraw_request(
    store: &dyn BaseFoodStore,
    id: FoodRequestId,
) -> Result<DeleteOutcome, DomainError> {
    match store.withdraw_request(id).await? {
        Some(withdrawal) => {
            info!(
                request_id = %id,
                food_id = %withdrawal.request.food_id,
                status = ?withdrawal.food_status,
                "Food request withdrawn"
            );
            Ok(DeleteOutcome::deleted(1))
        }
        None => {
            debug!(request_id = %id, "Nothing to withdraw");
            Ok(DeleteOutcome::none())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FoodId;
    use crate::domains::foods::FoodStatus;
    use crate::kernel::test_dependencies::{food_named, InMemoryFoodStore};

    fn request_for(food_id: FoodId, requester: &str) -> SubmitFoodRequest {
        SubmitFoodRequest {
            food_id,
            requester_email: requester.to_string(),
            requester_name: Some("Taker".to_string()),
            notes: None,
            metadata: None,
        }
    }

    #[tokio::test]
    async fn test_submit_marks_listing_requested() {
        let store = InMemoryFoodStore::new();
        let food_id = store.seed_food(food_named("Rice", 2));

        let outcome = submit_request(&store, request_for(food_id, "taker@example.org"))
            .await
            .unwrap();

        assert!(outcome.acknowledged);
        assert_eq!(store.food(food_id).unwrap().status, FoodStatus::Requested);

        let requests = store.requests_for(food_id);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].id.into_uuid(), outcome.inserted_id);
        assert_eq!(requests[0].donor_email, "donor@example.org");
    }

    #[tokio::test]
    async fn test_duplicate_submit_rejected_without_writes() {
        let store = InMemoryFoodStore::new();
        let food_id = store.seed_food(food_named("Rice", 2));
        submit_request(&store, request_for(food_id, "taker@example.org"))
            .await
            .unwrap();

        let result = submit_request(&store, request_for(food_id, "TAKER@example.org")).await;

        assert!(matches!(result, Err(DomainError::DuplicateRequest)));
        assert_eq!(store.requests_for(food_id).len(), 1);
        assert_eq!(store.food(food_id).unwrap().status, FoodStatus::Requested);
    }

    #[tokio::test]
    async fn test_submit_for_missing_listing_writes_nothing() {
        let store = InMemoryFoodStore::new();
        let result = submit_request(&store, request_for(FoodId::new(), "taker@example.org")).await;

        assert!(matches!(result, Err(DomainError::NotFound("food"))));
        assert_eq!(store.request_count(), 0);
    }

    #[tokio::test]
    async fn test_listing_owner_request_is_a_fresh_pair() {
        let store = InMemoryFoodStore::new();
        let food_id = store.seed_food(food_named("Rice", 2));

        let result = submit_request(&store, request_for(food_id, "donor@example.org")).await;

        assert!(result.is_ok());
        assert_eq!(store.food(food_id).unwrap().status, FoodStatus::Requested);
        assert_eq!(store.requests_for(food_id).len(), 1);
    }

    #[tokio::test]
    async fn test_withdraw_restores_available_and_is_idempotent() {
        let store = InMemoryFoodStore::new();
        let food_id = store.seed_food(food_named("Rice", 2));
        let outcome = submit_request(&store, request_for(food_id, "taker@example.org"))
            .await
            .unwrap();
        let request_id = FoodRequestId::from_uuid(outcome.inserted_id);

        let first = withdraw_request(&store, request_id).await.unwrap();
        assert_eq!(first.deleted_count, 1);
        assert_eq!(store.food(food_id).unwrap().status, FoodStatus::Available);
        assert!(store.requests_for(food_id).is_empty());

        let second = withdraw_request(&store, request_id).await.unwrap();
        assert_eq!(second.deleted_count, 0);
        assert_eq!(store.food(food_id).unwrap().status, FoodStatus::Available);
    }

    #[tokio::test]
    async fn test_withdraw_keeps_requested_while_others_remain() {
        let store = InMemoryFoodStore::new();
        let food_id = store.seed_food(food_named("Rice", 2));
        let first = submit_request(&store, request_for(food_id, "one@example.org"))
            .await
            .unwrap();
        submit_request(&store, request_for(food_id, "two@example.org"))
            .await
            .unwrap();

        withdraw_request(&store, FoodRequestId::from_uuid(first.inserted_id))
            .await
            .unwrap();

        assert_eq!(store.food(food_id).unwrap().status, FoodStatus::Requested);
        assert_eq!(store.requests_for(food_id).len(), 1);
    }

    #[tokio::test]
    async fn test_store_level_duplicate_maps_to_duplicate_request() {
        let store = InMemoryFoodStore::new();
        let food_id = store.seed_food(food_named("Rice", 2));
        store.skip_duplicate_precheck();
        submit_request(&store, request_for(food_id, "taker@example.org"))
            .await
            .unwrap();

        let result = submit_request(&store, request_for(food_id, "taker@example.org")).await;
        assert!(matches!(result, Err(DomainError::DuplicateRequest)));
        assert_eq!(store.requests_for(food_id).len(), 1);
    }
}
