//! HTTP tests for the request/status workflow.
//!
//! Runs against the in-memory store, so no database is needed:
//! - Submitting flips a listing to `requested`
//! - Duplicates are rejected without side effects
//! - Withdrawing the last request flips it back to `available`

mod common;

use common::{create_test_food, food_id, request_body, TestApp};
use serde_json::json;

// ============================================================================
// Submit
// ============================================================================

#[tokio::test]
async fn submit_marks_listing_requested() {
    let (app, store) = TestApp::in_memory();
    let id = create_test_food(&app, "donor@example.org", "Vegetable Soup", 4).await;

    let response = app
        .post("/addFoodRequest", request_body(&id, "taker@example.org"))
        .await;

    assert_eq!(response.status, 201);
    assert_eq!(response.body["acknowledged"], true);
    assert!(response.body["insertedId"].is_string());

    let food = app.get(&format!("/food/{}", id)).await;
    assert_eq!(food.body["status"], "requested");
    assert_eq!(store.requests_for(food_id(&id)).len(), 1);
}

#[tokio::test]
async fn duplicate_submit_is_rejected() {
    let (app, store) = TestApp::in_memory();
    let id = create_test_food(&app, "donor@example.org", "Vegetable Soup", 4).await;

    let first = app
        .post("/addFoodRequest", request_body(&id, "taker@example.org"))
        .await;
    assert_eq!(first.status, 201);

    // Same requester, different casing
    let second = app
        .post("/addFoodRequest", request_body(&id, "Taker@Example.org"))
        .await;

    assert_eq!(second.status, 400);
    assert_eq!(second.error_message(), "You have already requested this food");
    assert_eq!(store.requests_for(food_id(&id)).len(), 1);

    let food = app.get(&format!("/food/{}", id)).await;
    assert_eq!(food.body["status"], "requested");
}

#[tokio::test]
async fn submit_against_missing_listing_is_not_found() {
    let (app, store) = TestApp::in_memory();

    let response = app
        .post(
            "/addFoodRequest",
            request_body("0190a5d4-7d3c-7c4e-9a1b-2f3e4d5c6b7a", "taker@example.org"),
        )
        .await;

    assert_eq!(response.status, 404);
    assert_eq!(response.error_message(), "food not found");
    assert_eq!(store.request_count(), 0);
}

#[tokio::test]
async fn listing_owner_can_submit_a_request() {
    let (app, store) = TestApp::in_memory();
    let id = create_test_food(&app, "donor@example.org", "Bagels", 12).await;

    let response = app
        .post("/addFoodRequest", request_body(&id, "DONOR@example.org"))
        .await;

    assert_eq!(response.status, 201);
    assert_eq!(store.requests_for(food_id(&id)).len(), 1);

    let food = app.get(&format!("/food/{}", id)).await;
    assert_eq!(food.body["status"], "requested");
}

#[tokio::test]
async fn submit_rejects_malformed_payloads() {
    let (app, _store) = TestApp::in_memory();
    let id = create_test_food(&app, "donor@example.org", "Bagels", 12).await;

    let bad_email = app
        .post("/addFoodRequest", request_body(&id, "not-an-email"))
        .await;
    assert_eq!(bad_email.status, 400);

    let bad_id = app
        .post("/addFoodRequest", request_body("not-a-uuid", "taker@example.org"))
        .await;
    assert_eq!(bad_id.status, 400);

    let bad_metadata = app
        .post(
            "/addFoodRequest",
            json!({ "foodId": id, "requesterEmail": "taker@example.org", "metadata": [1, 2] }),
        )
        .await;
    assert_eq!(bad_metadata.status, 400);
}

// ============================================================================
// Withdraw
// ============================================================================

#[tokio::test]
async fn withdraw_restores_availability() {
    let (app, store) = TestApp::in_memory();
    let id = create_test_food(&app, "donor@example.org", "Vegetable Soup", 4).await;
    let submitted = app
        .post("/addFoodRequest", request_body(&id, "taker@example.org"))
        .await;
    let request_id = submitted.body["insertedId"].as_str().unwrap().to_string();

    let response = app.delete(&format!("/foodRequest/{}", request_id)).await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body["deletedCount"], 1);
    assert_eq!(store.request_count(), 0);

    let food = app.get(&format!("/food/{}", id)).await;
    assert_eq!(food.body["status"], "available");

    // Repeating the withdrawal is a no-op
    let again = app.delete(&format!("/foodRequest/{}", request_id)).await;
    assert_eq!(again.status, 200);
    assert_eq!(again.body["deletedCount"], 0);

    let food = app.get(&format!("/food/{}", id)).await;
    assert_eq!(food.body["status"], "available");
}

#[tokio::test]
async fn withdrawing_one_of_two_requests_keeps_listing_requested() {
    let (app, _store) = TestApp::in_memory();
    let id = create_test_food(&app, "donor@example.org", "Bread", 10).await;

    let first = app
        .post("/addFoodRequest", request_body(&id, "first@example.org"))
        .await;
    let second = app
        .post("/addFoodRequest", request_body(&id, "second@example.org"))
        .await;
    assert_eq!(first.status, 201);
    assert_eq!(second.status, 201);

    let first_id = first.body["insertedId"].as_str().unwrap();
    app.delete(&format!("/foodRequest/{}", first_id)).await;

    let food = app.get(&format!("/food/{}", id)).await;
    assert_eq!(food.body["status"], "requested");

    let second_id = second.body["insertedId"].as_str().unwrap();
    app.delete(&format!("/foodRequest/{}", second_id)).await;

    let food = app.get(&format!("/food/{}", id)).await;
    assert_eq!(food.body["status"], "available");
}

#[tokio::test]
async fn withdraw_with_malformed_id_is_bad_request() {
    let (app, _store) = TestApp::in_memory();

    let response = app.delete("/foodRequest/definitely-not-an-id").await;

    assert_eq!(response.status, 400);
}

#[tokio::test]
async fn request_can_be_resubmitted_after_withdrawal() {
    let (app, _store) = TestApp::in_memory();
    let id = create_test_food(&app, "donor@example.org", "Apples", 30).await;

    let submitted = app
        .post("/addFoodRequest", request_body(&id, "taker@example.org"))
        .await;
    let request_id = submitted.body["insertedId"].as_str().unwrap();
    app.delete(&format!("/foodRequest/{}", request_id)).await;

    let again = app
        .post("/addFoodRequest", request_body(&id, "taker@example.org"))
        .await;

    assert_eq!(again.status, 201);
    let food = app.get(&format!("/food/{}", id)).await;
    assert_eq!(food.body["status"], "requested");
}
