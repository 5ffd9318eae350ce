//! Test fixtures for creating test data.

use chrono::NaiveDate;
use plateshare_core::common::FoodId;
use plateshare_core::domains::foods::NewFood;
use serde_json::{json, Value};
use uuid::Uuid;

use super::TestApp;

/// An address no other test will use, so tests can share one database
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.org", prefix, Uuid::new_v4().simple())
}

/// JSON body for `POST /add-food`
pub fn food_body(donor_email: &str, name: &str, quantity: i32) -> Value {
    json!({
        "name": name,
        "quantity": quantity,
        "expirationDate": "2030-06-01",
        "pickupLocation": "Community Hall",
        "donorEmail": donor_email,
        "donorName": "Test Donor",
        "notes": "Ring the bell"
    })
}

/// JSON body for `POST /addFoodRequest`
pub fn request_body(food_id: &str, requester_email: &str) -> Value {
    json!({
        "foodId": food_id,
        "requesterEmail": requester_email,
        "requesterName": "Test Requester",
        "notes": "Can pick up after 5pm"
    })
}

/// Listing payload for store-level tests
pub fn new_food(donor_email: &str, name: &str, quantity: i32) -> NewFood {
    NewFood {
        name: name.to_string(),
        quantity,
        expiration_date: NaiveDate::from_ymd_opt(2030, 6, 1).expect("valid date"),
        pickup_location: "Community Hall".to_string(),
        donor_email: donor_email.to_string(),
        donor_name: Some("Test Donor".to_string()),
        donor_image: None,
        image_url: None,
        notes: None,
    }
}

/// Create a listing over HTTP and return its id
pub async fn create_test_food(app: &TestApp, donor_email: &str, name: &str, quantity: i32) -> String {
    let response = app.post("/add-food", food_body(donor_email, name, quantity)).await;
    assert_eq!(response.status, 201, "add-food failed: {}", response.body);
    response.body["insertedId"]
        .as_str()
        .expect("insertedId should be a string")
        .to_string()
}

pub fn food_id(raw: &str) -> FoodId {
    FoodId::parse(raw).expect("valid food id")
}
