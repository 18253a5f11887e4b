//! Live-store integration tests.
//!
//! These tests require a reachable MongoDB deployment:
//!
//! ```bash
//! PETCARE_LIVE_DATABASE_URL=mongodb://localhost:27017 \
//!     cargo test -p pet-care-integration-tests -- --ignored
//! ```
//!
//! They exercise the flows the black-box tests cannot: owner-scoped
//! listing, the create/list/cancel booking lifecycle, brand filtering, and
//! pagination against the unfiltered collection count. Catalog documents
//! are seeded directly through the driver, the way they are authored in
//! production.

use mongodb::bson::{doc, oid::ObjectId};
use reqwest::StatusCode;
use serde_json::{Value, json};

use pet_care_core::BookingId;
use pet_care_integration_tests::{TestServer, mint_token};

/// Connection string for the live deployment (configurable via environment).
fn live_database_url() -> String {
    std::env::var("PETCARE_LIVE_DATABASE_URL")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

/// A unique owner email so concurrent runs never see each other's bookings.
fn unique_email() -> String {
    format!("owner+{}@example.com", ObjectId::new().to_hex())
}

#[tokio::test]
#[ignore = "Requires a reachable MongoDB deployment"]
async fn test_booking_lifecycle() {
    let url = live_database_url();
    let server = TestServer::spawn_with_database_url(&url).await;
    let client = reqwest::Client::new();
    let email = unique_email();
    let token = mint_token(&json!({ "email": email }));

    // Create a booking; the acknowledgment carries the new id.
    let resp = client
        .post(format!("{}/api/v1/user/create-booking", server.base_url))
        .json(&json!({ "email": email, "service": "grooming" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let ack: Value = resp.json().await.expect("json body");
    assert_eq!(ack["acknowledged"], true);
    let id = ack["insertedId"].as_str().expect("inserted id").to_owned();
    assert!(BookingId::parse(&id).is_ok(), "inserted id is ObjectId-shaped");

    // The owner-scoped list contains exactly the new booking.
    let resp = client
        .get(format!(
            "{}/api/v1/user/bookings?email={email}",
            server.base_url
        ))
        .header("Cookie", format!("token={token}"))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let bookings: Vec<Value> = resp.json().await.expect("json body");
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["_id"], id.as_str());
    assert_eq!(bookings[0]["email"], email.as_str());
    assert_eq!(bookings[0]["service"], "grooming");

    // Cancelling removes exactly that document.
    let resp = client
        .delete(format!(
            "{}/api/v1/user/cancel-booking/{id}",
            server.base_url
        ))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let ack: Value = resp.json().await.expect("json body");
    assert_eq!(ack["deletedCount"], 1);

    // Cancelling an already-deleted id acknowledges with a count of 0.
    let resp = client
        .delete(format!(
            "{}/api/v1/user/cancel-booking/{id}",
            server.base_url
        ))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let ack: Value = resp.json().await.expect("json body");
    assert_eq!(ack["deletedCount"], 0);

    // And the owner's list is empty again.
    let resp = client
        .get(format!(
            "{}/api/v1/user/bookings?email={email}",
            server.base_url
        ))
        .header("Cookie", format!("token={token}"))
        .send()
        .await
        .expect("request failed");
    let bookings: Vec<Value> = resp.json().await.expect("json body");
    assert!(bookings.is_empty());
}

#[tokio::test]
#[ignore = "Requires a reachable MongoDB deployment"]
async fn test_catalog_filtering_and_pagination() {
    let url = live_database_url();
    let server = TestServer::spawn_with_database_url(&url).await;
    let client = reqwest::Client::new();

    // Seed catalog documents directly, the way they are authored in
    // production. A unique brand marker keeps runs independent.
    let brand = format!("Test Brand {}", ObjectId::new().to_hex());
    let driver = mongodb::Client::with_uri_str(&url)
        .await
        .expect("connection string must parse");
    let services = driver
        .database("pet-care-test")
        .collection::<mongodb::bson::Document>("services");
    let seeded: Vec<_> = (0..15)
        .map(|i| doc! { "brand": &brand, "price": f64::from(i), "title": format!("Service {i}") })
        .collect();
    services
        .insert_many(seeded)
        .await
        .expect("failed to seed catalog");

    // Brand filtering is exact: every returned document carries the brand.
    let resp = client
        .get(format!("{}/api/v1/services", server.base_url))
        .query(&[("brand", brand.as_str())])
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let page: Value = resp.json().await.expect("json body");
    let result = page["result"].as_array().expect("result array");
    assert_eq!(result.len(), 15);
    assert!(result.iter().all(|s| s["brand"] == brand.as_str()));

    // The count is the unfiltered collection total, so it is at least the
    // seeded documents even under a brand filter.
    let count = page["count"].as_u64().expect("count");
    assert!(count >= 15);

    // Page 2 with limit 10 skips the first 10 matches.
    let resp = client
        .get(format!("{}/api/v1/services", server.base_url))
        .query(&[
            ("brand", brand.as_str()),
            ("sortField", "price"),
            ("sortOrder", "asc"),
            ("page", "2"),
            ("limit", "10"),
        ])
        .send()
        .await
        .expect("request failed");
    let page: Value = resp.json().await.expect("json body");
    let result = page["result"].as_array().expect("result array");
    assert_eq!(result.len(), 5);
    assert_eq!(result[0]["price"], 10.0);
    // The count field is unchanged by pagination.
    assert_eq!(page["count"].as_u64().expect("count"), count);

    // Descending sort reverses the order.
    let resp = client
        .get(format!("{}/api/v1/services", server.base_url))
        .query(&[
            ("brand", brand.as_str()),
            ("sortField", "price"),
            ("sortOrder", "desc"),
            ("page", "1"),
            ("limit", "1"),
        ])
        .send()
        .await
        .expect("request failed");
    let page: Value = resp.json().await.expect("json body");
    assert_eq!(page["result"][0]["price"], 14.0);

    services
        .delete_many(doc! { "brand": &brand })
        .await
        .expect("failed to clean up seeded catalog");
}
