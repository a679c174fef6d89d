//! End-to-end booking flow over the HTTP API: customer and shop setup,
//! booking creation, status update, and the audit trail those mutations leave.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_customer, create_service_line, create_shop, get, post_json, put_json};

// ---------------------------------------------------------------------------
// The full flow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn booking_flow_creates_confirmed_booking_with_full_audit_trail() {
    let app = common::build_test_app();

    // Setup: customer, shop, and a service line.
    let customer = create_customer(app.clone(), "Dana", "dana@example.com", "pw").await;
    let shop = create_shop(app.clone(), "Corner Barber", "haircut").await;
    let shop_id = shop["id"].as_str().unwrap();
    let line = create_service_line(app.clone(), shop_id, "Haircut").await;

    // Create the booking. Status is forced to confirmed no matter what the
    // caller sends.
    let response = post_json(
        app.clone(),
        "/api/bookings",
        serde_json::json!({
            "customerId": customer["id"],
            "shopId": shop["id"],
            "serviceLineId": line["id"],
            "status": "serving",
            "estimatedMinutes": 20,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let booking = body_json(response).await;
    assert_eq!(booking["status"], "confirmed");
    assert!(booking["joinedAt"].is_string());
    let booking_id = booking["id"].as_str().unwrap();

    // Exactly one CREATED audit record so far.
    let response = get(
        app.clone(),
        &format!("/api/audits/booking?bookingId={booking_id}"),
    )
    .await;
    let audits = body_json(response).await;
    assert_eq!(audits.as_array().unwrap().len(), 1);
    assert_eq!(audits[0]["action"], "CREATED");
    assert!(audits[0]["details"]
        .as_str()
        .unwrap()
        .contains(customer["id"].as_str().unwrap()));

    // Move the booking to completed.
    let response = put_json(
        app.clone(),
        &format!("/api/bookings/{booking_id}/status"),
        serde_json::json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "completed");

    // The trail now holds both mutations, in order, naming old and new status.
    let response = get(
        app,
        &format!("/api/audits/booking?bookingId={booking_id}"),
    )
    .await;
    let audits = body_json(response).await;
    assert_eq!(audits.as_array().unwrap().len(), 2);
    assert_eq!(audits[1]["action"], "UPDATED");
    assert_eq!(
        audits[1]["details"],
        "Status changed from confirmed to completed"
    );
}

// ---------------------------------------------------------------------------
// Listing filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn booking_list_filters_by_customer_and_shop() {
    let app = common::build_test_app();
    let customer_a = create_customer(app.clone(), "A", "a@example.com", "pw").await;
    let customer_b = create_customer(app.clone(), "B", "b@example.com", "pw").await;
    let shop = create_shop(app.clone(), "Shop", "spa").await;
    let line = create_service_line(app.clone(), shop["id"].as_str().unwrap(), "Massage").await;

    for customer in [&customer_a, &customer_b] {
        let response = post_json(
            app.clone(),
            "/api/bookings",
            serde_json::json!({
                "customerId": customer["id"],
                "shopId": shop["id"],
                "serviceLineId": line["id"],
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let customer_a_id = customer_a["id"].as_str().unwrap();
    let response = get(
        app.clone(),
        &format!("/api/bookings?customerId={customer_a_id}"),
    )
    .await;
    let bookings = body_json(response).await;
    assert_eq!(bookings.as_array().unwrap().len(), 1);
    assert_eq!(bookings[0]["customerId"], customer_a["id"]);

    let shop_id = shop["id"].as_str().unwrap();
    let response = get(app, &format!("/api/bookings?shopId={shop_id}")).await;
    let bookings = body_json(response).await;
    assert_eq!(bookings.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Error cases
// ---------------------------------------------------------------------------

/// Updating the status of an unknown booking is a 404, and must not append
/// any audit record.
#[tokio::test]
async fn status_update_on_unknown_booking_is_404_without_audit() {
    let app = common::build_test_app();
    let ghost = uuid::Uuid::new_v4();

    let response = put_json(
        app.clone(),
        &format!("/api/bookings/{ghost}/status"),
        serde_json::json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].is_string());

    let response = get(app, "/api/audits/booking").await;
    let audits = body_json(response).await;
    assert!(audits.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_unknown_booking_is_404() {
    let app = common::build_test_app();
    let ghost = uuid::Uuid::new_v4();

    let response = get(app, &format!("/api/bookings/{ghost}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
