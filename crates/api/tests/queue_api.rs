//! HTTP-level integration tests for the walk-in queue endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_service_line, create_shop, delete, get, post_json, put_json};

fn entry_body(service_line_id: &serde_json::Value, user_id: &str) -> serde_json::Value {
    serde_json::json!({
        "serviceLineId": service_line_id,
        "userId": user_id,
        "userName": format!("user {user_id}"),
        "joinedAt": "2026-08-25T10:00:00Z",
        "status": "waiting",
        "estimatedMinutes": 15,
    })
}

// ---------------------------------------------------------------------------
// Joining and reading
// ---------------------------------------------------------------------------

/// Entries are stored exactly as supplied, status and join time included.
#[tokio::test]
async fn join_persists_entry_as_supplied() {
    let app = common::build_test_app();
    let shop = create_shop(app.clone(), "Shop", "haircut").await;
    let line = create_service_line(app.clone(), shop["id"].as_str().unwrap(), "Cut").await;

    let mut body = entry_body(&line["id"], "u1");
    body["status"] = "serving".into();

    let response = post_json(app.clone(), "/api/queue-entries", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let entry = body_json(response).await;
    assert_eq!(entry["status"], "serving");
    assert_eq!(entry["joinedAt"], "2026-08-25T10:00:00Z");
    assert_eq!(entry["estimatedMinutes"], 15);
}

/// The per-line listing returns entries in join order (FIFO).
#[tokio::test]
async fn service_line_listing_is_in_join_order() {
    let app = common::build_test_app();
    let shop = create_shop(app.clone(), "Shop", "haircut").await;
    let line = create_service_line(app.clone(), shop["id"].as_str().unwrap(), "Cut").await;
    let other = create_service_line(app.clone(), shop["id"].as_str().unwrap(), "Shave").await;

    for user in ["u1", "u2"] {
        post_json(app.clone(), "/api/queue-entries", entry_body(&line["id"], user)).await;
    }
    post_json(app.clone(), "/api/queue-entries", entry_body(&other["id"], "u3")).await;

    let line_id = line["id"].as_str().unwrap();
    let response = get(
        app.clone(),
        &format!("/api/queue-entries/service-line/{line_id}"),
    )
    .await;
    let entries = body_json(response).await;
    assert_eq!(entries.as_array().unwrap().len(), 2);
    assert_eq!(entries[0]["userId"], "u1");
    assert_eq!(entries[1]["userId"], "u2");

    let response = get(app, "/api/queue-entries/user/u3").await;
    let entries = body_json(response).await;
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["serviceLineId"], other["id"]);
}

// ---------------------------------------------------------------------------
// Updating and leaving
// ---------------------------------------------------------------------------

/// Only status and the wait estimate can change after joining.
#[tokio::test]
async fn update_changes_only_status_and_estimate() {
    let app = common::build_test_app();
    let shop = create_shop(app.clone(), "Shop", "haircut").await;
    let line = create_service_line(app.clone(), shop["id"].as_str().unwrap(), "Cut").await;

    let response = post_json(app.clone(), "/api/queue-entries", entry_body(&line["id"], "u1")).await;
    let entry = body_json(response).await;
    let entry_id = entry["id"].as_str().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/queue-entries/{entry_id}"),
        serde_json::json!({ "status": "serving", "estimatedMinutes": 2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["status"], "serving");
    assert_eq!(updated["estimatedMinutes"], 2);
    assert_eq!(updated["userId"], entry["userId"]);
    assert_eq!(updated["joinedAt"], entry["joinedAt"]);
}

#[tokio::test]
async fn update_unknown_entry_is_404() {
    let app = common::build_test_app();
    let ghost = uuid::Uuid::new_v4();

    let response = put_json(
        app,
        &format!("/api/queue-entries/{ghost}"),
        serde_json::json!({ "status": "serving", "estimatedMinutes": 2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Leaving is idempotent: a second delete, or a delete of a never-seen id,
/// still returns 204.
#[tokio::test]
async fn delete_is_idempotent() {
    let app = common::build_test_app();
    let shop = create_shop(app.clone(), "Shop", "haircut").await;
    let line = create_service_line(app.clone(), shop["id"].as_str().unwrap(), "Cut").await;

    let response = post_json(app.clone(), "/api/queue-entries", entry_body(&line["id"], "u1")).await;
    let entry = body_json(response).await;
    let entry_id = entry["id"].as_str().unwrap();

    let response = delete(app.clone(), &format!("/api/queue-entries/{entry_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(app.clone(), &format!("/api/queue-entries/{entry_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let ghost = uuid::Uuid::new_v4();
    let response = delete(app.clone(), &format!("/api/queue-entries/{ghost}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, "/api/queue-entries").await;
    let entries = body_json(response).await;
    assert!(entries.as_array().unwrap().is_empty());
}
