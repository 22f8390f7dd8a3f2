mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::TestApp;

async fn create_venue(app: &TestApp, token: &str, body: Value) -> Value {
    let response = app.server.post("/api/venues/").authorization_bearer(token).json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_anonymous_requests_are_unauthorized() {
    let app = TestApp::new();

    app.server.get("/api/venues/").await.assert_status(StatusCode::UNAUTHORIZED);
    app.server.get("/api/venues/1/").await.assert_status(StatusCode::UNAUTHORIZED);
    app.server.get("/api/groups/").await.assert_status(StatusCode::UNAUTHORIZED);

    let body: Value = app.server.post("/api/venues/").json(&json!({})).await.json();
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_regular_user_only_lists_own_venues() {
    let app = TestApp::new();
    let owner = app.regular().await;
    let other = app.regular().await;

    let mine = create_venue(&app, &owner.token, json!({ "venue_name": "Smalls" })).await;
    create_venue(&app, &other.token, json!({ "venue_name": "Elsewhere" })).await;

    let response = app.server.get("/api/venues/").authorization_bearer(&owner.token).await;
    response.assert_status_ok();
    let venues: Vec<Value> = response.json();
    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0]["id"], mine["id"]);
    // list uses the summary representation
    assert!(venues[0].get("primary_contact").is_none());
}

#[tokio::test]
async fn test_admin_lists_all_venues_newest_first() {
    let app = TestApp::new();
    let first = app.regular().await;
    let second = app.regular().await;
    let admin = app.superuser().await;

    let a = create_venue(&app, &first.token, json!({ "venue_name": "A" })).await;
    let b = create_venue(&app, &second.token, json!({ "venue_name": "B" })).await;

    let venues: Vec<Value> =
        app.server.get("/api/venues/").authorization_bearer(&admin.token).await.json();
    let ids: Vec<&Value> = venues.iter().map(|v| &v["id"]).collect();
    assert_eq!(ids, vec![&b["id"], &a["id"]]);
}

#[tokio::test]
async fn test_regular_user_is_always_primary_contact() {
    let app = TestApp::new();
    let user = app.regular().await;
    let other = app.regular().await;

    let venue = create_venue(
        &app,
        &user.token,
        json!({ "venue_name": "Created Venue", "primary_contact": other.user.id, "id": 999 }),
    )
    .await;

    assert_eq!(venue["primary_contact"], user.user.id);
    assert_ne!(venue["id"], 999);
}

#[tokio::test]
async fn test_staff_may_set_or_omit_contact() {
    let app = TestApp::new();
    let staff = app.staff().await;
    let user = app.regular().await;

    let assigned = create_venue(&app, &staff.token, json!({ "primary_contact": user.user.id })).await;
    assert_eq!(assigned["primary_contact"], user.user.id);

    let unowned = create_venue(&app, &staff.token, json!({ "venue_name": "No contact" })).await;
    assert!(unowned["primary_contact"].is_null());

    app.server
        .post("/api/venues/")
        .authorization_bearer(&staff.token)
        .json(&json!({ "primary_contact": 4242 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_admin_contact_change_is_ignored() {
    let app = TestApp::new();
    let owner = app.regular().await;
    let other = app.regular().await;
    let venue = create_venue(&app, &owner.token, json!({ "venue_name": "Smalls" })).await;
    let url = format!("/api/venues/{}/", venue["id"]);

    let response = app
        .server
        .patch(&url)
        .authorization_bearer(&owner.token)
        .json(&json!({ "primary_contact": other.user.id, "address": "10339 Conant" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["primary_contact"], owner.user.id);
    assert_eq!(body["address"], "10339 Conant");
    assert_eq!(body["venue_name"], "Smalls");

    let put = app
        .server
        .put(&url)
        .authorization_bearer(&owner.token)
        .json(&json!({ "venue_name": "Changed", "address": null }))
        .await;
    put.assert_status_ok();
    let body: Value = put.json();
    assert_eq!(body["venue_name"], "Changed");
    assert!(body["address"].is_null());
}

#[tokio::test]
async fn test_staff_without_superuser_cannot_reassign() {
    let app = TestApp::new();
    let owner = app.regular().await;
    let staff = app.staff().await;
    let venue = create_venue(&app, &owner.token, json!({})).await;

    let body: Value = app
        .server
        .patch(&format!("/api/venues/{}/", venue["id"]))
        .authorization_bearer(&staff.token)
        .json(&json!({ "primary_contact": staff.user.id }))
        .await
        .json();
    assert_eq!(body["primary_contact"], owner.user.id);
}

#[tokio::test]
async fn test_superuser_reassigns_contact() {
    let app = TestApp::new();
    let owner = app.regular().await;
    let other = app.regular().await;
    let admin = app.superuser().await;
    let venue = create_venue(&app, &owner.token, json!({})).await;

    let response = app
        .server
        .patch(&format!("/api/venues/{}/", venue["id"]))
        .authorization_bearer(&admin.token)
        .json(&json!({ "primary_contact": other.user.id }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["primary_contact"], other.user.id);
}

#[tokio::test]
async fn test_foreign_venue_is_not_found() {
    let app = TestApp::new();
    let owner = app.regular().await;
    let stranger = app.regular().await;
    let venue = create_venue(&app, &owner.token, json!({ "venue_name": "Private" })).await;
    let url = format!("/api/venues/{}/", venue["id"]);

    app.server.get(&url).authorization_bearer(&stranger.token).await.assert_status(StatusCode::NOT_FOUND);
    app.server
        .delete(&url)
        .authorization_bearer(&stranger.token)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server.get(&url).authorization_bearer(&owner.token).await.assert_status_ok();
}

#[tokio::test]
async fn test_deleted_venue_is_gone() {
    let app = TestApp::new();
    let owner = app.regular().await;
    let root = app.superuser().await;
    let venue = create_venue(&app, &owner.token, json!({ "venue_name": "Short lived" })).await;
    let url = format!("/api/venues/{}/", venue["id"]);

    app.server.get(&url).authorization_bearer(&root.token).await.assert_status_ok();
    app.server
        .delete(&url)
        .authorization_bearer(&owner.token)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    for caller in [&owner, &root] {
        app.server
            .get(&url)
            .authorization_bearer(&caller.token)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = TestApp::new();
    let owner = app.regular().await;
    app.server
        .get("/api/venues/abc/")
        .authorization_bearer(&owner.token)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
