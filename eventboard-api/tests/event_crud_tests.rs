/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Integration tests for event CRUD endpoints.


use axum::body::Body;
use axum::http::{Request, StatusCode};
use eventboard_types::{ErrorBody, Event};
use serde_json::{json, Value};
use test_helpers::*;

async fn create(app: &axum::Router, body: Value) -> Event {
    let resp = send(app, json_request("POST", "/api/events", body)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    response_json(resp).await
}

// ── Create ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_event_returns_assigned_id() {
    let app = build_app();

    let resp = send(
        &app,
        json_request("POST", "/api/events", json!({ "title": "Launch", "location": "HQ" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = response_json(resp).await;
    assert_eq!(body["title"], "Launch");
    assert_eq!(body["location"], "HQ");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_create_then_get_returns_identical_object() {
    let app = build_app();

    let created: Value = response_json(
        send(
            &app,
            json_request("POST", "/api/events", json!({ "title": "Launch", "location": "HQ" })),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let resp = send(&app, empty_request("GET", &format!("/api/events/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = response_json(resp).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_full_event_round_trips_every_field() {
    let app = build_app();
    let full = json!({
        "title": "Spring Gala",
        "location": "Main Hall",
        "description": "Annual fundraiser",
        "startTime": "2025-04-12T18:00:00Z",
        "endTime": "2025-04-12T23:00:00Z",
        "picture": "https://cdn.example.com/gala.png",
        "detailPicture": "https://cdn.example.com/gala-detail.png",
        "subscriptionUrl": "https://forms.example.com/gala",
        "requiredToFillInForm": true
    });

    let created = create(&app, full).await;
    let resp = send(&app, empty_request("GET", &format!("/api/events/{}", created.id))).await;
    let fetched: Event = response_json(resp).await;

    assert_eq!(fetched, created);
    assert_eq!(fetched.fields.title.as_deref(), Some("Spring Gala"));
    assert_eq!(fetched.fields.description.as_deref(), Some("Annual fundraiser"));
    assert_eq!(
        fetched.fields.subscription_url.as_deref(),
        Some("https://forms.example.com/gala")
    );
    assert_eq!(fetched.fields.required_to_fill_in_form, Some(true));
    assert!(fetched.fields.start_time < fetched.fields.end_time);
}

#[tokio::test]
async fn test_create_empty_body_is_accepted() {
    let app = build_app();
    let created = create(&app, json!({})).await;
    let body = serde_json::to_value(&created).unwrap();
    assert_eq!(body, json!({ "id": created.id }));
}

#[tokio::test]
async fn test_create_from_form_body() {
    let app = build_app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/events")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from("title=Launch&location=HQ"))
        .unwrap();

    let resp = send(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let event: Event = response_json(resp).await;
    assert_eq!(event.fields.title.as_deref(), Some("Launch"));
    assert_eq!(event.fields.location.as_deref(), Some("HQ"));
}

#[tokio::test]
async fn test_create_accepts_date_only_and_datetime_local_times() {
    let app = build_app();

    let created: Value = response_json(
        send(
            &app,
            json_request(
                "POST",
                "/api/events",
                json!({ "startTime": "2024-03-04", "endTime": "2024-03-04T10:00" }),
            ),
        )
        .await,
    )
    .await;
    assert_eq!(created["startTime"], "2024-03-04T00:00:00Z");
    assert_eq!(created["endTime"], "2024-03-04T10:00:00Z");

    let resp = send(
        &app,
        json_request(
            "POST",
            "/api/events",
            json!({ "startTime": "2024-03-04T10:00:00Z" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = response_json(resp).await;
    assert_eq!(body["startTime"], "2024-03-04T10:00:00Z");
}

#[tokio::test]
async fn test_create_form_with_datetime_local_time() {
    let app = build_app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/events")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from("title=Launch&startTime=2024-03-04T10%3A00"))
        .unwrap();

    let resp = send(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = response_json(resp).await;
    assert_eq!(body["startTime"], "2024-03-04T10:00:00Z");
}

#[tokio::test]
async fn test_create_without_body_or_content_type_is_empty_event() {
    let app = build_app();

    let resp = send(&app, empty_request("POST", "/api/events")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let event: Event = response_json(resp).await;
    assert!(!event.id.is_empty());
    assert_eq!(event.fields, Default::default());
}

// ── List ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_events_starts_empty() {
    let app = build_app();
    let resp = send(&app, empty_request("GET", "/api/events")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let events: Vec<Event> = response_json(resp).await;
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_list_events_returns_every_event() {
    let app = build_app();
    let a = create(&app, json!({ "title": "A" })).await;
    let b = create(&app, json!({ "title": "B" })).await;

    let resp = send(&app, empty_request("GET", "/api/events")).await;
    let events: Vec<Event> = response_json(resp).await;
    assert_eq!(events, vec![a, b]);
}

// ── Update ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_preserves_unspecified_fields() {
    let app = build_app();
    let created = create(
        &app,
        json!({ "title": "Launch", "location": "HQ", "description": "Product launch" }),
    )
    .await;

    let resp = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/events/{}", created.id),
            json!({ "location": "Rooftop" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Event = response_json(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.fields.title.as_deref(), Some("Launch"));
    assert_eq!(updated.fields.location.as_deref(), Some("Rooftop"));
    assert_eq!(updated.fields.description.as_deref(), Some("Product launch"));

    let resp = send(&app, empty_request("GET", &format!("/api/events/{}", created.id))).await;
    let fetched: Event = response_json(resp).await;
    assert_eq!(fetched, updated);
}

// ── Delete ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_returns_event_then_get_is_404() {
    let app = build_app();
    let created = create(&app, json!({ "title": "Launch" })).await;
    let uri = format!("/api/events/{}", created.id);

    let resp = send(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: Event = response_json(resp).await;
    assert_eq!(deleted, created);

    let resp = send(&app, empty_request("GET", &uri)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ── Not found ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unknown_id_is_404_for_get_update_delete() {
    let app = build_app();
    let kept = create(&app, json!({ "title": "Keep me" })).await;

    let requests = [
        empty_request("GET", "/api/events/does-not-exist"),
        json_request("PUT", "/api/events/does-not-exist", json!({ "title": "x" })),
        empty_request("DELETE", "/api/events/does-not-exist"),
    ];
    for req in requests {
        let resp = send(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = response_json(resp).await;
        assert_eq!(body.error, "Event not found");
    }

    let resp = send(&app, empty_request("GET", "/api/events")).await;
    let events: Vec<Event> = response_json(resp).await;
    assert_eq!(events, vec![kept]);
}

// ── Internal errors ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_store_failure_is_generic_500() {
    let app = build_failing_app();

    let requests = [
        json_request("POST", "/api/events", json!({ "title": "Launch" })),
        empty_request("GET", "/api/events"),
        empty_request("GET", "/api/events/abc"),
        json_request("PUT", "/api/events/abc", json!({ "title": "x" })),
        empty_request("DELETE", "/api/events/abc"),
    ];
    for req in requests {
        let resp = send(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = response_json(resp).await;
        assert_eq!(body.error, "Internal Server Error");
    }
}
