// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip API tests.
//!
//! These tests verify that:
//! 1. Invalid trips are rejected before reaching the ledger
//! 2. Accepted trips show up in the trip list and the stats

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use railway_tracker::db::LocalStore;
use tower::ServiceExt;

mod common;

fn post_trip(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/trips")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _state) = common::create_test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["loading"], false);
    assert_eq!(json["award_badges"], true);
}

#[tokio::test]
async fn test_same_station_rejected() {
    let (app, state) = common::create_test_app().await;

    let response = app
        .oneshot(post_trip(r#"{"from_station_id": "1", "to_station_id": "1"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    // The ledger never saw it
    assert!(state.railway.trips().await.is_empty());
}

#[tokio::test]
async fn test_unknown_station_rejected() {
    let (app, state) = common::create_test_app().await;

    let response = app
        .oneshot(post_trip(r#"{"from_station_id": "1", "to_station_id": "99"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(state.railway.trips().await.is_empty());
}

#[tokio::test]
async fn test_invalid_date_rejected() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .oneshot(post_trip(
            r#"{"from_station_id": "1", "to_station_id": "2", "date": "tomorrow"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_trip_created() {
    let (app, state) = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(post_trip(
            r#"{"from_station_id": "1", "to_station_id": "2", "date": "2024-03-01T09:15:00Z"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let trip = common::body_json(response).await;
    assert_eq!(trip["distance"], 225.0);
    assert_eq!(trip["co2Saved"], 38.03);
    assert_eq!(trip["fromStation"]["name"], "Central Station");
    assert_eq!(trip["toStation"]["name"], "Union Station");
    assert_eq!(trip["date"], "2024-03-01T09:15:00Z");

    assert_eq!(state.railway.trips().await.len(), 1);

    let response = app.oneshot(get("/api/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stats = common::body_json(response).await;
    assert_eq!(stats["totalTrips"], 1);
    assert_eq!(stats["uniqueStations"], 2);
    assert_eq!(stats["totalDistance"], 225);
    assert_eq!(stats["points"], 10 + 2 * 5 + 22);
    assert_eq!(stats["rank"], 1);
}

#[tokio::test]
async fn test_storage_failure_returns_500_but_keeps_trip() {
    let (app, state) = common::create_test_app_with(LocalStore::new_offline()).await;

    let response = app
        .oneshot(post_trip(r#"{"from_station_id": "5", "to_station_id": "6"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "storage_error");
    assert_eq!(state.railway.trips().await.len(), 1);
}

#[tokio::test]
async fn test_badges_view_after_first_trip() {
    let (app, _state) = common::create_test_app().await;

    app.clone()
        .oneshot(post_trip(r#"{"from_station_id": "9", "to_station_id": "10"}"#))
        .await
        .unwrap();

    let response = app.clone().oneshot(get("/api/badges")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let badges = common::body_json(response).await;
    let badges = badges.as_array().unwrap();
    assert_eq!(badges.len(), 7);

    let first = &badges[0];
    assert_eq!(first["badge"]["id"], "first-ride");
    assert_eq!(first["isNew"], true);
    assert!(first["unlockedAt"].is_string());

    let explorer = &badges[1];
    assert_eq!(explorer["badge"]["id"], "explorer");
    assert!(explorer["unlockedAt"].is_null());
    assert_eq!(explorer["progress"]["current"], 2.0);
    assert_eq!(explorer["progress"]["target"], 5.0);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/badges/first-ride/seen")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/api/badges")).await.unwrap();
    let badges = common::body_json(response).await;
    assert_eq!(badges[0]["isNew"], false);
}

#[tokio::test]
async fn test_mark_unknown_badge_not_found() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/badges/no-such-badge/seen")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stations_listed() {
    let (app, _state) = common::create_test_app().await;

    let response = app.oneshot(get("/api/stations")).await.unwrap();

    let stations = common::body_json(response).await;
    assert_eq!(stations.as_array().unwrap().len(), 10);
    assert_eq!(stations[4]["name"], "King's Cross");
}
