// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use railway_tracker::config::Config;
use railway_tracker::db::LocalStore;
use railway_tracker::models::Station;
use railway_tracker::routes::create_router;
use railway_tracker::services::{DistanceResolver, FallbackPolicy, RailwayService};
use railway_tracker::AppState;
use std::sync::Arc;

/// Create a railway service over `store` with a deterministic fallback.
#[allow(dead_code)]
pub fn test_service(store: LocalStore, award_badges: bool) -> RailwayService {
    RailwayService::new(
        store,
        DistanceResolver::new(FallbackPolicy::Deterministic { seed: 1 }),
        award_badges,
    )
}

/// Look up a catalog station, panicking on unknown ids.
#[allow(dead_code)]
pub fn station(id: &str) -> &'static Station {
    railway_tracker::catalog::station(id).expect("unknown test station")
}

/// Create a test app over `store`, already loaded.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app_with(store: LocalStore) -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let railway = test_service(store, config.award_badges);
    railway.load().await;

    let state = Arc::new(AppState { config, railway });

    (create_router(state.clone()), state)
}

/// Create a test app with an empty in-memory store.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(LocalStore::in_memory()).await
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Body is not JSON")
}
