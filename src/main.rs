// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Railway-Tracker local API server
//!
//! Loads the stored trip ledger and badges, then serves them to the
//! presentation layer.

use railway_tracker::{
    config::Config,
    db::LocalStore,
    services::{DistanceResolver, RailwayService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        data_dir = %config.data_dir.display(),
        fallback = ?config.distance_fallback,
        award_badges = config.award_badges,
        "Starting Railway-Tracker"
    );

    let store = LocalStore::open(&config.data_dir);
    let railway = RailwayService::new(
        store,
        DistanceResolver::new(config.distance_fallback),
        config.award_badges,
    );
    railway.load().await;

    let state = Arc::new(AppState {
        config: config.clone(),
        railway,
    });

    let app = railway_tracker::routes::create_router(state);

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("railway_tracker=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
