// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for the presentation layer.
//!
//! Input validation happens here, before anything reaches the ledger.

use crate::catalog::{self, BADGES, STATIONS};
use crate::error::{AppError, Result};
use crate::models::{
    Badge, LeaderboardEntry, RedeemedReward, Reward, RewardCategory, Station, Trip, User,
    UserStats,
};
use crate::services::badges::{self, BadgeProgress};
use crate::services::rewards;
use crate::time_utils::parse_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/user", get(get_user))
        .route("/api/stations", get(get_stations))
        .route("/api/trips", get(get_trips).post(add_trip))
        .route("/api/stats", get(get_stats))
        .route("/api/badges", get(get_badges))
        .route("/api/badges/{badge_id}/seen", post(mark_badge_seen))
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/rewards", get(get_rewards))
        .route("/api/rewards/redeemed", get(get_redeemed_rewards))
        .route("/api/rewards/{reward_id}/redeem", post(redeem_reward))
}

// ─── Reference Data ──────────────────────────────────────────

async fn get_user(State(state): State<Arc<AppState>>) -> Json<User> {
    Json(state.railway.user().await.as_ref().clone())
}

async fn get_stations() -> Json<Vec<Station>> {
    Json(STATIONS.clone())
}

// ─── Trips ───────────────────────────────────────────────────

async fn get_trips(State(state): State<Arc<AppState>>) -> Json<Vec<Trip>> {
    Json(state.railway.trips().await.to_vec())
}

/// Request body for `POST /api/trips`. Field names are snake_case on the
/// wire, unlike the camelCase response bodies.
#[derive(Debug, Deserialize)]
pub struct AddTripRequest {
    pub from_station_id: String,
    pub to_station_id: String,
    /// Journey time (RFC3339); defaults to now
    pub date: Option<String>,
}

/// Look up both stations and reject a trip that starts where it ends.
pub fn validate_trip_stations(
    from_station_id: &str,
    to_station_id: &str,
) -> Result<(&'static Station, &'static Station)> {
    let from = catalog::station(from_station_id)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown station: {}", from_station_id)))?;
    let to = catalog::station(to_station_id)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown station: {}", to_station_id)))?;

    if from.id == to.id {
        return Err(AppError::BadRequest(
            "Departure and arrival stations must be different".to_string(),
        ));
    }

    Ok((from, to))
}

fn parse_trip_date(date: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    date.map(|raw| {
        parse_utc_rfc3339(raw).ok_or_else(|| {
            AppError::BadRequest("Invalid 'date': must be RFC3339 datetime".to_string())
        })
    })
    .transpose()
}

async fn add_trip(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddTripRequest>,
) -> Result<(StatusCode, Json<Trip>)> {
    let (from, to) = validate_trip_stations(&request.from_station_id, &request.to_station_id)?;
    let when = parse_trip_date(request.date.as_deref())?;

    let trip = state.railway.add_trip(from, to, when).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}

// ─── Stats & Badges ──────────────────────────────────────────

async fn get_stats(State(state): State<Arc<AppState>>) -> Json<UserStats> {
    Json(state.railway.user_stats().await)
}

/// A catalog badge with the user's unlock state.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BadgeView {
    pub badge: Badge,
    pub unlocked_at: Option<DateTime<Utc>>,
    pub is_new: bool,
    pub progress: BadgeProgress,
}

async fn get_badges(State(state): State<Arc<AppState>>) -> Json<Vec<BadgeView>> {
    let owned = state.railway.user_badges().await;
    let stats = state.railway.user_stats().await;

    let views = BADGES
        .iter()
        .map(|badge| {
            let unlock = owned.iter().find(|b| b.badge_id == badge.id);
            BadgeView {
                badge: badge.clone(),
                unlocked_at: unlock.map(|b| b.unlocked_at),
                is_new: unlock.is_some_and(|b| b.is_new),
                progress: badges::progress(badge, &stats),
            }
        })
        .collect();

    Json(views)
}

async fn mark_badge_seen(
    State(state): State<Arc<AppState>>,
    Path(badge_id): Path<String>,
) -> Result<StatusCode> {
    if catalog::badge_by_id(&badge_id).is_none() {
        return Err(AppError::NotFound(format!("Badge {} not found", badge_id)));
    }

    state.railway.mark_badge_as_seen(&badge_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─── Leaderboard ─────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
    pub current_user: UserStats,
}

async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Json<LeaderboardResponse> {
    Json(LeaderboardResponse {
        entries: catalog::sample_leaderboard(),
        current_user: state.railway.user_stats().await,
    })
}

// ─── Rewards ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct RewardsQuery {
    /// Filter by category; omit for all
    category: Option<RewardCategory>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RewardView {
    #[serde(flatten)]
    pub reward: Reward,
    pub can_afford: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RewardsResponse {
    pub points: u64,
    pub rewards: Vec<RewardView>,
}

async fn get_rewards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RewardsQuery>,
) -> Json<RewardsResponse> {
    let points = state.railway.user_stats().await.points;
    let rewards = rewards::rewards_in(params.category)
        .into_iter()
        .map(|reward| RewardView {
            reward: reward.clone(),
            can_afford: reward.can_afford(points),
        })
        .collect();

    Json(RewardsResponse { points, rewards })
}

async fn get_redeemed_rewards(State(state): State<Arc<AppState>>) -> Json<Vec<RedeemedReward>> {
    Json(state.railway.redeemed_rewards().await.to_vec())
}

async fn redeem_reward(
    State(state): State<Arc<AppState>>,
    Path(reward_id): Path<String>,
) -> Result<Json<RedeemedReward>> {
    let redeemed = state.railway.redeem_reward(&reward_id).await?;
    Ok(Json(redeemed))
}
