// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Railway state holder.
//!
//! Owns the trip ledger and the unlocked-badge list for the local user.
//! Handles the core workflow for a new trip:
//! 1. Resolve the distance and CO₂ savings
//! 2. Append to the ledger and persist the full ledger
//! 3. Evaluate badge requirements against the new stats (if enabled)
//!
//! Collections are held as `Arc<Vec<_>>` snapshots that are replaced whole on
//! every mutation, so readers never observe a partial update. Mutations are
//! serialized by a single writer lock.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::catalog::{self, BADGES};
use crate::db::{keys, LocalStore};
use crate::error::{AppError, Result};
use crate::models::{compute_stats, RedeemedReward, Station, Trip, User, UserBadge, UserStats};
use crate::services::{badges, emissions, rewards, DistanceResolver};
use crate::time_utils::timestamp_id;

#[derive(Clone)]
struct Snapshot {
    user: Arc<User>,
    trips: Arc<Vec<Trip>>,
    badges: Arc<Vec<UserBadge>>,
    redeemed: Arc<Vec<RedeemedReward>>,
}

/// The local user's trips, badges and derived stats.
pub struct RailwayService {
    store: LocalStore,
    resolver: DistanceResolver,
    award_badges: bool,
    state: RwLock<Snapshot>,
    writer: Mutex<()>,
    loading: AtomicBool,
}

impl RailwayService {
    /// Create an empty service. Call [`RailwayService::load`] before use.
    pub fn new(store: LocalStore, resolver: DistanceResolver, award_badges: bool) -> Self {
        Self {
            store,
            resolver,
            award_badges,
            state: RwLock::new(Snapshot {
                user: Arc::new(catalog::default_user()),
                trips: Arc::new(Vec::new()),
                badges: Arc::new(Vec::new()),
                redeemed: Arc::new(Vec::new()),
            }),
            writer: Mutex::new(()),
            loading: AtomicBool::new(true),
        }
    }

    /// Read stored collections.
    ///
    /// A key that cannot be read or parsed is logged and treated as empty.
    pub async fn load(&self) {
        let (user, trips, badges) = tokio::join!(
            self.store.load_json::<User>(keys::USER),
            self.store.load_json::<Vec<Trip>>(keys::TRIPS),
            self.store.load_json::<Vec<UserBadge>>(keys::BADGES),
        );

        let user = or_empty(keys::USER, user).unwrap_or_else(catalog::default_user);
        let trips = or_empty(keys::TRIPS, trips).unwrap_or_default();
        let badges = or_empty(keys::BADGES, badges).unwrap_or_default();

        tracing::info!(
            user_id = %user.id,
            trips = trips.len(),
            badges = badges.len(),
            "Loaded railway data"
        );

        {
            let _guard = self.writer.lock().await;
            let mut state = self.state.write().await;
            state.user = Arc::new(user);
            state.trips = Arc::new(trips);
            state.badges = Arc::new(badges);
        }
        self.loading.store(false, Ordering::Release);
    }

    /// True until the first [`RailwayService::load`] completes.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub async fn user(&self) -> Arc<User> {
        self.state.read().await.user.clone()
    }

    /// Trips in insertion order.
    pub async fn trips(&self) -> Arc<Vec<Trip>> {
        self.state.read().await.trips.clone()
    }

    pub async fn user_badges(&self) -> Arc<Vec<UserBadge>> {
        self.state.read().await.badges.clone()
    }

    /// Rewards redeemed during this process lifetime.
    pub async fn redeemed_rewards(&self) -> Arc<Vec<RedeemedReward>> {
        self.state.read().await.redeemed.clone()
    }

    /// Stats recomputed from the current ledger.
    pub async fn user_stats(&self) -> UserStats {
        compute_stats(&self.trips().await)
    }

    /// Log a trip between two distinct stations.
    ///
    /// Callers must reject `origin == destination` beforehand; the ledger does
    /// not check. If persisting fails the error is returned but the trip stays
    /// in memory.
    pub async fn add_trip(
        &self,
        origin: &Station,
        destination: &Station,
        when: Option<DateTime<Utc>>,
    ) -> Result<Trip> {
        let _guard = self.writer.lock().await;

        let current = self.state.read().await.clone();
        let now = Utc::now();

        let distance = self.resolver.resolve_stations(origin, destination);
        let trip = Trip {
            id: timestamp_id(now, current.trips.last().map(|t| t.id.as_str())),
            user_id: current.user.id.clone(),
            from_station: origin.clone(),
            to_station: destination.clone(),
            date: when.unwrap_or(now),
            distance,
            co2_saved: emissions::co2_saved(distance),
            duration: None,
            train_type: None,
        };

        let mut trips = Vec::with_capacity(current.trips.len() + 1);
        trips.extend(current.trips.iter().cloned());
        trips.push(trip.clone());
        let trips = Arc::new(trips);

        self.state.write().await.trips = trips.clone();

        tracing::info!(
            trip_id = %trip.id,
            from = %origin.id,
            to = %destination.id,
            distance_km = trip.distance,
            co2_saved_kg = trip.co2_saved,
            "Trip added"
        );

        self.store.save_json(keys::TRIPS, trips.as_slice()).await?;

        if self.award_badges {
            self.award_new_badges(&trips, &current.badges, now).await;
        }

        Ok(trip)
    }

    /// Unlock every badge the new ledger satisfies. Failures to persist are
    /// logged; the trip itself is already stored.
    async fn award_new_badges(&self, trips: &[Trip], owned: &[UserBadge], now: DateTime<Utc>) {
        let stats = compute_stats(trips);
        let unlocked = badges::evaluate(&stats, &BADGES, owned, now);
        if unlocked.is_empty() {
            return;
        }

        for badge in &unlocked {
            tracing::info!(badge_id = %badge.badge_id, "Badge unlocked");
        }

        let mut updated = Vec::with_capacity(owned.len() + unlocked.len());
        updated.extend(owned.iter().cloned());
        updated.extend(unlocked);
        let updated = Arc::new(updated);

        self.state.write().await.badges = updated.clone();

        if let Err(e) = self.store.save_json(keys::BADGES, updated.as_slice()).await {
            tracing::error!(error = %e, "Failed to persist unlocked badges");
        }
    }

    /// Acknowledge a badge: clear its `is_new` flag and persist the list.
    pub async fn mark_badge_as_seen(&self, badge_id: &str) -> Result<()> {
        let _guard = self.writer.lock().await;

        let current = self.state.read().await.badges.clone();
        let updated: Vec<UserBadge> = current
            .iter()
            .map(|b| {
                if b.badge_id == badge_id {
                    UserBadge {
                        is_new: false,
                        ..b.clone()
                    }
                } else {
                    b.clone()
                }
            })
            .collect();
        let updated = Arc::new(updated);

        self.state.write().await.badges = updated.clone();
        tracing::debug!(badge_id, "Badge marked as seen");

        self.store.save_json(keys::BADGES, updated.as_slice()).await
    }

    /// Redeem a reward if the current points cover it.
    pub async fn redeem_reward(&self, reward_id: &str) -> Result<RedeemedReward> {
        let _guard = self.writer.lock().await;

        let reward = catalog::reward(reward_id)
            .ok_or_else(|| AppError::NotFound(format!("Reward {} not found", reward_id)))?;
        let points = self.user_stats().await.points;

        let redeemed = rewards::redeem(reward, points, Utc::now(), &mut rand::thread_rng())?;

        let mut state = self.state.write().await;
        let mut list = Vec::with_capacity(state.redeemed.len() + 1);
        list.extend(state.redeemed.iter().cloned());
        list.push(redeemed.clone());
        state.redeemed = Arc::new(list);

        tracing::info!(reward_id, points, "Reward redeemed");
        Ok(redeemed)
    }
}

fn or_empty<T>(key: &str, loaded: Result<Option<T>>) -> Option<T> {
    match loaded {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(key, error = %e, "Error loading data");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::distance::FallbackPolicy;

    fn service(store: LocalStore, award_badges: bool) -> RailwayService {
        RailwayService::new(
            store,
            DistanceResolver::new(FallbackPolicy::Deterministic { seed: 7 }),
            award_badges,
        )
    }

    fn station(id: &str) -> &'static Station {
        catalog::station(id).unwrap()
    }

    #[tokio::test]
    async fn test_loading_flag_cleared_by_load() {
        let svc = service(LocalStore::in_memory(), false);
        assert!(svc.is_loading());
        svc.load().await;
        assert!(!svc.is_loading());
        assert_eq!(svc.user().await.name, "Alex Johnson");
    }

    #[tokio::test]
    async fn test_add_trip_computes_fields() {
        let svc = service(LocalStore::in_memory(), false);
        svc.load().await;

        let trip = svc.add_trip(station("1"), station("2"), None).await.unwrap();

        assert_eq!(trip.distance, 225.0);
        assert_eq!(trip.co2_saved, 38.03);
        assert_eq!(trip.user_id, "1");
        assert_eq!(svc.trips().await.as_slice(), &[trip]);
    }

    #[tokio::test]
    async fn test_add_trip_uses_supplied_date() {
        let svc = service(LocalStore::in_memory(), false);
        let when = DateTime::from_timestamp(1_705_312_800, 0).unwrap();
        let trip = svc
            .add_trip(station("5"), station("6"), Some(when))
            .await
            .unwrap();
        assert_eq!(trip.date, when);
    }

    #[tokio::test]
    async fn test_ids_unique_and_ordered() {
        let svc = service(LocalStore::in_memory(), false);
        let a = svc.add_trip(station("1"), station("2"), None).await.unwrap();
        let b = svc.add_trip(station("2"), station("1"), None).await.unwrap();
        let c = svc.add_trip(station("1"), station("3"), None).await.unwrap();

        let parse = |t: &Trip| t.id.parse::<i64>().unwrap();
        assert!(parse(&a) < parse(&b));
        assert!(parse(&b) < parse(&c));

        let ids: Vec<String> = svc.trips().await.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn test_snapshot_unchanged_by_later_writes() {
        let svc = service(LocalStore::in_memory(), false);
        svc.add_trip(station("1"), station("2"), None).await.unwrap();

        let before = svc.trips().await;
        svc.add_trip(station("1"), station("4"), None).await.unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(svc.trips().await.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_trip_in_memory() {
        let svc = service(LocalStore::new_offline(), false);
        svc.load().await;
        assert!(!svc.is_loading());

        let result = svc.add_trip(station("1"), station("2"), None).await;

        assert!(matches!(result, Err(AppError::Storage(_))));
        assert_eq!(svc.trips().await.len(), 1);
        assert_eq!(svc.user_stats().await.total_trips, 1);
    }

    #[tokio::test]
    async fn test_badges_awarded_after_trip() {
        let svc = service(LocalStore::in_memory(), true);
        svc.add_trip(station("1"), station("2"), None).await.unwrap();

        let badges = svc.user_badges().await;
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].badge_id, "first-ride");
        assert!(badges[0].is_new);

        // 76.06 kg after the return leg crosses eco-warrior; first-ride stays single
        svc.add_trip(station("2"), station("1"), None).await.unwrap();
        let badges = svc.user_badges().await;
        let ids: Vec<&str> = badges.iter().map(|b| b.badge_id.as_str()).collect();
        assert_eq!(ids, vec!["first-ride", "eco-warrior"]);
        assert!(badges[1].is_new);
    }

    #[tokio::test]
    async fn test_badges_not_awarded_when_disabled() {
        let svc = service(LocalStore::in_memory(), false);
        svc.add_trip(station("1"), station("2"), None).await.unwrap();
        assert!(svc.user_badges().await.is_empty());
    }

    #[tokio::test]
    async fn test_mark_badge_as_seen_only_touches_target() {
        let store = LocalStore::in_memory();
        let at = DateTime::from_timestamp(1_706_000_000, 0).unwrap();
        let stored = vec![
            UserBadge {
                badge_id: "first-ride".to_string(),
                unlocked_at: at,
                is_new: true,
            },
            UserBadge {
                badge_id: "explorer".to_string(),
                unlocked_at: at,
                is_new: true,
            },
        ];
        store.save_json(keys::BADGES, &stored).await.unwrap();

        let svc = service(store.clone(), false);
        svc.load().await;
        svc.mark_badge_as_seen("first-ride").await.unwrap();

        let badges = svc.user_badges().await;
        assert!(!badges[0].is_new);
        assert!(badges[1].is_new);
        assert_eq!(badges[0].unlocked_at, at);

        let persisted: Vec<UserBadge> = store.load_json(keys::BADGES).await.unwrap().unwrap();
        assert_eq!(persisted.as_slice(), badges.as_slice());
    }

    #[tokio::test]
    async fn test_redeem_reward_requires_points() {
        let svc = service(LocalStore::in_memory(), false);
        let err = svc.redeem_reward("2").await.unwrap_err();
        assert!(matches!(err, AppError::InsufficientPoints { .. }));
        assert!(svc.redeemed_rewards().await.is_empty());
    }

    #[tokio::test]
    async fn test_redeem_unknown_reward() {
        let svc = service(LocalStore::in_memory(), false);
        assert!(matches!(
            svc.redeem_reward("99").await,
            Err(AppError::NotFound(_))
        ));
    }
}
