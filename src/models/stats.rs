// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User statistics derived from the trip ledger.
//!
//! Stats are never stored. They are recomputed from the full ledger on every
//! read, which is cheap at the scale of a single user's trips.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Trip;

/// Points awarded per logged trip.
pub const POINTS_PER_TRIP: u64 = 10;
/// Points awarded per distinct station visited.
pub const POINTS_PER_STATION: u64 = 5;
/// Kilometers travelled per point.
pub const KM_PER_POINT: u64 = 10;

/// Rank reported for the local user until ranking exists server-side.
const PLACEHOLDER_RANK: u32 = 1;

/// Summary statistics for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserStats {
    pub total_trips: u32,
    /// Distinct stations across all origins and destinations
    pub unique_stations: u32,
    /// Kilometers, rounded to the nearest integer
    pub total_distance: u64,
    /// Kilograms, rounded to two decimals
    pub total_co2_saved: f64,
    /// Always 0: streaks are not derived from trip dates
    pub current_streak: u32,
    /// Always 0: streaks are not derived from trip dates
    pub longest_streak: u32,
    pub rank: u32,
    pub points: u64,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_trips: 0,
            unique_stations: 0,
            total_distance: 0,
            total_co2_saved: 0.0,
            current_streak: 0,
            longest_streak: 0,
            rank: PLACEHOLDER_RANK,
            points: 0,
        }
    }
}

impl UserStats {
    /// Points for the given counters.
    ///
    /// `total_distance` is the already-rounded km total, so a fractional
    /// ledger (e.g. 19.6 km) earns distance points on 20 km, not 19.6.
    pub fn points_for(total_trips: u32, unique_stations: u32, total_distance: u64) -> u64 {
        u64::from(total_trips) * POINTS_PER_TRIP
            + u64::from(unique_stations) * POINTS_PER_STATION
            + total_distance / KM_PER_POINT
    }
}

/// Compute stats for a trip sequence. Pure: same trips, same stats.
pub fn compute_stats(trips: &[Trip]) -> UserStats {
    let total_trips = trips.len() as u32;

    let stations: HashSet<&str> = trips
        .iter()
        .flat_map(|t| [t.from_station.id.as_str(), t.to_station.id.as_str()])
        .collect();
    let unique_stations = stations.len() as u32;

    let distance_sum: f64 = trips.iter().map(|t| t.distance).sum();
    let co2_sum: f64 = trips.iter().map(|t| t.co2_saved).sum();

    let total_distance = distance_sum.max(0.0).round() as u64;

    UserStats {
        total_trips,
        unique_stations,
        total_distance,
        total_co2_saved: round_to_cents(co2_sum),
        current_streak: 0,
        longest_streak: 0,
        rank: PLACEHOLDER_RANK,
        points: UserStats::points_for(total_trips, unique_stations, total_distance),
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
