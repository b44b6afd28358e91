// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Badge requirement evaluation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Badge, RequirementKind, UserBadge, UserStats};

/// Current value of the statistic a requirement refers to.
pub fn stat_value(kind: RequirementKind, stats: &UserStats) -> f64 {
    match kind {
        RequirementKind::Trips => f64::from(stats.total_trips),
        RequirementKind::Stations => f64::from(stats.unique_stations),
        RequirementKind::Distance => stats.total_distance as f64,
        RequirementKind::Co2 => stats.total_co2_saved,
        RequirementKind::Streak => f64::from(stats.current_streak),
    }
}

/// Whether `stats` meet the badge's threshold.
pub fn is_satisfied(badge: &Badge, stats: &UserStats) -> bool {
    stat_value(badge.requirement.kind, stats) >= badge.requirement.value
}

/// Badges newly satisfied by `stats`, as fresh unlock records.
///
/// Badges already present in `unlocked` are skipped, so evaluating the same
/// stats twice yields nothing the second time.
pub fn evaluate(
    stats: &UserStats,
    catalog: &[Badge],
    unlocked: &[UserBadge],
    now: DateTime<Utc>,
) -> Vec<UserBadge> {
    let owned: HashSet<&str> = unlocked.iter().map(|b| b.badge_id.as_str()).collect();

    catalog
        .iter()
        .filter(|badge| !owned.contains(badge.id) && is_satisfied(badge, stats))
        .map(|badge| UserBadge {
            badge_id: badge.id.to_string(),
            unlocked_at: now,
            is_new: true,
        })
        .collect()
}

/// Progress toward a badge, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BadgeProgress {
    /// Current value, capped at the target
    pub current: f64,
    pub target: f64,
}

pub fn progress(badge: &Badge, stats: &UserStats) -> BadgeProgress {
    let target = badge.requirement.value;
    BadgeProgress {
        current: stat_value(badge.requirement.kind, stats).min(target),
        target,
    }
}
