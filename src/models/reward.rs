// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Rewards catalog entries and redemptions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A reward that can be exchanged for points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Reward {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub points_cost: u64,
    pub category: RewardCategory,
    /// Human-readable validity window (e.g. "30 days")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<&'static str>,
    pub is_popular: bool,
    /// Short label such as "20% OFF"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<&'static str>,
}

impl Reward {
    /// Whether a balance of `points` covers this reward.
    pub fn can_afford(&self, points: u64) -> bool {
        points >= self.points_cost
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum RewardCategory {
    Travel,
    Food,
    Shopping,
    Transport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum RedemptionStatus {
    Active,
    Used,
    Expired,
}

/// A reward the user has redeemed, with the code to present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RedeemedReward {
    #[serde(flatten)]
    pub reward: Reward,
    pub code: String,
    pub redeemed_at: DateTime<Utc>,
    pub status: RedemptionStatus,
}
