// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod badge;
pub mod leaderboard;
pub mod reward;
pub mod station;
pub mod stats;
pub mod trip;
pub mod user;

pub use badge::{Badge, BadgeCategory, BadgeRequirement, Rarity, RequirementKind, UserBadge};
pub use leaderboard::LeaderboardEntry;
pub use reward::{RedeemedReward, RedemptionStatus, Reward, RewardCategory};
pub use station::{Coordinates, Station};
pub use stats::{compute_stats, UserStats};
pub use trip::Trip;
pub use user::User;
