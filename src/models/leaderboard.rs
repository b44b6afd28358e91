// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Leaderboard rows.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{User, UserStats};

/// A user and their stats snapshot at a leaderboard position (1-indexed).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardEntry {
    pub user: User,
    pub stats: UserStats,
    pub position: u32,
}
