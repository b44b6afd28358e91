// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence layer (key-scoped local storage).

pub mod local;

pub use local::LocalStore;

/// Storage keys as constants.
pub mod keys {
    /// User profile (read on load, never written)
    pub const USER: &str = "railway_user";
    /// Full trip ledger
    pub const TRIPS: &str = "railway_trips";
    /// Unlocked badges
    pub const BADGES: &str = "railway_badges";
}
