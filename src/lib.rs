// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Railway-Tracker: log train trips, earn points and badges
//!
//! This crate keeps the local user's trip ledger, derives distance, CO₂ and
//! points statistics from it, unlocks badges, and serves the results to the
//! presentation layer over a small local API.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::RailwayService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub railway: RailwayService,
}
