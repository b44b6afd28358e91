// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod badges;
pub mod distance;
pub mod emissions;
pub mod railway;
pub mod rewards;

pub use distance::{DistanceResolver, FallbackPolicy};
pub use railway::RailwayService;
