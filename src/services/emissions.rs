// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CO₂ savings of a train journey compared with driving.

use crate::models::stats::round_to_cents;

/// Average car emissions, kg CO₂ per km.
pub const CAR_KG_PER_KM: f64 = 0.21;
/// Average train emissions, kg CO₂ per km.
pub const TRAIN_KG_PER_KM: f64 = 0.041;

/// Kilograms of CO₂ saved by taking the train for `distance_km`, rounded to
/// two decimals.
pub fn co2_saved(distance_km: f64) -> f64 {
    round_to_cents((CAR_KG_PER_KM - TRAIN_KG_PER_KM) * distance_km)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_york_to_washington() {
        assert_eq!(co2_saved(225.0), 38.03);
    }

    #[test]
    fn test_short_hop() {
        assert_eq!(co2_saved(5.0), 0.85);
        assert_eq!(co2_saved(7.0), 1.18);
    }

    #[test]
    fn test_zero_distance() {
        assert_eq!(co2_saved(0.0), 0.0);
    }

    #[test]
    fn test_car_rate_exceeds_train_rate() {
        assert!(CAR_KG_PER_KM > TRAIN_KG_PER_KM);
    }
}
