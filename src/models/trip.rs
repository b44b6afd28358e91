// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Trip record stored in the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Station;

/// One logged train journey.
///
/// Trips are append-only: once created they are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Trip {
    /// Creation timestamp in milliseconds, as a string
    pub id: String,
    /// Owning user
    pub user_id: String,
    pub from_station: Station,
    pub to_station: Station,
    /// When the journey took place
    pub date: DateTime<Utc>,
    /// Distance in kilometers
    pub distance: f64,
    /// CO₂ saved versus driving, in kg
    pub co2_saved: f64,
    /// Duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_deserializes_stored_layout() {
        let stored = r#"{
            "id": "1705312800000",
            "userId": "1",
            "fromStation": {"id": "1", "name": "Central Station", "city": "New York", "country": "USA"},
            "toStation": {"id": "2", "name": "Union Station", "city": "Washington", "country": "USA"},
            "date": "2024-01-15T10:00:00.000Z",
            "distance": 225,
            "co2Saved": 38.03
        }"#;

        let trip: Trip = serde_json::from_str(stored).unwrap();

        assert_eq!(trip.user_id, "1");
        assert_eq!(trip.from_station.name, "Central Station");
        assert_eq!(trip.distance, 225.0);
        assert_eq!(trip.co2_saved, 38.03);
        assert_eq!(trip.date.timestamp(), 1_705_312_800);
        assert_eq!(trip.duration, None);
        assert_eq!(trip.train_type, None);
    }
}
