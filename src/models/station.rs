// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Railway station reference model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A station from the fixed reference catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Station {
    /// Catalog identifier (e.g. "1")
    pub id: String,
    /// Station name (e.g. "Central Station")
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// WGS84 position of a station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Station {
    pub fn new(id: &str, name: &str, city: &str, country: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
            coordinates: None,
        }
    }
}
