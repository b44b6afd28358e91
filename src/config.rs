// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Every variable is optional; unset values fall back to the defaults used
//! by a fresh install.

use std::env;
use std::path::PathBuf;

use crate::services::distance::FallbackPolicy;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one JSON file per storage key
    pub data_dir: PathBuf,
    /// Server port
    pub port: u16,
    /// How distances for unmapped station pairs are estimated
    pub distance_fallback: FallbackPolicy,
    /// Evaluate badge requirements after each new trip
    pub award_badges: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            port: 8080,
            distance_fallback: FallbackPolicy::Random,
            award_badges: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let seed = match env::var("DISTANCE_SEED") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("DISTANCE_SEED", raw))?,
            Err(_) => 0,
        };

        let distance_fallback = match env::var("DISTANCE_FALLBACK") {
            Ok(raw) => parse_fallback(&raw, seed)?,
            Err(_) => FallbackPolicy::Random,
        };

        let award_badges = match env::var("AWARD_BADGES") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("AWARD_BADGES", raw))?,
            Err(_) => true,
        };

        Ok(Self {
            data_dir: env::var("RAILWAY_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            distance_fallback,
            award_badges,
        })
    }
}

fn parse_fallback(raw: &str, seed: u64) -> Result<FallbackPolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "random" => Ok(FallbackPolicy::Random),
        "deterministic" => Ok(FallbackPolicy::Deterministic { seed }),
        _ => Err(ConfigError::Invalid("DISTANCE_FALLBACK", raw.to_string())),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
