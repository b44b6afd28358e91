// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip distance lookup.
//!
//! Known city pairs come from a fixed table. Pairs missing from the table get
//! an estimate in `[FALLBACK_MIN_KM, FALLBACK_MAX_KM)`, drawn according to the
//! configured [`FallbackPolicy`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalog::KNOWN_DISTANCES;
use crate::models::Station;

/// Smallest fallback estimate (inclusive).
pub const FALLBACK_MIN_KM: u32 = 50;
/// Largest fallback estimate (exclusive).
pub const FALLBACK_MAX_KM: u32 = 550;

/// How unmapped station pairs are estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// A fresh draw on every call; repeated calls for one pair may differ.
    #[default]
    Random,
    /// Derived from the seed and the unordered pair; repeated calls agree.
    Deterministic { seed: u64 },
}

/// Resolves the distance between two stations.
#[derive(Debug, Clone, Default)]
pub struct DistanceResolver {
    policy: FallbackPolicy,
}

impl DistanceResolver {
    pub fn new(policy: FallbackPolicy) -> Self {
        Self { policy }
    }

    /// Distance from the fixed table, checking both orderings.
    pub fn known_distance(origin: &str, destination: &str) -> Option<f64> {
        KNOWN_DISTANCES
            .iter()
            .find(|(a, b, _)| {
                (*a == origin && *b == destination) || (*a == destination && *b == origin)
            })
            .map(|(_, _, km)| *km)
    }

    /// Distance in km between two station ids. Always returns a usable value.
    pub fn resolve(&self, origin: &str, destination: &str) -> f64 {
        if let Some(km) = Self::known_distance(origin, destination) {
            return km;
        }

        let km = match self.policy {
            FallbackPolicy::Random => rand::thread_rng().gen_range(FALLBACK_MIN_KM..FALLBACK_MAX_KM),
            FallbackPolicy::Deterministic { seed } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed ^ pair_hash(origin, destination));
                rng.gen_range(FALLBACK_MIN_KM..FALLBACK_MAX_KM)
            }
        };

        tracing::debug!(
            origin,
            destination,
            km,
            policy = ?self.policy,
            "No known distance, using estimate"
        );
        f64::from(km)
    }

    /// Distance in km between two stations.
    pub fn resolve_stations(&self, origin: &Station, destination: &Station) -> f64 {
        self.resolve(&origin.id, &destination.id)
    }
}

/// FNV-1a over the pair with its ids sorted, so both orderings agree.
fn pair_hash(a: &str, b: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo.bytes()
        .chain(std::iter::once(0))
        .chain(hi.bytes())
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
