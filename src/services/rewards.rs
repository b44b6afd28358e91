// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rewards catalog browsing and redemption.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::catalog::REWARDS;
use crate::error::{AppError, Result};
use crate::models::{RedeemedReward, RedemptionStatus, Reward, RewardCategory};

const CODE_PREFIX: &str = "RW";
const CODE_LEN: usize = 8;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Rewards in a category, or all of them for `None`.
pub fn rewards_in(category: Option<RewardCategory>) -> Vec<&'static Reward> {
    REWARDS
        .iter()
        .filter(|r| category.map_or(true, |c| r.category == c))
        .collect()
}

/// Generate a redemption code such as `RW7K2M9QXA`.
pub fn generate_code<R: Rng>(rng: &mut R) -> String {
    let suffix: String = (0..CODE_LEN)
        .map(|_| char::from(CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())]))
        .collect();
    format!("{}{}", CODE_PREFIX, suffix)
}

/// Redeem `reward` against a balance of `points`.
///
/// Points are only checked, never deducted.
pub fn redeem<R: Rng>(
    reward: &Reward,
    points: u64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<RedeemedReward> {
    if !reward.can_afford(points) {
        return Err(AppError::InsufficientPoints {
            needed: reward.points_cost - points,
            available: points,
        });
    }

    Ok(RedeemedReward {
        reward: reward.clone(),
        code: generate_code(rng),
        redeemed_at: now,
        status: RedemptionStatus::Active,
    })
}
