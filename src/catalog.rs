// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reference data compiled into the application.
//!
//! Stations, badges, rewards, the known-distance table and the sample
//! leaderboard are fixed at build time and never edited at runtime.

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::LazyLock;

use crate::models::{
    Badge, BadgeCategory, BadgeRequirement, LeaderboardEntry, Rarity, RequirementKind, Reward,
    RewardCategory, Station, User, UserStats,
};

/// Station catalog, in display order.
pub static STATIONS: LazyLock<Vec<Station>> = LazyLock::new(|| {
    vec![
        Station::new("1", "Central Station", "New York", "USA"),
        Station::new("2", "Union Station", "Washington", "USA"),
        Station::new("3", "Penn Station", "New York", "USA"),
        Station::new("4", "South Station", "Boston", "USA"),
        Station::new("5", "King's Cross", "London", "UK"),
        Station::new("6", "Gare du Nord", "Paris", "France"),
        Station::new("7", "Hauptbahnhof", "Berlin", "Germany"),
        Station::new("8", "Milano Centrale", "Milan", "Italy"),
        Station::new("9", "Tokyo Station", "Tokyo", "Japan"),
        Station::new("10", "Shinjuku Station", "Tokyo", "Japan"),
    ]
});

/// Look up a station by catalog id.
pub fn station(id: &str) -> Option<&'static Station> {
    STATIONS.iter().find(|s| s.id == id)
}

/// Known distances (km) between station pairs. Order within a pair is irrelevant.
pub const KNOWN_DISTANCES: &[(&str, &str, f64)] = &[
    ("1", "2", 225.0), // New York - Washington
    ("1", "3", 5.0),   // Central - Penn
    ("1", "4", 215.0), // New York - Boston
    ("2", "4", 440.0), // Washington - Boston
    ("5", "6", 334.0), // London - Paris
    ("6", "7", 878.0), // Paris - Berlin
    ("7", "8", 840.0), // Berlin - Milan
    ("9", "10", 7.0),  // Tokyo - Shinjuku
];

const fn badge(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    category: BadgeCategory,
    kind: RequirementKind,
    value: f64,
    rarity: Rarity,
) -> Badge {
    Badge {
        id,
        name,
        description,
        icon,
        category,
        requirement: BadgeRequirement { kind, value },
        rarity,
    }
}

/// Badge catalog.
pub static BADGES: [Badge; 7] = [
    badge(
        "first-ride",
        "First Journey",
        "Complete your first train ride",
        "train",
        BadgeCategory::Milestone,
        RequirementKind::Trips,
        1.0,
        Rarity::Common,
    ),
    badge(
        "explorer",
        "Station Explorer",
        "Visit 5 different stations",
        "map-pin",
        BadgeCategory::Milestone,
        RequirementKind::Stations,
        5.0,
        Rarity::Common,
    ),
    badge(
        "frequent-traveler",
        "Frequent Traveler",
        "Complete 10 train rides",
        "repeat",
        BadgeCategory::Milestone,
        RequirementKind::Trips,
        10.0,
        Rarity::Rare,
    ),
    badge(
        "eco-warrior",
        "Eco Warrior",
        "Save 50kg of CO₂ emissions",
        "leaf",
        BadgeCategory::Environmental,
        RequirementKind::Co2,
        50.0,
        Rarity::Rare,
    ),
    badge(
        "globe-trotter",
        "Globe Trotter",
        "Visit 20 different stations",
        "globe",
        BadgeCategory::Achievement,
        RequirementKind::Stations,
        20.0,
        Rarity::Epic,
    ),
    badge(
        "distance-master",
        "Distance Master",
        "Travel 1000km by train",
        "route",
        BadgeCategory::Achievement,
        RequirementKind::Distance,
        1000.0,
        Rarity::Epic,
    ),
    badge(
        "streak-legend",
        "Streak Legend",
        "Maintain a 30-day travel streak",
        "zap",
        BadgeCategory::Achievement,
        RequirementKind::Streak,
        30.0,
        Rarity::Legendary,
    ),
];

/// Look up a badge by id.
pub fn badge_by_id(id: &str) -> Option<&'static Badge> {
    BADGES.iter().find(|b| b.id == id)
}

/// Rewards catalog.
pub static REWARDS: [Reward; 6] = [
    Reward {
        id: "1",
        title: "20% Off Next Train Ticket",
        description: "Get 20% discount on your next railway journey",
        points_cost: 500,
        category: RewardCategory::Travel,
        expires_in: Some("30 days"),
        is_popular: true,
        discount: Some("20% OFF"),
    },
    Reward {
        id: "2",
        title: "Free Coffee at Station Café",
        description: "Enjoy a complimentary coffee at participating station cafés",
        points_cost: 200,
        category: RewardCategory::Food,
        expires_in: Some("14 days"),
        is_popular: false,
        discount: None,
    },
    Reward {
        id: "3",
        title: "Free Uber Ride (up to $15)",
        description: "Get a free ride to or from the train station",
        points_cost: 800,
        category: RewardCategory::Transport,
        expires_in: Some("7 days"),
        is_popular: false,
        discount: Some("FREE"),
    },
    Reward {
        id: "4",
        title: "$10 Restaurant Voucher",
        description: "Dine at partner restaurants near train stations",
        points_cost: 600,
        category: RewardCategory::Food,
        expires_in: Some("60 days"),
        is_popular: false,
        discount: Some("$10 OFF"),
    },
    Reward {
        id: "5",
        title: "Shopping Mall Gift Card",
        description: "$25 gift card for major shopping centers",
        points_cost: 1200,
        category: RewardCategory::Shopping,
        expires_in: Some("90 days"),
        is_popular: true,
        discount: Some("$25"),
    },
    Reward {
        id: "6",
        title: "Premium Seat Upgrade",
        description: "Upgrade to first class on your next journey",
        points_cost: 1000,
        category: RewardCategory::Travel,
        expires_in: Some("45 days"),
        is_popular: false,
        discount: Some("UPGRADE"),
    },
];

/// Look up a reward by id.
pub fn reward(id: &str) -> Option<&'static Reward> {
    REWARDS.iter().find(|r| r.id == id)
}

/// Days from the Unix epoch to 2024-01-15.
const DEFAULT_JOIN_DAY: i64 = 19_737;

fn join_date() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::days(DEFAULT_JOIN_DAY)
}

fn sample_user(id: &str, name: &str, email: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: None,
        joined_at: join_date(),
    }
}

/// The user an installation starts with when nothing is stored.
pub fn default_user() -> User {
    sample_user("1", "Alex Johnson", "alex@example.com")
}

/// Static leaderboard shown until rankings are computed against other users.
pub fn sample_leaderboard() -> Vec<LeaderboardEntry> {
    // (id, name, email, trips, stations, km, co2, current streak, longest streak, points)
    let rows: [(&str, &str, &str, u32, u32, u64, f64, u32, u32, u64); 5] = [
        ("1", "Alex Johnson", "alex@example.com", 45, 28, 12500, 2100.0, 15, 22, 1875),
        ("2", "Sarah Chen", "sarah@example.com", 38, 22, 9800, 1650.0, 8, 18, 1490),
        ("3", "Mike Rodriguez", "mike@example.com", 32, 19, 8200, 1380.0, 12, 16, 1235),
        ("4", "Emma Wilson", "emma@example.com", 29, 16, 7100, 1195.0, 5, 14, 1070),
        ("5", "David Kim", "david@example.com", 25, 14, 6300, 1060.0, 3, 11, 920),
    ];

    rows.iter()
        .zip(1u32..)
        .map(
            |(&(id, name, email, trips, stations, km, co2, current, longest, points), position)| {
                LeaderboardEntry {
                    user: sample_user(id, name, email),
                    stats: UserStats {
                        total_trips: trips,
                        unique_stations: stations,
                        total_distance: km,
                        total_co2_saved: co2,
                        current_streak: current,
                        longest_streak: longest,
                        rank: position,
                        points,
                    },
                    position,
                }
            },
        )
        .collect()
}
