//! Default rarity and bait sections, and value defaulting rules.

use indexmap::IndexMap;

use super::types::{BaitEntry, RarityEntry};
use crate::core::constants::LEADERBOARD_WEIGHT_BASE;

/// Leaderboard weight used when a rarity does not configure `Weight`.
///
/// `100 - chance`, rounded to the nearest integer and never below zero.
pub fn default_leaderboard_weight(chance: f64) -> u32 {
    let weight = (LEADERBOARD_WEIGHT_BASE - chance).round();
    if weight.is_nan() || weight <= 0.0 {
        0
    } else if weight >= u32::MAX as f64 {
        u32::MAX
    } else {
        weight as u32
    }
}

/// Clamps an explicitly configured `Weight` into the leaderboard range.
pub fn resolve_leaderboard_weight(weight: Option<i64>, chance: f64) -> u32 {
    match weight {
        Some(w) => w.clamp(0, u32::MAX as i64) as u32,
        None => default_leaderboard_weight(chance),
    }
}

fn rarity(
    chance: f64,
    weight: i64,
    color: &str,
    extra_health: i32,
    sell_price: f64,
    broadcast: bool,
    lure_chance_change: f64,
) -> RarityEntry {
    RarityEntry {
        chance,
        weight: Some(weight),
        color: color.to_string(),
        extra_health,
        sell_price,
        broadcast,
        lure_chance_change,
    }
}

/// The rarity section written when `rarity.yml` has none.
pub fn default_rarities() -> IndexMap<String, RarityEntry> {
    let mut section = IndexMap::new();
    section.insert(
        "Tiny".to_string(),
        rarity(5.0, 25, "9", -2, 4.99, false, -5.0),
    );
    section.insert(
        "Normal".to_string(),
        rarity(50.0, 25, "7", 0, 19.99, false, -8.0),
    );
    section.insert(
        "Large".to_string(),
        rarity(25.0, 50, "c", 2, 49.99, false, 5.0),
    );
    section.insert(
        "Huge".to_string(),
        rarity(10.0, 100, "5", 4, 99.99, true, 8.0),
    );
    section
}

fn bait(
    bonus_chance: f64,
    critical_chance: f64,
    targets: &[&str],
    color: &str,
    sell_price: f64,
    enchanted: bool,
) -> BaitEntry {
    BaitEntry {
        bonus_chance,
        critical_chance,
        material: "STRING".to_string(),
        uses: 3,
        target: Some(targets.iter().map(|t| t.to_string()).collect()),
        color: color.to_string(),
        sell_price,
        enchanted,
    }
}

/// The bait section written when `bait.yml` has none.
pub fn default_baits() -> IndexMap<String, BaitEntry> {
    let mut section = IndexMap::new();
    section.insert(
        "Worms".to_string(),
        bait(100.0, 0.0, &["TINY", "NORMAL"], "9", 4.99, false),
    );
    section.insert(
        "Super Worms".to_string(),
        bait(15.0, 15.0, &["LARGE"], "c", 19.99, false),
    );
    section.insert(
        "Ultra Worms".to_string(),
        bait(25.0, 20.0, &["HUGE"], "5", 49.99, true),
    );
    section
}
