//! Per-player catch statistics and leaderboard rows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::catalog::{canonical_key, RarityCatalog};
use crate::error::UnknownKeyError;
use crate::fishing::ResolvedCatch;

/// Players are identified by UUID.
pub type PlayerId = Uuid;

/// Aggregate fishing statistics for one player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Catch count per canonical rarity key
    #[serde(default)]
    pub caught: BTreeMap<String, u64>,
    #[serde(default)]
    pub total_caught: u64,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub critical_catches: u64,
    /// Unix timestamp of the most recent catch
    #[serde(default)]
    pub last_catch_time: Option<i64>,
}

impl PlayerStats {
    /// Add one catch worth `value`.
    pub fn record(&mut self, catch: &ResolvedCatch, value: f64, timestamp: i64) {
        *self.caught.entry(catch.rarity.id()).or_insert(0) += 1;
        self.total_caught += 1;
        self.total_value += value;
        if catch.critical {
            self.critical_catches += 1;
        }
        self.last_catch_time = Some(timestamp);
    }

    /// Number of fish caught of a rarity (case-insensitive key).
    pub fn caught_of(&self, rarity_key: &str) -> u64 {
        self.caught
            .get(&canonical_key(rarity_key))
            .copied()
            .unwrap_or(0)
    }

    /// Leaderboard score: catches times each rarity's leaderboard weight.
    ///
    /// With `rarity_key` only that rarity counts, otherwise every rarity in
    /// the catalog does. Counts for rarities no longer in the catalog score
    /// nothing.
    pub fn score(
        &self,
        rarities: &RarityCatalog,
        rarity_key: Option<&str>,
    ) -> Result<u64, UnknownKeyError> {
        let weighted = |key: &str, weight: u32| self.caught_of(key).saturating_mul(weight as u64);

        match rarity_key {
            Some(key) => {
                let rarity = rarities.get(key)?;
                Ok(weighted(&rarity.key, rarity.leaderboard_weight))
            }
            None => Ok(rarities
                .all()
                .iter()
                .map(|r| weighted(&r.key, r.leaderboard_weight))
                .fold(0u64, u64::saturating_add)),
        }
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: PlayerId,
    pub score: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_rarities;

    fn catch(rarities: &RarityCatalog, key: &str, critical: bool) -> ResolvedCatch {
        ResolvedCatch {
            rarity: rarities.get(key).unwrap().clone(),
            critical,
            used_bait: None,
        }
    }

    #[test]
    fn test_record_updates_counters() {
        let rarities = RarityCatalog::load(&default_rarities()).unwrap();
        let mut stats = PlayerStats::default();

        stats.record(&catch(&rarities, "Huge", true), 99.99, 1_700_000_000);
        stats.record(&catch(&rarities, "Tiny", false), 4.99, 1_700_000_060);

        assert_eq!(stats.total_caught, 2);
        assert_eq!(stats.critical_catches, 1);
        assert_eq!(stats.caught_of("HUGE"), 1);
        assert_eq!(stats.caught_of("tiny"), 1);
        assert_eq!(stats.caught_of("Normal"), 0);
        assert!((stats.total_value - 104.98).abs() < 1e-9);
        assert_eq!(stats.last_catch_time, Some(1_700_000_060));
    }

    #[test]
    fn test_score_uses_leaderboard_weight() {
        let rarities = RarityCatalog::load(&default_rarities()).unwrap();
        let mut stats = PlayerStats::default();
        for _ in 0..3 {
            stats.record(&catch(&rarities, "Huge", false), 0.0, 0);
        }
        stats.record(&catch(&rarities, "Tiny", false), 0.0, 0);

        // Huge weight 100, Tiny weight 25
        assert_eq!(stats.score(&rarities, Some("Huge")).unwrap(), 300);
        assert_eq!(stats.score(&rarities, Some("tiny")).unwrap(), 25);
        assert_eq!(stats.score(&rarities, None).unwrap(), 325);
    }

    #[test]
    fn test_score_for_unknown_rarity_fails() {
        let rarities = RarityCatalog::load(&default_rarities()).unwrap();
        let stats = PlayerStats::default();
        assert_eq!(
            stats.score(&rarities, Some("Gigantic")).unwrap_err(),
            UnknownKeyError::rarity("Gigantic")
        );
    }

    #[test]
    fn test_counts_for_removed_rarities_score_nothing() {
        let rarities = RarityCatalog::load(&default_rarities()).unwrap();
        let mut stats = PlayerStats::default();
        stats.caught.insert("legendary".to_string(), 50);
        assert_eq!(stats.score(&rarities, None).unwrap(), 0);
    }
}
