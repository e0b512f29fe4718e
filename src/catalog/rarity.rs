//! Rarity definitions and the rarity catalog.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::defaults::resolve_leaderboard_weight;
use crate::config::RarityEntry;
use crate::error::{ConfigurationError, UnknownKeyError};

/// Canonical form of a rarity or bait key for lookups.
pub fn canonical_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// An outcome category for a catch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rarity {
    /// Key as configured; lookups ignore case
    pub key: String,
    pub color_code: String,
    pub base_chance: f64,
    /// Leaderboard scoring weight, unrelated to selection chance
    pub leaderboard_weight: u32,
    pub extra_health: i32,
    pub sell_price: f64,
    pub broadcast: bool,
    /// Chance change per lure level (may be negative)
    pub lure_chance_delta: f64,
}

impl Rarity {
    /// Build a rarity from its config entry, validating the numeric fields.
    pub fn from_entry(key: &str, entry: &RarityEntry) -> Result<Self, ConfigurationError> {
        for (field, value) in [
            ("Chance", entry.chance),
            ("Sell Price", entry.sell_price),
            ("Lure Chance Change", entry.lure_chance_change),
        ] {
            if !value.is_finite() {
                return Err(ConfigurationError::NonFinite {
                    key: key.to_string(),
                    field,
                });
            }
        }
        if entry.chance < 0.0 {
            return Err(ConfigurationError::NegativeChance {
                key: key.to_string(),
                chance: entry.chance,
            });
        }
        if entry.sell_price < 0.0 {
            return Err(ConfigurationError::NegativeSellPrice {
                key: key.to_string(),
                price: entry.sell_price,
            });
        }

        Ok(Self {
            key: key.to_string(),
            color_code: entry.color.clone(),
            base_chance: entry.chance,
            leaderboard_weight: resolve_leaderboard_weight(entry.weight, entry.chance),
            extra_health: entry.extra_health,
            sell_price: entry.sell_price,
            broadcast: entry.broadcast,
            lure_chance_delta: entry.lure_chance_change,
        })
    }

    /// Canonical lookup key.
    pub fn id(&self) -> String {
        canonical_key(&self.key)
    }
}

/// Immutable, ordered set of rarities.
#[derive(Debug, Clone, PartialEq)]
pub struct RarityCatalog {
    rarities: Vec<Rarity>,
    index: HashMap<String, usize>,
}

impl RarityCatalog {
    /// Build a catalog from rarity definitions, keeping their order.
    ///
    /// Fails on a duplicate key (case-insensitive), an invalid entry, or when
    /// no entries are given at all.
    pub fn load<'a, I>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (&'a String, &'a RarityEntry)>,
    {
        let mut rarities = Vec::new();
        let mut index = HashMap::new();

        for (key, entry) in entries {
            let rarity = Rarity::from_entry(key, entry)?;
            if index.insert(rarity.id(), rarities.len()).is_some() {
                return Err(ConfigurationError::DuplicateRarity(key.clone()));
            }
            rarities.push(rarity);
        }

        if rarities.is_empty() {
            return Err(ConfigurationError::EmptyCatalog);
        }

        Ok(Self { rarities, index })
    }

    pub fn get(&self, key: &str) -> Result<&Rarity, UnknownKeyError> {
        self.index
            .get(&canonical_key(key))
            .map(|&i| &self.rarities[i])
            .ok_or_else(|| UnknownKeyError::rarity(key))
    }

    /// All rarities in configured order.
    pub fn all(&self) -> &[Rarity] {
        &self.rarities
    }

    pub fn is_known(&self, key: &str) -> bool {
        self.index.contains_key(&canonical_key(key))
    }

    pub fn len(&self) -> usize {
        self.rarities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rarities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_rarities;
    use indexmap::IndexMap;

    fn entry(chance: f64) -> RarityEntry {
        RarityEntry {
            chance,
            weight: None,
            color: "7".to_string(),
            extra_health: 0,
            sell_price: 1.0,
            broadcast: false,
            lure_chance_change: 0.0,
        }
    }

    #[test]
    fn test_load_preserves_order() {
        let catalog = RarityCatalog::load(&default_rarities()).unwrap();
        let keys: Vec<&str> = catalog.all().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["Tiny", "Normal", "Large", "Huge"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let catalog = RarityCatalog::load(&default_rarities()).unwrap();
        assert_eq!(catalog.get("HUGE").unwrap().key, "Huge");
        assert_eq!(catalog.get("tiny").unwrap().key, "Tiny");
        assert!(catalog.is_known("Normal"));
        assert!(catalog.is_known("NORMAL"));
    }

    #[test]
    fn test_unknown_key_is_reported() {
        let catalog = RarityCatalog::load(&default_rarities()).unwrap();
        let err = catalog.get("Gigantic").unwrap_err();
        assert_eq!(err, UnknownKeyError::rarity("Gigantic"));
        assert!(!catalog.is_known("Gigantic"));
    }

    #[test]
    fn test_duplicate_key_differing_in_case_fails() {
        let mut entries = IndexMap::new();
        entries.insert("Tiny".to_string(), entry(5.0));
        entries.insert("TINY".to_string(), entry(6.0));

        let result = RarityCatalog::load(&entries);
        assert!(matches!(result, Err(ConfigurationError::DuplicateRarity(k)) if k == "TINY"));
    }

    #[test]
    fn test_negative_chance_fails() {
        let mut entries = IndexMap::new();
        entries.insert("Cursed".to_string(), entry(-1.0));

        let result = RarityCatalog::load(&entries);
        assert!(matches!(
            result,
            Err(ConfigurationError::NegativeChance { .. })
        ));
    }

    #[test]
    fn test_non_finite_chance_fails() {
        let mut entries = IndexMap::new();
        entries.insert("Odd".to_string(), entry(f64::INFINITY));

        let result = RarityCatalog::load(&entries);
        assert!(matches!(
            result,
            Err(ConfigurationError::NonFinite { field: "Chance", .. })
        ));
    }

    #[test]
    fn test_empty_catalog_fails() {
        let entries: IndexMap<String, RarityEntry> = IndexMap::new();
        assert!(matches!(
            RarityCatalog::load(&entries),
            Err(ConfigurationError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_weight_defaults_from_chance() {
        let mut entries = IndexMap::new();
        entries.insert("Common".to_string(), entry(30.0));
        let catalog = RarityCatalog::load(&entries).unwrap();
        assert_eq!(catalog.get("Common").unwrap().leaderboard_weight, 70);
    }

    #[test]
    fn test_zero_chance_rarity_is_allowed() {
        let mut entries = IndexMap::new();
        entries.insert("Ghost".to_string(), entry(0.0));
        let catalog = RarityCatalog::load(&entries).unwrap();
        assert_eq!(catalog.get("Ghost").unwrap().base_chance, 0.0);
    }
}
