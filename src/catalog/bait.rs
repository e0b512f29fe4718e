//! Bait definitions and the bait catalog.
//!
//! A bait only exists in the catalog if at least one of its targets names a
//! known rarity. Baits that fail that check, or carry unusable values, are
//! dropped with a warning instead of failing the whole load.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::rarity::{canonical_key, RarityCatalog};
use crate::config::BaitEntry;
use crate::core::constants::{CRITICAL_CHANCE_MAX, CRITICAL_CHANCE_MIN};
use crate::error::{ConfigurationError, UnknownKeyError};

/// A modifier item that restricts and biases rarity selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bait {
    pub key: String,
    pub color_code: String,
    /// Physical representation, not interpreted here
    pub material_ref: String,
    pub sell_price: f64,
    pub uses: u32,
    /// Canonical keys of the targeted rarities, in configured order
    pub targets: Vec<String>,
    pub bonus_chance: f64,
    pub enchanted: bool,
    /// Percent chance in [0, 100]
    pub critical_chance: f64,
}

impl Bait {
    /// Whether this bait influences the rarity with the given key.
    pub fn is_target(&self, rarity_key: &str) -> bool {
        let key = canonical_key(rarity_key);
        self.targets.iter().any(|t| *t == key)
    }

    /// Canonical lookup key.
    pub fn id(&self) -> String {
        canonical_key(&self.key)
    }
}

/// Why a bait entry was left out of the catalog.
#[derive(Debug, Clone, PartialEq)]
enum Rejection {
    NoTargetSection,
    NoKnownTargets,
    NoUses,
    NonFinite(&'static str),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NoTargetSection => write!(f, "it has no Target list"),
            Rejection::NoKnownTargets => write!(f, "none of its targets is a known rarity"),
            Rejection::NoUses => write!(f, "Uses must be at least 1"),
            Rejection::NonFinite(field) => write!(f, "`{}` is not a finite number", field),
        }
    }
}

/// Resolve one config entry against the rarity catalog.
fn build_bait(
    key: &str,
    entry: &BaitEntry,
    rarities: &RarityCatalog,
) -> Result<Bait, Rejection> {
    for (field, value) in [
        ("Bonus Chance", entry.bonus_chance),
        ("Critical Chance", entry.critical_chance),
        ("Sell Price", entry.sell_price),
    ] {
        if !value.is_finite() {
            return Err(Rejection::NonFinite(field));
        }
    }

    let names = entry.target.as_ref().ok_or(Rejection::NoTargetSection)?;
    let mut targets: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        match rarities.get(name) {
            Ok(rarity) => {
                let id = rarity.id();
                if !targets.contains(&id) {
                    targets.push(id);
                }
            }
            Err(_) => log::warn!("Bait '{}' targets unknown rarity '{}'", key, name),
        }
    }
    if targets.is_empty() {
        return Err(Rejection::NoKnownTargets);
    }

    if entry.uses == 0 {
        return Err(Rejection::NoUses);
    }

    let critical_chance = entry
        .critical_chance
        .clamp(CRITICAL_CHANCE_MIN, CRITICAL_CHANCE_MAX);
    if critical_chance != entry.critical_chance {
        log::warn!(
            "Bait '{}' critical chance {} clamped to {}",
            key,
            entry.critical_chance,
            critical_chance
        );
    }

    Ok(Bait {
        key: key.to_string(),
        color_code: entry.color.clone(),
        material_ref: entry.material.clone(),
        sell_price: entry.sell_price,
        uses: entry.uses,
        targets,
        bonus_chance: entry.bonus_chance,
        enchanted: entry.enchanted,
        critical_chance,
    })
}

/// Immutable set of baits, each validated against a rarity catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaitCatalog {
    baits: Vec<Bait>,
    index: HashMap<String, usize>,
}

impl BaitCatalog {
    /// Build a catalog from bait definitions.
    ///
    /// Only duplicate keys fail the load; unusable baits are skipped.
    pub fn load<'a, I>(entries: I, rarities: &RarityCatalog) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (&'a String, &'a BaitEntry)>,
    {
        let mut baits = Vec::new();
        let mut index = HashMap::new();
        let mut seen = HashSet::new();

        for (key, entry) in entries {
            let id = canonical_key(key);
            if !seen.insert(id.clone()) {
                return Err(ConfigurationError::DuplicateBait(key.clone()));
            }

            match build_bait(key, entry, rarities) {
                Ok(bait) => {
                    index.insert(id, baits.len());
                    baits.push(bait);
                }
                Err(reason) => log::warn!("Skipping bait '{}': {}", key, reason),
            }
        }

        Ok(Self { baits, index })
    }

    pub fn get(&self, key: &str) -> Result<&Bait, UnknownKeyError> {
        self.index
            .get(&canonical_key(key))
            .map(|&i| &self.baits[i])
            .ok_or_else(|| UnknownKeyError::bait(key))
    }

    /// All loaded baits in configured order.
    pub fn all(&self) -> &[Bait] {
        &self.baits
    }

    pub fn is_known(&self, key: &str) -> bool {
        self.index.contains_key(&canonical_key(key))
    }

    pub fn len(&self) -> usize {
        self.baits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baits.is_empty()
    }
}
