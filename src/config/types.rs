//! Typed configuration schema for rarities, baits and settings.
//!
//! Field names follow the keys used in the YAML files, so a `rarity.yml`
//! written by hand reads the same as the defaults this crate generates.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::constants::{DEFAULT_CRITICAL_VALUE_MULTIPLIER, DEFAULT_ECONOMY_FORMAT};
use crate::error::ConfigurationError;

/// One entry of the `Rarity` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityEntry {
    #[serde(rename = "Chance")]
    pub chance: f64,

    /// Leaderboard weight; defaults to `100 - Chance` when absent
    #[serde(rename = "Weight", default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,

    #[serde(rename = "Color", default)]
    pub color: String,

    #[serde(rename = "Extra Health", default)]
    pub extra_health: i32,

    #[serde(rename = "Sell Price", default)]
    pub sell_price: f64,

    #[serde(rename = "Broadcast", default)]
    pub broadcast: bool,

    /// Chance change per level of lure
    #[serde(rename = "Lure Chance Change", default)]
    pub lure_chance_change: f64,
}

/// One entry of the `Bait` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaitEntry {
    #[serde(rename = "Bonus Chance", default)]
    pub bonus_chance: f64,

    /// Percent chance that a catch with this bait is critical
    #[serde(rename = "Critical Chance", default)]
    pub critical_chance: f64,

    #[serde(rename = "Material", default)]
    pub material: String,

    #[serde(rename = "Uses", default)]
    pub uses: u32,

    /// Rarity names this bait works on. A bait without targets is never loaded.
    #[serde(rename = "Target", default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<String>>,

    #[serde(rename = "Color", default)]
    pub color: String,

    #[serde(rename = "Sell Price", default)]
    pub sell_price: f64,

    #[serde(rename = "Enchanted", default)]
    pub enchanted: bool,
}

/// Entries of a config section in file order.
///
/// Unlike a map, a key written twice shows up twice here, so it can be
/// rejected instead of silently replacing the earlier definition.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionEntries<E>(pub Vec<(String, E)>);

impl<E> SectionEntries<E> {
    /// Index the entries by key, failing on the first repeated key.
    pub fn into_unique<F>(self, duplicate: F) -> Result<IndexMap<String, E>, ConfigurationError>
    where
        F: Fn(String) -> ConfigurationError,
    {
        let mut section = IndexMap::with_capacity(self.0.len());
        for (key, entry) in self.0 {
            if section.contains_key(&key) {
                return Err(duplicate(key));
            }
            section.insert(key, entry);
        }
        Ok(section)
    }
}

impl<E> From<IndexMap<String, E>> for SectionEntries<E> {
    fn from(section: IndexMap<String, E>) -> Self {
        Self(section.into_iter().collect())
    }
}

impl<E: Serialize> Serialize for SectionEntries<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, entry) in &self.0 {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

impl<'de, E: Deserialize<'de>> Deserialize<'de> for SectionEntries<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<E>(PhantomData<E>);

        impl<'de, E: Deserialize<'de>> Visitor<'de> for EntriesVisitor<E> {
            type Value = SectionEntries<E>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of names to definitions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, E>()? {
                    entries.push(entry);
                }
                Ok(SectionEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Layout of `rarity.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RarityFile {
    #[serde(rename = "Rarity", default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<SectionEntries<RarityEntry>>,
}

/// Layout of `bait.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaitFile {
    #[serde(rename = "Bait", default, skip_serializing_if = "Option::is_none")]
    pub bait: Option<SectionEntries<BaitEntry>>,
}

/// Contents of `settings.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Multiplier applied to the value of a critical catch
    #[serde(rename = "Critical Value Multiplier")]
    pub critical_value_multiplier: f64,

    /// Currency template; `%cost%` is replaced by the amount
    #[serde(rename = "Economy Format")]
    pub economy_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            critical_value_multiplier: DEFAULT_CRITICAL_VALUE_MULTIPLIER,
            economy_format: DEFAULT_ECONOMY_FORMAT.to_string(),
        }
    }
}
