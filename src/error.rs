//! Error types for catalog loading, catch resolution and progression storage.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Malformed or inconsistent catalog definitions.
///
/// Fatal for the load that produced it: the catalog being built is discarded
/// and whatever snapshot was installed before stays in effect.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("duplicate rarity `{0}`")]
    DuplicateRarity(String),

    #[error("duplicate bait `{0}`")]
    DuplicateBait(String),

    #[error("rarity `{key}` has a negative chance ({chance})")]
    NegativeChance { key: String, chance: f64 },

    #[error("rarity `{key}` has a negative sell price ({price})")]
    NegativeSellPrice { key: String, price: f64 },

    #[error("`{key}` has a non-finite `{field}`")]
    NonFinite { key: String, field: &'static str },

    #[error("no rarities are configured")]
    EmptyCatalog,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to write defaults to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// No rarity could be selected for a catch attempt.
///
/// Callers treat this as "nothing was caught", never as a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("no rarity is eligible for this catch")]
    NoEligibleRarity,
}

/// Which catalog a key lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Rarity,
    Bait,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Rarity => write!(f, "rarity"),
            KeyKind::Bait => write!(f, "bait"),
        }
    }
}

/// Lookup of a key that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{key}`")]
pub struct UnknownKeyError {
    pub kind: KeyKind,
    pub key: String,
}

impl UnknownKeyError {
    pub fn rarity(key: &str) -> Self {
        Self {
            kind: KeyKind::Rarity,
            key: key.to_string(),
        }
    }

    pub fn bait(key: &str) -> Self {
        Self {
            kind: KeyKind::Bait,
            key: key.to_string(),
        }
    }
}

/// Failure of a resolution that names its bait by key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatchError {
    #[error(transparent)]
    UnknownKey(#[from] UnknownKeyError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

/// Failures of the progression store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownKey(#[from] UnknownKeyError),
}
