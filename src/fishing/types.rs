//! Catch resolution data types.

use serde::{Deserialize, Serialize};

use crate::catalog::{Bait, Rarity};

/// Outcome of one catch event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCatch {
    pub rarity: Rarity,
    pub critical: bool,
    pub used_bait: Option<Bait>,
}

impl ResolvedCatch {
    /// Extra health the caught fish grants on top of its base value.
    pub fn extra_health(&self) -> i32 {
        self.rarity.extra_health
    }

    /// Whether the catch should be announced to everyone.
    pub fn should_broadcast(&self) -> bool {
        self.rarity.broadcast
    }

    pub fn color_code(&self) -> &str {
        &self.rarity.color_code
    }
}

/// A rarity and its weight for one resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedRarity<'a> {
    pub rarity: &'a Rarity,
    /// Clamped, never negative; zero means the rarity cannot be selected
    pub weight: f64,
}
