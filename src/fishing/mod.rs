//! Catch resolution: weighted rarity selection and critical rolls.

pub mod logic;
pub mod resolver;
pub mod types;

pub use logic::{effective_chances, expected_distribution, resolve_catch, roll_critical};
pub use resolver::{resolve_in, CatchResolver};
pub use types::{ResolvedCatch, WeightedRarity};
