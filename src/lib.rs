//! Lurecast - catch resolution for fishing games.
//!
//! Rarities and baits are loaded from configuration into immutable catalog
//! snapshots. Each catch draws one rarity by weight, adjusted by bait and
//! lure modifiers, then gets a sell value and optionally a place on the
//! leaderboard.

pub mod catalog;
pub mod config;
pub mod core;
pub mod economy;
pub mod error;
pub mod fishing;
pub mod progression;
pub mod simulator;

pub use catalog::{Bait, BaitCatalog, CatalogHandle, Catalogs, Rarity, RarityCatalog};
pub use economy::{EconomyFormatter, TemplateFormatter, ValuationService};
pub use error::{CatchError, ConfigurationError, ResolutionError, StoreError, UnknownKeyError};
pub use fishing::{CatchResolver, ResolvedCatch};
pub use progression::{
    InMemoryProgressionStore, JsonProgressionStore, LeaderboardEntry, PlayerId, PlayerStats,
    ProgressionStore,
};
