//! Configuration schema, defaults and sources.

pub mod defaults;
pub mod source;
pub mod types;

pub use defaults::{default_baits, default_leaderboard_weight, default_rarities};
pub use source::{default_config_dir, CatalogSource, InMemorySource, YamlDirSource};
pub use types::{BaitEntry, RarityEntry, Settings};
