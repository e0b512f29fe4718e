//! Rarity and bait catalogs.

pub mod bait;
pub mod handle;
pub mod rarity;

pub use bait::{Bait, BaitCatalog};
pub use handle::{CatalogHandle, Catalogs};
pub use rarity::{canonical_key, Rarity, RarityCatalog};
