//! Catalog snapshots and atomic reload.
//!
//! A [`Catalogs`] value is built completely before it is published. Readers
//! take an `Arc` to the current snapshot and keep it for as long as they
//! need, so a reload never changes a snapshot someone is already using.

use std::sync::{Arc, PoisonError, RwLock};

use super::bait::BaitCatalog;
use super::rarity::RarityCatalog;
use crate::config::CatalogSource;
use crate::error::ConfigurationError;

/// One consistent set of rarities and the baits validated against them.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogs {
    pub rarities: RarityCatalog,
    pub baits: BaitCatalog,
}

impl Catalogs {
    /// Load both catalogs from a source.
    pub fn load(source: &dyn CatalogSource) -> Result<Self, ConfigurationError> {
        let rarity_entries = source.rarity_entries()?;
        let rarities = RarityCatalog::load(&rarity_entries)?;
        let bait_entries = source.bait_entries()?;
        let baits = BaitCatalog::load(&bait_entries, &rarities)?;
        Ok(Self { rarities, baits })
    }
}

/// Shared handle to the current catalog snapshot.
#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<Catalogs>>,
}

impl CatalogHandle {
    pub fn new(catalogs: Catalogs) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalogs)),
        }
    }

    /// Load the initial snapshot from a source.
    pub fn load(source: &dyn CatalogSource) -> Result<Self, ConfigurationError> {
        let catalogs = Catalogs::load(source)?;
        log_loaded(&catalogs);
        Ok(Self::new(catalogs))
    }

    /// The snapshot in effect right now.
    pub fn snapshot(&self) -> Arc<Catalogs> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the current snapshot.
    pub fn install(&self, catalogs: Catalogs) -> Arc<Catalogs> {
        let next = Arc::new(catalogs);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&next);
        next
    }

    /// Rebuild the catalogs from `source` and swap them in.
    ///
    /// On failure the previous snapshot stays installed.
    pub fn reload(&self, source: &dyn CatalogSource) -> Result<Arc<Catalogs>, ConfigurationError> {
        match Catalogs::load(source) {
            Ok(catalogs) => {
                log_loaded(&catalogs);
                Ok(self.install(catalogs))
            }
            Err(e) => {
                log::error!("Reload rejected, keeping previous catalogs: {}", e);
                Err(e)
            }
        }
    }
}

fn log_loaded(catalogs: &Catalogs) {
    log::info!(
        "Loaded {} rarities and {} baits",
        catalogs.rarities.len(),
        catalogs.baits.len()
    );
}
