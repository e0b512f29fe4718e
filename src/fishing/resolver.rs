//! Catch resolution against the live catalogs.

use std::sync::Arc;

use rand::Rng;

use super::logic::resolve_catch;
use super::types::ResolvedCatch;
use crate::catalog::{CatalogHandle, Catalogs};
use crate::error::CatchError;

/// Resolves catches using whatever catalog snapshot is current.
///
/// Cheap to clone; clones share the same catalog handle.
#[derive(Debug, Clone)]
pub struct CatchResolver {
    catalogs: Arc<CatalogHandle>,
}

impl CatchResolver {
    pub fn new(catalogs: Arc<CatalogHandle>) -> Self {
        Self { catalogs }
    }

    pub fn catalogs(&self) -> &Arc<CatalogHandle> {
        &self.catalogs
    }

    /// Resolve one catch, looking the bait up by key.
    ///
    /// A single snapshot is used for the bait lookup and the draw, so a
    /// concurrent reload is either fully visible or not at all.
    pub fn resolve(
        &self,
        bait_key: Option<&str>,
        lure_level: u32,
        rng: &mut impl Rng,
    ) -> Result<ResolvedCatch, CatchError> {
        let snapshot = self.catalogs.snapshot();
        resolve_in(&snapshot, bait_key, lure_level, rng)
    }
}

/// Resolve one catch against a given snapshot.
pub fn resolve_in(
    catalogs: &Catalogs,
    bait_key: Option<&str>,
    lure_level: u32,
    rng: &mut impl Rng,
) -> Result<ResolvedCatch, CatchError> {
    let bait = bait_key.map(|key| catalogs.baits.get(key)).transpose()?;
    Ok(resolve_catch(&catalogs.rarities, bait, lure_level, rng)?)
}
