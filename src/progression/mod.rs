//! Per-player catch statistics and leaderboards.
//!
//! Resolution never writes here itself. Callers decide when a catch is
//! recorded and when the store is flushed to disk.

pub mod memory;
pub mod persistence;
pub mod types;

pub use memory::InMemoryProgressionStore;
pub use persistence::JsonProgressionStore;
pub use types::{LeaderboardEntry, PlayerId, PlayerStats};

use crate::catalog::RarityCatalog;
use crate::error::StoreError;
use crate::fishing::ResolvedCatch;

/// Storage for aggregate player statistics.
pub trait ProgressionStore {
    /// Count one catch worth `value` for `player`.
    fn record_catch(
        &mut self,
        player: PlayerId,
        catch: &ResolvedCatch,
        value: f64,
    ) -> Result<(), StoreError>;

    fn player_stats(&self, player: PlayerId) -> Option<PlayerStats>;

    /// Top `limit` players by score, highest first.
    ///
    /// Scores come from each rarity's leaderboard weight in `rarities`; see
    /// [`PlayerStats::score`]. Players scoring zero are left out.
    fn leaderboard(
        &self,
        rarities: &RarityCatalog,
        rarity_key: Option<&str>,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, StoreError>;

    /// Clear a player's statistics. Returns whether the player had any.
    fn reset_player(&mut self, player: PlayerId) -> Result<bool, StoreError>;

    /// Persist pending changes.
    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}
