//! In-memory progression store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::{LeaderboardEntry, PlayerId, PlayerStats};
use super::ProgressionStore;
use crate::catalog::RarityCatalog;
use crate::error::StoreError;
use crate::fishing::ResolvedCatch;

/// Keeps every player's statistics in a map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryProgressionStore {
    players: HashMap<PlayerId, PlayerStats>,
}

impl InMemoryProgressionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

impl ProgressionStore for InMemoryProgressionStore {
    fn record_catch(
        &mut self,
        player: PlayerId,
        catch: &ResolvedCatch,
        value: f64,
    ) -> Result<(), StoreError> {
        let now = chrono::Utc::now().timestamp();
        self.players
            .entry(player)
            .or_default()
            .record(catch, value, now);
        Ok(())
    }

    fn player_stats(&self, player: PlayerId) -> Option<PlayerStats> {
        self.players.get(&player).cloned()
    }

    fn leaderboard(
        &self,
        rarities: &RarityCatalog,
        rarity_key: Option<&str>,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        // Validates the key even when nobody has played yet
        if let Some(key) = rarity_key {
            rarities.get(key)?;
        }

        let mut entries = Vec::with_capacity(self.players.len());
        for (&player, stats) in &self.players {
            let score = stats.score(rarities, rarity_key)?;
            if score > 0 {
                entries.push(LeaderboardEntry { player, score });
            }
        }

        entries.sort_by(|a, b| b.score.cmp(&a.score).then(a.player.cmp(&b.player)));
        entries.truncate(limit);
        Ok(entries)
    }

    fn reset_player(&mut self, player: PlayerId) -> Result<bool, StoreError> {
        Ok(self.players.remove(&player).is_some())
    }
}
