//! Progression store backed by a JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::memory::InMemoryProgressionStore;
use super::types::{LeaderboardEntry, PlayerId, PlayerStats};
use super::ProgressionStore;
use crate::catalog::RarityCatalog;
use crate::error::StoreError;
use crate::fishing::ResolvedCatch;

/// Keeps statistics in memory and writes them out as pretty JSON on flush.
#[derive(Debug)]
pub struct JsonProgressionStore {
    path: PathBuf,
    players: InMemoryProgressionStore,
    dirty: bool,
}

impl JsonProgressionStore {
    /// Open the store at `path`; a missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let players = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => InMemoryProgressionStore::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            players,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are changes not yet written.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl ProgressionStore for JsonProgressionStore {
    fn record_catch(
        &mut self,
        player: PlayerId,
        catch: &ResolvedCatch,
        value: f64,
    ) -> Result<(), StoreError> {
        self.players.record_catch(player, catch, value)?;
        self.dirty = true;
        Ok(())
    }

    fn player_stats(&self, player: PlayerId) -> Option<PlayerStats> {
        self.players.player_stats(player)
    }

    fn leaderboard(
        &self,
        rarities: &RarityCatalog,
        rarity_key: Option<&str>,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        self.players.leaderboard(rarities, rarity_key, limit)
    }

    fn reset_player(&mut self, player: PlayerId) -> Result<bool, StoreError> {
        let removed = self.players.reset_player(player)?;
        self.dirty |= removed;
        Ok(removed)
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.players)?;
        fs::write(&self.path, json)?;
        self.dirty = false;
        Ok(())
    }
}
