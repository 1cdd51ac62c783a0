//! Persistence for saved games and high scores
//!
//! - [`JsonFileStore`]: JSON files in a save directory
//! - [`MemoryStore`]: nothing touches the disk
//! - [`Storage`]: either of the two, picked at startup
//!
//! All three implement [`GameStore`], so they plug straight into the engine.

mod error;
mod file;
mod memory;
mod records;

use std::convert::Infallible;

use blockfall_core::Snapshot;
use blockfall_engine::GameStore;

pub use error::{Result, StoreError};
pub use file::{JsonFileStore, GAME_STATE_FILE, HIGH_SCORES_FILE};
pub use memory::MemoryStore;
pub use records::{insert_high_score, HighScore, SavedGame, MAX_HIGH_SCORES};

impl From<Infallible> for StoreError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Store selected at runtime
#[derive(Debug, Clone)]
pub enum Storage {
    Json(JsonFileStore),
    Memory(MemoryStore),
}

impl Storage {
    pub fn has_saved_game(&self) -> bool {
        match self {
            Storage::Json(store) => store.has_saved_game(),
            Storage::Memory(store) => store.has_saved_game(),
        }
    }

    /// High-score table, best first
    pub fn high_scores(&self) -> Vec<HighScore> {
        match self {
            Storage::Json(store) => store.high_scores(),
            Storage::Memory(store) => store.high_scores(),
        }
    }

    pub fn clear_high_scores(&mut self) -> Result<()> {
        match self {
            Storage::Json(store) => store.clear_high_scores(),
            Storage::Memory(store) => {
                store.clear_high_scores();
                Ok(())
            }
        }
    }
}

impl GameStore for Storage {
    type Error = StoreError;

    fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        match self {
            Storage::Json(store) => store.load_snapshot(),
            Storage::Memory(store) => Ok(store.load_snapshot()?),
        }
    }

    fn save_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        match self {
            Storage::Json(store) => store.save_snapshot(snapshot),
            Storage::Memory(store) => Ok(store.save_snapshot(snapshot)?),
        }
    }

    fn clear_snapshot(&mut self) -> Result<()> {
        match self {
            Storage::Json(store) => store.clear_snapshot(),
            Storage::Memory(store) => Ok(store.clear_snapshot()?),
        }
    }

    fn record_high_score(&mut self, score: u32, level: u32, lines: u32) -> Result<()> {
        match self {
            Storage::Json(store) => store.record_high_score(score, level, lines),
            Storage::Memory(store) => Ok(store.record_high_score(score, level, lines)?),
        }
    }
}
