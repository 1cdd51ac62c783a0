//! JSON file store
//!
//! Two files in a save directory:
//! - `game_state.json`: the game in progress (removed on game over)
//! - `high_scores.json`: the top 10 finished games
//!
//! Writes go to a temporary file that is then renamed over the target, so a
//! crash mid-write leaves the previous file intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use blockfall_core::Snapshot;
use blockfall_engine::GameStore;

use crate::error::{Result, StoreError};
use crate::records::{insert_high_score, HighScore, SavedGame};

pub const GAME_STATE_FILE: &str = "game_state.json";
pub const HIGH_SCORES_FILE: &str = "high_scores.json";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Use `dir` as the save directory, creating it if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The saved game, strictly: parse failures and unrestorable snapshots are errors
    pub fn read_saved_game(&self) -> Result<Option<SavedGame>> {
        let Some(saved) = self.read_json::<SavedGame>(GAME_STATE_FILE)? else {
            return Ok(None);
        };
        if saved.snapshot.restore().is_none() {
            return Err(StoreError::CorruptSnapshot);
        }
        Ok(Some(saved))
    }

    pub fn has_saved_game(&self) -> bool {
        matches!(self.read_saved_game(), Ok(Some(_)))
    }

    /// High-score table, best first. A missing or unreadable file is an empty table.
    pub fn high_scores(&self) -> Vec<HighScore> {
        match self.read_json::<Vec<HighScore>>(HIGH_SCORES_FILE) {
            Ok(table) => table.unwrap_or_default(),
            Err(err) => {
                tracing::warn!("ignoring unreadable high scores: {err}");
                Vec::new()
            }
        }
    }

    /// Add a finished game. Returns its rank if it made the table.
    pub fn add_high_score(&mut self, entry: HighScore) -> Result<Option<usize>> {
        let mut table = self.high_scores();
        let rank = insert_high_score(&mut table, entry);
        if rank.is_some() {
            self.write_json(HIGH_SCORES_FILE, &table)?;
        }
        Ok(rank)
    }

    pub fn clear_high_scores(&mut self) -> Result<()> {
        self.remove(HIGH_SCORES_FILE)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let text = match fs::read_to_string(self.path(name)) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        let tmp = self.path(&format!("{name}.tmp"));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, self.path(name))?;
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<()> {
        match fs::remove_file(self.path(name)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl GameStore for JsonFileStore {
    type Error = StoreError;

    /// Corrupt save files behave as absent
    fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        match self.read_saved_game() {
            Ok(saved) => Ok(saved.map(|s| s.snapshot)),
            Err(err @ (StoreError::Json(_) | StoreError::CorruptSnapshot)) => {
                tracing::warn!(file = GAME_STATE_FILE, "ignoring saved game: {err}");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn save_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.write_json(GAME_STATE_FILE, &SavedGame::now(*snapshot))
    }

    fn clear_snapshot(&mut self) -> Result<()> {
        self.remove(GAME_STATE_FILE)
    }

    fn record_high_score(&mut self, score: u32, level: u32, lines: u32) -> Result<()> {
        self.add_high_score(HighScore::now(score, level, lines)).map(|_| ())
    }
}
