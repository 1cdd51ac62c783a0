//! In-memory store, for tests and for play with saving turned off

use std::convert::Infallible;

use blockfall_core::Snapshot;
use blockfall_engine::GameStore;

use crate::records::{insert_high_score, HighScore};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<Snapshot>,
    high_scores: Vec<HighScore>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_saved_game(&self) -> bool {
        self.snapshot.is_some_and(|s| s.restore().is_some())
    }

    pub fn high_scores(&self) -> Vec<HighScore> {
        self.high_scores.clone()
    }

    pub fn add_high_score(&mut self, entry: HighScore) -> Option<usize> {
        insert_high_score(&mut self.high_scores, entry)
    }

    pub fn clear_high_scores(&mut self) {
        self.high_scores.clear();
    }
}

impl GameStore for MemoryStore {
    type Error = Infallible;

    fn load_snapshot(&self) -> Result<Option<Snapshot>, Infallible> {
        Ok(self.snapshot)
    }

    fn save_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), Infallible> {
        self.snapshot = Some(*snapshot);
        Ok(())
    }

    fn clear_snapshot(&mut self) -> Result<(), Infallible> {
        self.snapshot = None;
        Ok(())
    }

    fn record_high_score(&mut self, score: u32, level: u32, lines: u32) -> Result<(), Infallible> {
        self.add_high_score(HighScore::now(score, level, lines));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::types::PieceKind;
    use blockfall_core::{GameState, ScriptedGenerator};

    #[test]
    fn snapshot_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(!store.has_saved_game());

        let state = GameState::started(&mut ScriptedGenerator::repeat(PieceKind::S));
        let snapshot = Snapshot::from(&state);
        store.save_snapshot(&snapshot).unwrap();
        assert!(store.has_saved_game());
        assert_eq!(store.load_snapshot().unwrap(), Some(snapshot));

        store.clear_snapshot().unwrap();
        assert!(!store.has_saved_game());
    }

    #[test]
    fn high_scores_are_ranked() {
        let mut store = MemoryStore::new();
        store.record_high_score(10, 0, 0).unwrap();
        store.record_high_score(30, 0, 0).unwrap();
        store.record_high_score(20, 0, 0).unwrap();
        let scores: Vec<u32> = store.high_scores().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![30, 20, 10]);

        store.clear_high_scores();
        assert!(store.high_scores().is_empty());
    }
}
