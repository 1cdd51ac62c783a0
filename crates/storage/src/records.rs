//! On-disk record types: saved game and high-score entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blockfall_core::Snapshot;

/// Number of entries kept in the high-score table
pub const MAX_HIGH_SCORES: usize = 10;

/// A game in progress, as written to `game_state.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub saved_at: DateTime<Utc>,
}

impl SavedGame {
    pub fn now(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            saved_at: Utc::now(),
        }
    }
}

/// One finished game in the high-score table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub date: DateTime<Utc>,
}

impl HighScore {
    pub fn now(score: u32, level: u32, lines: u32) -> Self {
        Self {
            score,
            level,
            lines,
            date: Utc::now(),
        }
    }
}

/// Insert `entry`, keep the table sorted by descending score and cut it to
/// [`MAX_HIGH_SCORES`]. Equal scores keep their earlier entries first.
///
/// Returns the entry's 0-based rank, or `None` if it did not make the table.
pub fn insert_high_score(table: &mut Vec<HighScore>, entry: HighScore) -> Option<usize> {
    let rank = table.iter().take_while(|e| e.score >= entry.score).count();
    if rank >= MAX_HIGH_SCORES {
        return None;
    }
    table.insert(rank, entry);
    table.truncate(MAX_HIGH_SCORES);
    Some(rank)
}
