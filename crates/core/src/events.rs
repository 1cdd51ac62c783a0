//! Game events emitted by state transitions
//!
//! Events describe what just happened so presentation and audio can react
//! without diffing states. They carry no behavior of their own.

use crate::field::ClearedLines;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The active piece moved one column
    Move,
    /// The active piece rotated (possibly kicked)
    Rotate,
    /// A hard drop moved the piece `distance` rows before locking
    HardDrop { distance: u8 },
    /// The active piece was merged into the field
    Lock,
    /// Rows removed by the lock, top to bottom
    LineClear(ClearedLines),
    /// The level increased
    LevelUp { level: u32 },
    /// The next piece could not spawn
    GameOver { score: u32, level: u32, lines: u32 },
}

impl GameEvent {
    /// Short stable name, used for logging and sound cues
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Move => "move",
            GameEvent::Rotate => "rotate",
            GameEvent::HardDrop { .. } => "drop",
            GameEvent::Lock => "land",
            GameEvent::LineClear(records) if records.len() == 4 => "tetris",
            GameEvent::LineClear(_) => "clear",
            GameEvent::LevelUp { .. } => "levelUp",
            GameEvent::GameOver { .. } => "gameOver",
        }
    }

    /// Four rows cleared at once
    pub fn is_tetris(&self) -> bool {
        matches!(self, GameEvent::LineClear(records) if records.len() == 4)
    }
}
