//! Snapshot module - the persisted form of a game in progress
//!
//! The field is stored as a grid of color codes (0 = empty), which keeps save
//! files compact and readable. Converting a state into a snapshot always
//! works; converting back checks the data and gives `None` when it is corrupt.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::{Field, COLS, ROWS};
use crate::game_state::GameState;
use crate::geometry::is_valid_position;
use crate::pieces::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub board: [[u8; COLS]; ROWS],
    pub active: Option<Piece>,
    pub next: Option<Piece>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl Snapshot {
    /// Rebuild a running, unpaused game
    ///
    /// Fails when the board holds unknown color codes, a piece shape is
    /// malformed, or there is no active piece that fits on the board.
    pub fn restore(&self) -> Option<GameState> {
        let field = Field::from_code_grid(&self.board)?;
        let active = self
            .active
            .filter(|p| p.shape.is_well_formed() && is_valid_position(&field, p, 0, 0))?;
        let next = match self.next {
            Some(next) if !next.shape.is_well_formed() => return None,
            next => next,
        };
        Some(GameState::resumed(
            field,
            Some(active),
            next,
            self.score,
            self.level,
            self.lines,
        ))
    }
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        let mut board = [[0u8; COLS]; ROWS];
        state.field().write_code_grid(&mut board);
        Self {
            board,
            active: state.active(),
            next: state.next(),
            score: state.score(),
            level: state.level(),
            lines: state.lines(),
        }
    }
}
