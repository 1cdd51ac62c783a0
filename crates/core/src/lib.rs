//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the game: field, pieces, collision,
//! line clearing, scoring and the immutable game state. It has **zero
//! dependencies** on UI, timers, storage, or I/O.
//!
//! # Module Structure
//!
//! - [`field`]: 10x20 play field, piece merging and line clearing
//! - [`geometry`]: collision tests, clockwise rotation, wall kicks
//! - [`pieces`]: shape matrices and piece values
//! - [`generator`]: uniform random piece generation
//! - [`scoring`]: line clear points, hard drop bonus, level and speed tables
//! - [`game_state`]: the game state and every transition on it
//! - [`events`]: what a transition reports to presentation and audio
//! - [`snapshot`]: persisted form of a game in progress
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, ScriptedGenerator};
//! use blockfall_core::types::PieceKind;
//!
//! let mut generator = ScriptedGenerator::repeat(PieceKind::O);
//! let game = GameState::started(&mut generator);
//!
//! // Every command returns a new state, or None when it does not apply.
//! let game = game.move_horizontal(1).map(|t| t.state).unwrap_or(game);
//! let dropped = game.hard_drop(&mut generator).expect("game is running");
//!
//! assert_eq!(dropped.state.score(), 36); // 18 rows x 2
//! ```

pub mod events;
pub mod field;
pub mod game_state;
pub mod generator;
pub mod geometry;
pub mod pieces;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use events::GameEvent;
pub use field::{ClearedLineRecord, Field, LineClear};
pub use game_state::{Events, GameState, Phase, Transition};
pub use generator::{PieceGenerator, ScriptedGenerator, UniformGenerator};
pub use geometry::{drop_distance, is_valid_position, rotate_clockwise, try_rotate};
pub use pieces::{canonical_shape, Piece, Shape};
pub use scoring::{calculate_level, calculate_score, get_drop_interval_ms, ScoreResult};
pub use snapshot::Snapshot;
