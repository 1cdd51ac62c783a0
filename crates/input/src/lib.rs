//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`Command`](blockfall_types::Command)s.
//! One key press is one command; the game has no auto-repeat of its own and
//! relies on the terminal's key repeat.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};
