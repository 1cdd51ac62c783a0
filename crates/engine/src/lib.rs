//! Game engine - drives the core state machine in real time
//!
//! [`Engine`] owns the current [`GameState`](blockfall_core::GameState), a
//! piece generator, a [`GameStore`] and an [`EventSink`]. Front-ends feed it
//! [`Command`](blockfall_types::Command)s and elapsed frame time; it applies
//! the automatic drop, plays events and persists after every transition.

mod collaborators;
mod engine;
mod timer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use collaborators::{EventSink, GameStore, NullSink, TracingSink};
pub use engine::Engine;
pub use timer::DropTimer;
