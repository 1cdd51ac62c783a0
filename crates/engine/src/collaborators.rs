//! Collaborator seams: persistence and event sinks
//!
//! The engine is handed one of each at construction. Neither may fail a game
//! transition: store errors are logged and dropped, sinks return nothing.

use std::fmt::Display;

use tracing::debug;

use blockfall_core::{GameEvent, Snapshot};

/// Persistence of the game in progress and the high-score table
pub trait GameStore {
    type Error: Display;

    /// Saved game, if any
    fn load_snapshot(&self) -> Result<Option<Snapshot>, Self::Error>;

    fn save_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error>;

    fn clear_snapshot(&mut self) -> Result<(), Self::Error>;

    fn record_high_score(&mut self, score: u32, level: u32, lines: u32) -> Result<(), Self::Error>;
}

impl<S: GameStore + ?Sized> GameStore for &mut S {
    type Error = S::Error;

    fn load_snapshot(&self) -> Result<Option<Snapshot>, Self::Error> {
        (**self).load_snapshot()
    }

    fn save_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), Self::Error> {
        (**self).save_snapshot(snapshot)
    }

    fn clear_snapshot(&mut self) -> Result<(), Self::Error> {
        (**self).clear_snapshot()
    }

    fn record_high_score(&mut self, score: u32, level: u32, lines: u32) -> Result<(), Self::Error> {
        (**self).record_high_score(score, level, lines)
    }
}

/// Receives every event a transition produces (audio, effects, logging)
pub trait EventSink {
    fn play(&mut self, event: &GameEvent);
}

/// Ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn play(&mut self, _event: &GameEvent) {}
}

/// Logs every event at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn play(&mut self, event: &GameEvent) {
        match event {
            GameEvent::LineClear(records) => {
                let rows: Vec<u8> = records.iter().map(|r| r.row).collect();
                debug!(event = event.name(), ?rows, "game event");
            }
            GameEvent::HardDrop { distance } => debug!(event = event.name(), distance, "game event"),
            GameEvent::LevelUp { level } => debug!(event = event.name(), level, "game event"),
            GameEvent::GameOver { score, level, lines } => {
                debug!(event = event.name(), score, level, lines, "game event")
            }
            GameEvent::Move | GameEvent::Rotate | GameEvent::Lock => {
                debug!(event = event.name(), "game event")
            }
        }
    }
}

impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn play(&mut self, event: &GameEvent) {
        self.0.play(event);
        self.1.play(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn play(&mut self, event: &GameEvent) {
        (**self).play(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn play(&mut self, event: &GameEvent) {
        (**self).play(event);
    }
}

impl<S: EventSink> EventSink for Option<S> {
    fn play(&mut self, event: &GameEvent) {
        if let Some(sink) = self {
            sink.play(event);
        }
    }
}
