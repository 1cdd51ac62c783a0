//! Game engine - owns the current state and drives it
//!
//! The engine is the only place game state is replaced. Each command asks the
//! core for a [`Transition`]; when one comes back the engine plays its events,
//! re-arms the drop timer if the level moved, persists, and swaps the state in.

use tracing::{debug, info, warn};

use blockfall_core::{GameState, PieceGenerator, Snapshot, Transition};
use blockfall_types::Command;

use crate::collaborators::{EventSink, GameStore};
use crate::timer::DropTimer;

pub struct Engine<G, S, E> {
    state: GameState,
    generator: G,
    store: S,
    sink: E,
    timer: DropTimer,
}

impl<G, S, E> Engine<G, S, E>
where
    G: PieceGenerator,
    S: GameStore,
    E: EventSink,
{
    /// Engine with a not-yet-started game
    pub fn new(generator: G, store: S, sink: E) -> Self {
        let state = GameState::new();
        let timer = DropTimer::new(state.drop_interval_ms());
        Self {
            state,
            generator,
            store,
            sink,
            timer,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn timer(&self) -> &DropTimer {
        &self.timer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    /// Dispatch a player command. Returns true if the state changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::TogglePause => self.toggle_pause(),
            Command::Start => {
                self.start();
                true
            }
            Command::Resume => self.resume_from_snapshot(),
        }
    }

    /// Discard whatever is in progress and start a fresh game
    pub fn start(&mut self) {
        self.state = GameState::started(&mut self.generator);
        self.timer.reset(self.state.drop_interval_ms());
        info!("new game started");
        self.persist();
    }

    /// Whether the store holds a game that can be continued
    pub fn can_resume(&self) -> bool {
        matches!(self.load_saved(), Some(saved) if saved.restore().is_some())
    }

    /// Continue the saved game. Returns false (state unchanged) when there is
    /// none or it cannot be restored.
    pub fn resume_from_snapshot(&mut self) -> bool {
        let Some(snapshot) = self.load_saved() else {
            return false;
        };
        let Some(state) = snapshot.restore() else {
            warn!("saved game is corrupt, ignoring it");
            return false;
        };
        self.state = state;
        self.timer.reset(self.state.drop_interval_ms());
        info!(
            score = self.state.score(),
            level = self.state.level(),
            lines = self.state.lines(),
            "resumed saved game"
        );
        self.persist();
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        let Some(state) = self.state.toggle_pause() else {
            return false;
        };
        self.state = state;
        if self.state.is_paused() {
            debug!("paused");
        } else {
            // A full interval before the next drop after unpausing.
            self.timer.reset(self.state.drop_interval_ms());
            debug!("unpaused");
            self.persist();
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        let transition = self.state.move_horizontal(-1);
        self.commit(transition)
    }

    pub fn move_right(&mut self) -> bool {
        let transition = self.state.move_horizontal(1);
        self.commit(transition)
    }

    pub fn rotate(&mut self) -> bool {
        let transition = self.state.rotate();
        self.commit(transition)
    }

    pub fn soft_drop(&mut self) -> bool {
        let transition = self.state.soft_drop(&mut self.generator);
        self.commit(transition)
    }

    pub fn hard_drop(&mut self) -> bool {
        let transition = self.state.hard_drop(&mut self.generator);
        self.commit(transition)
    }

    /// Feed elapsed frame time to the drop timer
    ///
    /// The timer only runs while the game is running and unpaused. Returns
    /// true when an automatic drop was applied.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.state.is_running() || self.state.is_paused() {
            return false;
        }
        if !self.timer.advance(elapsed_ms) {
            return false;
        }
        self.soft_drop()
    }

    fn commit(&mut self, transition: Option<Transition>) -> bool {
        let Some(Transition { state, events }) = transition else {
            return false;
        };
        let previous_level = self.state.level();
        self.state = state;

        for event in &events {
            self.sink.play(event);
        }

        if self.state.level() != previous_level {
            self.timer.reset(self.state.drop_interval_ms());
            debug!(level = self.state.level(), "level changed");
        }

        if self.state.is_over() {
            self.finish();
        } else {
            self.persist();
        }
        true
    }

    fn finish(&mut self) {
        let (score, level, lines) = (self.state.score(), self.state.level(), self.state.lines());
        info!(score, level, lines, "game over");
        if let Err(err) = self.store.record_high_score(score, level, lines) {
            warn!(%err, "failed to record high score");
        }
        if let Err(err) = self.store.clear_snapshot() {
            warn!(%err, "failed to clear saved game");
        }
    }

    fn persist(&mut self) {
        if !self.state.is_running() || self.state.is_paused() {
            return;
        }
        let snapshot = Snapshot::from(&self.state);
        if let Err(err) = self.store.save_snapshot(&snapshot) {
            warn!(%err, "failed to save game");
        }
    }

    fn load_saved(&self) -> Option<Snapshot> {
        match self.store.load_snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(%err, "failed to load saved game");
                None
            }
        }
    }
}
