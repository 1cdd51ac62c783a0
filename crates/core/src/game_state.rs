//! Game state module - immutable game state and its transitions
//!
//! A [`GameState`] is a plain value. Every command produces a brand new state
//! (plus the events it caused) or `None` when the command does not apply, in
//! which case the caller keeps the old state. Nothing here mutates in place,
//! so a transition can never leave a half-updated state behind.

use arrayvec::ArrayVec;

use crate::events::GameEvent;
use crate::field::Field;
use crate::generator::PieceGenerator;
use crate::geometry::{drop_distance, is_valid_position, try_rotate};
use crate::pieces::Piece;
use crate::scoring::{calculate_level, calculate_score, get_drop_interval_ms};

/// Lifecycle phase derived from the state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Events produced by a single transition (at most five today)
pub type Events = ArrayVec<GameEvent, 8>;

/// A new state together with the events that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: GameState,
    pub events: Events,
}

impl Transition {
    fn quiet(state: GameState) -> Self {
        Self {
            state,
            events: Events::new(),
        }
    }

    fn with_event(state: GameState, event: GameEvent) -> Self {
        let mut events = Events::new();
        events.push(event);
        Self { state, events }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    field: Field,
    active: Option<Piece>,
    next: Option<Piece>,
    score: u32,
    level: u32,
    lines: u32,
    over: bool,
    paused: bool,
    running: bool,
}

impl GameState {
    /// Empty field, no pieces, not running
    pub fn new() -> Self {
        Self {
            field: Field::new(),
            active: None,
            next: None,
            score: 0,
            level: 0,
            lines: 0,
            over: false,
            paused: false,
            running: false,
        }
    }

    /// Fresh running game: empty field, new active and next pieces, zero score
    pub fn started(generator: &mut impl PieceGenerator) -> Self {
        let active = generator.random_piece();
        let next = generator.random_piece();
        Self {
            active: Some(active),
            next: Some(next),
            running: true,
            ..Self::new()
        }
    }

    /// Running, unpaused game rebuilt from saved parts
    pub fn resumed(
        field: Field,
        active: Option<Piece>,
        next: Option<Piece>,
        score: u32,
        level: u32,
        lines: u32,
    ) -> Self {
        Self {
            field,
            active,
            next,
            score,
            level,
            lines,
            over: false,
            paused: false,
            running: true,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        match (self.over, self.running, self.paused) {
            (true, _, _) => Phase::GameOver,
            (false, true, true) => Phase::Paused,
            (false, true, false) => Phase::Running,
            (false, false, _) => Phase::NotStarted,
        }
    }

    /// Automatic drop interval at the current level
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(self.level)
    }

    /// Row the active piece would land on (for the ghost piece)
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.y.saturating_add(drop_distance(&self.field, &active)))
    }

    /// Active piece, if movement commands currently apply
    fn controllable(&self) -> Option<Piece> {
        if !self.running || self.paused || self.over {
            return None;
        }
        self.active
    }

    fn with_active(&self, piece: Piece) -> Self {
        Self {
            active: Some(piece),
            ..self.clone()
        }
    }

    /// Flip the pause flag. Only applies while running.
    pub fn toggle_pause(&self) -> Option<GameState> {
        if !self.running {
            return None;
        }
        Some(Self {
            paused: !self.paused,
            ..self.clone()
        })
    }

    /// Shift the active piece one column. `dx` must be -1 or +1.
    pub fn move_horizontal(&self, dx: i8) -> Option<Transition> {
        if dx != -1 && dx != 1 {
            return None;
        }
        let active = self.controllable()?;
        if !is_valid_position(&self.field, &active, dx, 0) {
            return None;
        }
        Some(Transition::with_event(
            self.with_active(active.shifted(dx, 0)),
            GameEvent::Move,
        ))
    }

    /// Rotate the active piece clockwise with horizontal kicks
    pub fn rotate(&self) -> Option<Transition> {
        let active = self.controllable()?;
        let rotated = try_rotate(&self.field, &active)?;
        Some(Transition::with_event(self.with_active(rotated), GameEvent::Rotate))
    }

    /// Move the active piece down one row, or lock it if it cannot fall
    ///
    /// Also used for the automatic drop tick.
    pub fn soft_drop(&self, generator: &mut impl PieceGenerator) -> Option<Transition> {
        let active = self.controllable()?;
        if is_valid_position(&self.field, &active, 0, 1) {
            return Some(Transition::quiet(self.with_active(active.shifted(0, 1))));
        }
        Some(self.lock(active, 0, Events::new(), generator))
    }

    /// Drop the active piece as far as it goes and lock it
    pub fn hard_drop(&self, generator: &mut impl PieceGenerator) -> Option<Transition> {
        let active = self.controllable()?;
        let distance = drop_distance(&self.field, &active);
        let mut events = Events::new();
        events.push(GameEvent::HardDrop {
            distance: distance as u8,
        });
        Some(self.lock(active.shifted(0, distance), distance as u32, events, generator))
    }

    /// Merge `piece`, clear lines, score, and spawn the next piece
    fn lock(
        &self,
        piece: Piece,
        drop_rows: u32,
        mut events: Events,
        generator: &mut impl PieceGenerator,
    ) -> Transition {
        let clear = self.field.merge_piece(&piece).clear_full_lines();
        let cleared = clear.count();

        // Score with the level in effect before this clear.
        let result = calculate_score(cleared, self.level, drop_rows);
        let lines = self.lines.saturating_add(cleared as u32);
        let level = calculate_level(lines);

        events.push(GameEvent::Lock);
        if cleared > 0 {
            events.push(GameEvent::LineClear(clear.records));
        }
        if level > self.level {
            events.push(GameEvent::LevelUp { level });
        }

        let promoted = match self.next {
            Some(next) => next,
            None => generator.random_piece(),
        };

        let mut state = Self {
            field: clear.field,
            active: None,
            next: Some(promoted),
            score: self.score.saturating_add(result.total),
            level,
            lines,
            over: false,
            paused: false,
            running: true,
        };

        if is_valid_position(&state.field, &promoted, 0, 0) {
            state.active = Some(promoted);
            state.next = Some(generator.random_piece());
        } else {
            state.over = true;
            state.running = false;
            events.push(GameEvent::GameOver {
                score: state.score,
                level: state.level,
                lines: state.lines,
            });
        }

        Transition { state, events }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
