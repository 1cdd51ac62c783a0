//! Terminal bell as an audio sink
//!
//! The terminal has one sound, so only the events worth interrupting for ring
//! it: line clears (twice for four rows), level ups and game over.

use std::io::{self, Stdout, Write};

use crate::core::GameEvent;
use crate::engine::EventSink;

const BEL: &[u8] = b"\x07";

pub struct TerminalBell<W: Write = Stdout> {
    out: W,
}

impl TerminalBell<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalBell<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Number of rings for an event
    pub fn rings_for(event: &GameEvent) -> usize {
        match event {
            GameEvent::LineClear(_) if event.is_tetris() => 2,
            GameEvent::LineClear(_) | GameEvent::LevelUp { .. } | GameEvent::GameOver { .. } => 1,
            GameEvent::Move | GameEvent::Rotate | GameEvent::HardDrop { .. } | GameEvent::Lock => 0,
        }
    }
}

impl<W: Write> EventSink for TerminalBell<W> {
    fn play(&mut self, event: &GameEvent) {
        let rings = Self::rings_for(event);
        if rings == 0 {
            return;
        }
        // Best effort.
        for _ in 0..rings {
            let _ = self.out.write_all(BEL);
        }
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::{ClearedLineRecord, ClearedLines, COLS};
    use crate::types::ColorId;

    fn clear(rows: u8) -> GameEvent {
        let mut records = ClearedLines::new();
        for row in 0..rows {
            records.push(ClearedLineRecord {
                row: 16 + row,
                colors: [ColorId::Cyan; COLS],
            });
        }
        GameEvent::LineClear(records)
    }

    #[test]
    fn rings_only_for_notable_events() {
        let mut bell = TerminalBell::with_writer(Vec::new());
        bell.play(&GameEvent::Move);
        bell.play(&GameEvent::Lock);
        bell.play(&GameEvent::HardDrop { distance: 4 });
        assert!(bell.writer().is_empty());

        bell.play(&clear(1));
        bell.play(&GameEvent::LevelUp { level: 1 });
        assert_eq!(bell.writer().len(), 2);

        bell.play(&clear(4));
        assert_eq!(bell.writer().len(), 4);
        assert!(bell.writer().iter().all(|&b| b == 0x07));
    }
}
