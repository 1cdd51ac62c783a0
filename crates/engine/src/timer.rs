//! Automatic drop timer
//!
//! A fixed-timestep accumulator: the frame loop feeds it the elapsed time and
//! it reports when a drop is due. At most one drop fires per call; time past
//! the interval is discarded, so a stalled frame never replays missed drops.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl DropTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Re-arm with a (possibly new) interval; the next drop is a full interval away
    pub fn reset(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
        self.elapsed_ms = 0;
    }

    /// Add elapsed time. Returns true when a drop is due.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms < self.interval_ms {
            return false;
        }
        self.elapsed_ms = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_interval() {
        let mut timer = DropTimer::new(800);
        assert!(!timer.advance(500));
        assert!(!timer.advance(299));
        assert!(timer.advance(1));
        assert_eq!(timer.elapsed_ms(), 0);
    }

    #[test]
    fn long_frames_fire_once() {
        let mut timer = DropTimer::new(100);
        assert!(timer.advance(1000));
        assert!(!timer.advance(99));
        assert!(timer.advance(1));
    }

    #[test]
    fn reset_rearms_with_new_interval() {
        let mut timer = DropTimer::new(800);
        timer.advance(700);
        timer.reset(720);
        assert_eq!(timer.interval_ms(), 720);
        assert!(!timer.advance(719));
        assert!(timer.advance(1));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut timer = DropTimer::new(0);
        assert_eq!(timer.interval_ms(), 1);
        assert!(!timer.advance(0));
        assert!(timer.advance(1));
    }
}
