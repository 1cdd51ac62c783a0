//! Scoring module - line clear points, drop bonus, and leveling
//!
//! Scoring rules:
//! - Line clears use the classic table `[0, 100, 300, 500, 800]`, multiplied by `(level + 1)`.
//!   The level is the one in effect *before* the clear is counted.
//! - A hard drop adds 2 points per row travelled, on top of any clear.
//! - Soft drops score nothing.
//! - Level is `total_lines / 10`.

use crate::types::{DROP_INTERVALS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_SCORES};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points for the cleared rows (already multiplied by level).
    pub line_clear_score: u32,
    /// Hard drop bonus added on top of `line_clear_score`.
    pub drop_bonus: u32,
    pub total: u32,
}

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: current level (0-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&base) => base.saturating_mul(level.saturating_add(1)),
        None => 0,
    }
}

/// Calculate hard drop bonus: +2 per row travelled
pub fn calculate_hard_drop_score(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}

/// Calculate the full score for one placement.
///
/// `drop_distance` is the hard drop distance, or 0 for a soft drop / gravity lock.
pub fn calculate_score(lines: usize, level: u32, drop_distance: u32) -> ScoreResult {
    let line_clear_score = calculate_line_score(lines, level);
    let drop_bonus = calculate_hard_drop_score(drop_distance);
    ScoreResult {
        line_clear_score,
        drop_bonus,
        total: line_clear_score.saturating_add(drop_bonus),
    }
}

/// Level management
/// Level increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Get drop interval for a level (in milliseconds)
/// Levels past the table use its last (fastest) entry
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let last = DROP_INTERVALS.len() - 1;
    DROP_INTERVALS[(level as usize).min(last)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(calculate_line_score(0, 0), 0);
        assert_eq!(calculate_line_score(1, 0), 100);
        assert_eq!(calculate_line_score(2, 0), 300);
        assert_eq!(calculate_line_score(3, 0), 500);
        assert_eq!(calculate_line_score(4, 0), 800);

        // Level 2
        assert_eq!(calculate_line_score(1, 2), 300);
        assert_eq!(calculate_line_score(4, 5), 800 * 6);
    }

    #[test]
    fn test_counts_above_four_score_nothing() {
        assert_eq!(calculate_line_score(5, 0), 0);
        assert_eq!(calculate_line_score(20, 3), 0);
    }

    #[test]
    fn test_drop_bonus() {
        assert_eq!(calculate_hard_drop_score(0), 0);
        assert_eq!(calculate_hard_drop_score(18), 36);
    }

    #[test]
    fn test_full_score_calculation() {
        let result = calculate_score(2, 1, 10);
        assert_eq!(result.line_clear_score, 600);
        assert_eq!(result.drop_bonus, 20);
        assert_eq!(result.total, 620);

        assert_eq!(calculate_score(0, 7, 0), ScoreResult::default());
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 0);
        assert_eq!(calculate_level(9), 0);
        assert_eq!(calculate_level(10), 1);
        assert_eq!(calculate_level(25), 2);
        assert_eq!(calculate_level(100), 10);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(get_drop_interval_ms(0), 800);
        assert_eq!(get_drop_interval_ms(2), 630);
        assert_eq!(get_drop_interval_ms(15), 20);
        assert_eq!(get_drop_interval_ms(99), 20);
        assert_eq!(get_drop_interval_ms(u32::MAX), 20);
    }
}
