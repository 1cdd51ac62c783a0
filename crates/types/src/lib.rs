//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no required dependencies, so they can be used
//! by the rules engine, the terminal front-end and the save-file codec alike.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Drop Intervals by Level
//!
//! Gravity gets faster with every level (milliseconds per row):
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 800ms |
//! | 1 | 720ms |
//! | 2 | 630ms |
//! | 3 | 550ms |
//! | 4 | 470ms |
//! | 5 | 380ms |
//! | 6 | 300ms |
//! | 7 | 220ms |
//! | 8 | 130ms |
//! | 9 | 100ms |
//! | 10-14 | 80, 60, 50, 40, 30ms |
//! | 15+ | 20ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, ColorId, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.color(), ColorId::Purple);
//! assert_eq!(ColorId::from_code(piece.color().code()), Some(ColorId::Purple));
//!
//! assert_ne!(Command::Start, Command::Resume);
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Frame interval of the terminal game loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Automatic drop interval per level (milliseconds per row).
///
/// Levels past the end of the table use the last entry.
pub const DROP_INTERVALS: [u32; 16] = [
    800, 720, 630, 550, 470, 380, 300, 220, 130, 100, 80, 60, 50, 40, 30, 20,
];

/// Line clear scoring table, indexed by the number of rows cleared at once.
///
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Bonus points per row travelled by a hard drop.
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Total cleared lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// The seven tetromino piece kinds
///
/// Each kind has a fixed canonical shape and a fixed color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// The fixed color every piece of this kind is drawn with
    pub fn color(&self) -> ColorId {
        match self {
            PieceKind::I => ColorId::Cyan,
            PieceKind::O => ColorId::Yellow,
            PieceKind::T => ColorId::Purple,
            PieceKind::S => ColorId::Green,
            PieceKind::Z => ColorId::Red,
            PieceKind::J => ColorId::Blue,
            PieceKind::L => ColorId::Orange,
        }
    }
}

/// Block colors
///
/// Every locked cell remembers the color of the piece that filled it. The
/// numeric code (1..=7) is used by the compact snapshot grid, where 0 means
/// an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorId {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl ColorId {
    /// Stable one-based code used in snapshots
    pub fn code(&self) -> u8 {
        match self {
            ColorId::Cyan => 1,
            ColorId::Yellow => 2,
            ColorId::Purple => 3,
            ColorId::Green => 4,
            ColorId::Red => 5,
            ColorId::Blue => 6,
            ColorId::Orange => 7,
        }
    }

    /// Inverse of [`ColorId::code`]. Returns `None` for 0 and unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ColorId::Cyan),
            2 => Some(ColorId::Yellow),
            3 => Some(ColorId::Purple),
            4 => Some(ColorId::Green),
            5 => Some(ColorId::Red),
            6 => Some(ColorId::Blue),
            7 => Some(ColorId::Orange),
            _ => None,
        }
    }

    /// 24-bit color as `(r, g, b)`
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorId::Cyan => (0x00, 0xf5, 0xff),
            ColorId::Yellow => (0xff, 0xea, 0x00),
            ColorId::Purple => (0xbf, 0x00, 0xff),
            ColorId::Green => (0x00, 0xff, 0x6a),
            ColorId::Red => (0xff, 0x3d, 0x00),
            ColorId::Blue => (0x00, 0x66, 0xff),
            ColorId::Orange => (0xff, 0x91, 0x00),
        }
    }
}

/// A cell on the play field
///
/// - `None`: Empty cell
/// - `Some(ColorId)`: Filled cell with the color of the piece that locked there
pub type Cell = Option<ColorId>;

/// Player commands accepted by the game engine
///
/// The input layer maps raw keys onto these; nothing below the input crate
/// knows about keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (with horizontal wall kicks)
    Rotate,
    /// Drop piece one cell down, or lock it if it cannot fall further
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
    /// Toggle pause state
    TogglePause,
    /// Discard any game in progress and start a new one
    Start,
    /// Continue the saved game, if there is one
    Resume,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_table_is_descending() {
        assert_eq!(DROP_INTERVALS[0], 800);
        assert_eq!(DROP_INTERVALS[DROP_INTERVALS.len() - 1], 20);
        assert!(DROP_INTERVALS.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn color_codes_roundtrip_and_reject_unknown() {
        for kind in PieceKind::ALL {
            let color = kind.color();
            assert_eq!(ColorId::from_code(color.code()), Some(color));
        }
        assert_eq!(ColorId::from_code(0), None);
        assert_eq!(ColorId::from_code(8), None);
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
