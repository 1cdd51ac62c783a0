//! Pieces module - tetromino shape matrices and piece values
//!
//! Shapes are small 0/1 matrices (at most 4x4) stored inline so a [`Piece`]
//! stays `Copy`. Row 0 is the top row of the matrix, matching field
//! coordinates where y grows downward.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{ColorId, PieceKind, FIELD_WIDTH};

/// Largest shape dimension (the I piece is 4x4)
pub const MAX_SHAPE_DIM: usize = 4;

/// Occupancy matrix of a piece
///
/// Only the top-left `rows x cols` block is meaningful; every other entry is
/// kept `false` so that equal shapes compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a 0/1 matrix. Entries outside `rows x cols` are ignored.
    pub const fn from_bits(rows: u8, cols: u8, bits: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM]) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < MAX_SHAPE_DIM {
            let mut c = 0;
            while c < MAX_SHAPE_DIM {
                cells[r][c] = r < rows as usize && c < cols as usize && bits[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { rows, cols, cells }
    }

    /// Build a shape from row slices, e.g. `&[&[0, 1], &[1, 1]]`.
    ///
    /// Returns `None` for empty, ragged, or oversized matrices.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || width == 0 || height > MAX_SHAPE_DIM || width > MAX_SHAPE_DIM {
            return None;
        }
        let mut bits = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            bits[r][..width].copy_from_slice(row);
        }
        Some(Self::from_bits(height as u8, width as u8, bits))
    }

    /// Number of matrix rows
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of matrix columns
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the sub-cell at `(row, col)` is occupied. Out-of-range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied sub-cells as `(x, y)` offsets from the top-left anchor
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Dimensions are within `1..=MAX_SHAPE_DIM` and padding is clear.
    ///
    /// Always true for shapes built through this module; used to vet
    /// deserialized shapes.
    pub fn is_well_formed(&self) -> bool {
        let (rows, cols) = (self.rows as usize, self.cols as usize);
        if rows == 0 || cols == 0 || rows > MAX_SHAPE_DIM || cols > MAX_SHAPE_DIM {
            return false;
        }
        (0..MAX_SHAPE_DIM).all(|r| (0..MAX_SHAPE_DIM).all(|c| (r < rows && c < cols) || !self.cells[r][c]))
    }
}

const I_SHAPE: Shape = Shape::from_bits(4, 4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
const O_SHAPE: Shape = Shape::from_bits(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const T_SHAPE: Shape = Shape::from_bits(3, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const S_SHAPE: Shape = Shape::from_bits(3, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const Z_SHAPE: Shape = Shape::from_bits(3, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);
const J_SHAPE: Shape = Shape::from_bits(3, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const L_SHAPE: Shape = Shape::from_bits(3, 3, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);

/// Canonical (spawn) orientation of a piece kind
pub fn canonical_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Spawn column for a shape: horizontally centered on the field
pub fn spawn_x(shape: &Shape) -> i8 {
    (FIELD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8
}

/// A piece on (or above) the field
///
/// Pieces are plain values: moving or rotating one produces a new `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Column of the shape's top-left corner
    pub x: i8,
    /// Row of the shape's top-left corner (may be negative above the field)
    pub y: i8,
    pub color: ColorId,
}

impl Piece {
    /// Canonical piece of `kind` at its spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = canonical_shape(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
            color: kind.color(),
        }
    }

    /// Copy of this piece translated by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Copy of this piece with a different shape, same anchor
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }

    /// Absolute field coordinates of every occupied sub-cell
    ///
    /// Widened to `i16` so callers can add offsets without overflow.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(sx, sy)| (self.x as i16 + sx as i16, self.y as i16 + sy as i16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_canonical_shape_has_four_blocks() {
        for kind in PieceKind::ALL {
            assert_eq!(canonical_shape(kind).filled_cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn spawn_positions_are_centered() {
        assert_eq!(Piece::spawn(PieceKind::I).x, 3);
        assert_eq!(Piece::spawn(PieceKind::O).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T).x, 4);
        assert!(PieceKind::ALL.iter().all(|&k| Piece::spawn(k).y == 0));
    }

    #[test]
    fn from_rows_rejects_ragged_and_oversized() {
        assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
        assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
        assert!(Shape::from_rows(&[]).is_none());
        assert_eq!(Shape::from_rows(&[&[1, 1], &[1, 1]]), Some(O_SHAPE));
    }

    #[test]
    fn i_piece_cells_sit_on_second_row() {
        let piece = Piece::spawn(PieceKind::I);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 1), (4, 1), (5, 1), (6, 1)]);
    }

    #[test]
    fn piece_color_follows_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(Piece::spawn(kind).color, kind.color());
        }
    }
}
