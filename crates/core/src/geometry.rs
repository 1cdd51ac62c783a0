//! Geometry module - rotation and collision tests
//!
//! Pure functions over shapes and pieces. Every query is total: any piece,
//! offset, or field is a valid input.

use crate::field::Field;
use crate::pieces::{Piece, Shape, MAX_SHAPE_DIM};
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

/// Horizontal offsets tried when rotating, in order (0 = no kick)
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// Check whether `piece`, shifted by `(dx, dy)`, fits on `field`
///
/// A position is invalid when any occupied sub-cell lands outside the
/// columns `0..W`, at or below row `H`, or on a filled field cell. Rows above
/// the field (negative y) are allowed, so freshly spawned pieces may poke out
/// of the top.
pub fn is_valid_position(field: &Field, piece: &Piece, dx: i8, dy: i8) -> bool {
    piece.cells().all(|(x, y)| {
        let x = x + dx as i16;
        let y = y + dy as i16;
        if x < 0 || x >= FIELD_WIDTH as i16 || y >= FIELD_HEIGHT as i16 {
            return false;
        }
        y < 0 || !field.is_filled(x as i8, y as i8)
    })
}

/// Rotate a shape 90° clockwise
///
/// An R×C matrix becomes C×R with `out[c][R-1-r] = in[r][c]`.
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    let rows = shape.rows() as usize;
    let cols = shape.cols() as usize;
    let mut bits = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    for r in 0..rows {
        for c in 0..cols {
            if shape.is_filled(r, c) {
                bits[c][rows - 1 - r] = 1;
            }
        }
    }
    Shape::from_bits(cols as u8, rows as u8, bits)
}

/// Rotate `piece` clockwise, trying each of [`KICK_OFFSETS`]
///
/// Returns the rotated piece at the first offset that fits, or `None` when
/// every offset collides.
pub fn try_rotate(field: &Field, piece: &Piece) -> Option<Piece> {
    let rotated = piece.with_shape(rotate_clockwise(&piece.shape));
    KICK_OFFSETS
        .iter()
        .find(|&&dx| is_valid_position(field, &rotated, dx, 0))
        .map(|&dx| rotated.shifted(dx, 0))
}

/// Largest `d >= 0` such that the piece fits at every offset `0..=d` below it
pub fn drop_distance(field: &Field, piece: &Piece) -> i8 {
    let mut distance: i8 = 0;
    while distance < FIELD_HEIGHT as i8 + MAX_SHAPE_DIM as i8
        && is_valid_position(field, piece, 0, distance + 1)
    {
        distance += 1;
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::canonical_shape;
    use crate::types::{ColorId, PieceKind};

    #[test]
    fn rotation_transposes_dimensions() {
        let bar = Shape::from_rows(&[&[1, 1, 1]]).unwrap();
        let rotated = rotate_clockwise(&bar);
        assert_eq!((rotated.rows(), rotated.cols()), (3, 1));
        assert_eq!(rotate_clockwise(&rotated), Shape::from_rows(&[&[1, 1, 1]]).unwrap());
    }

    #[test]
    fn rotating_t_points_it_right() {
        let rotated = rotate_clockwise(&canonical_shape(PieceKind::T));
        let expected = Shape::from_rows(&[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]]).unwrap();
        assert_eq!(rotated, expected);
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let shape = canonical_shape(kind);
            let mut s = shape;
            for _ in 0..4 {
                s = rotate_clockwise(&s);
            }
            assert_eq!(s, shape, "{:?}", kind);
        }
    }

    #[test]
    fn rows_above_the_field_are_allowed() {
        let field = Field::new();
        let piece = Piece::spawn(PieceKind::T).shifted(0, -1);
        assert!(is_valid_position(&field, &piece, 0, 0));
        assert!(is_valid_position(&field, &piece, 0, -5));
    }

    #[test]
    fn walls_and_floor_are_solid() {
        let field = Field::new();
        let piece = Piece::spawn(PieceKind::O);
        assert!(!is_valid_position(&field, &piece, -5, 0));
        assert!(!is_valid_position(&field, &piece, 5, 0));
        assert!(is_valid_position(&field, &piece, 0, 18));
        assert!(!is_valid_position(&field, &piece, 0, 19));
    }

    #[test]
    fn filled_cells_block() {
        let mut field = Field::new();
        field.set(4, 5, Some(ColorId::Red));
        let piece = Piece::spawn(PieceKind::O);
        assert!(is_valid_position(&field, &piece, 0, 3));
        assert!(!is_valid_position(&field, &piece, 0, 4));
    }

    #[test]
    fn extreme_offsets_do_not_overflow() {
        let field = Field::new();
        let piece = Piece::spawn(PieceKind::I);
        assert!(!is_valid_position(&field, &piece, i8::MAX, i8::MAX));
        assert!(!is_valid_position(&field, &piece, i8::MIN, 0));
    }

    #[test]
    fn rotation_kicks_off_the_left_wall() {
        let field = Field::new();
        // Vertical I hugging the left wall; rotating back to horizontal needs a kick.
        let vertical = Piece::spawn(PieceKind::I).with_shape(rotate_clockwise(&canonical_shape(PieceKind::I)));
        let piece = Piece { x: -2, ..vertical };
        assert!(is_valid_position(&field, &piece, 0, 0));
        let rotated = try_rotate(&field, &piece).unwrap();
        assert!(is_valid_position(&field, &rotated, 0, 0));
        assert_eq!(rotated.x, 0);
    }

    #[test]
    fn rotation_fails_when_boxed_in() {
        let mut field = Field::new();
        for y in 0..20 {
            for x in 0..10 {
                if !(3..=6).contains(&x) || y != 1 {
                    field.set(x, y, Some(ColorId::Blue));
                }
            }
        }
        let piece = Piece::spawn(PieceKind::I);
        assert!(is_valid_position(&field, &piece, 0, 0));
        assert!(try_rotate(&field, &piece).is_none());
    }

    #[test]
    fn drop_distance_reaches_floor() {
        let field = Field::new();
        assert_eq!(drop_distance(&field, &Piece::spawn(PieceKind::I)), 18);
        assert_eq!(drop_distance(&field, &Piece::spawn(PieceKind::O)), 18);
    }
}
