//! Field module - the play-field grid
//!
//! The field is a 10x20 grid where each cell is empty or filled with a color.
//! Rows are stored inline (no heap allocation), so a `Field` is cheap to copy
//! and every game transition can produce a fresh one.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, ColorId, FIELD_HEIGHT, FIELD_WIDTH};

/// Number of columns, as a `usize` for indexing
pub const COLS: usize = FIELD_WIDTH as usize;

/// Number of rows, as a `usize` for indexing
pub const ROWS: usize = FIELD_HEIGHT as usize;

/// A row that was removed by a line clear, captured before removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearedLineRecord {
    /// Index of the row in the field before compaction
    pub row: u8,
    /// Color of each cell in the row, left to right
    pub colors: [ColorId; COLS],
}

/// Rows removed by one clear, top to bottom
pub type ClearedLines = ArrayVec<ClearedLineRecord, ROWS>;

/// Result of [`Field::clear_full_lines`]
#[derive(Debug, Clone, PartialEq)]
pub struct LineClear {
    pub field: Field,
    pub records: ClearedLines,
}

impl LineClear {
    /// Number of rows removed
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

/// The play field - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    rows: [[Cell; COLS]; ROWS],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            rows: [[None; COLS]; ROWS],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize, x as usize))
    }

    /// Get width of the field
    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    /// Get height of the field
    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|(row, col)| self.rows[row][col])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some((row, col)) => {
                self.rows[row][col] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.rows
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows.get(y).is_some_and(|row| row.iter().all(Option::is_some))
    }

    /// Number of filled cells on the whole field
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// New field with every occupied sub-cell of `piece` filled with its color
    ///
    /// Sub-cells outside the field (above the top, past a wall) are dropped.
    pub fn merge_piece(&self, piece: &Piece) -> Field {
        let mut merged = self.clone();
        for (x, y) in piece.cells() {
            if (0..FIELD_WIDTH as i16).contains(&x) && (0..FIELD_HEIGHT as i16).contains(&y) {
                merged.rows[y as usize][x as usize] = Some(piece.color);
            }
        }
        merged
    }

    /// Remove every full row and compact the rest downward
    ///
    /// Remaining rows keep their relative order and empty rows are added at
    /// the top. The removed rows are reported top to bottom with the colors
    /// they held.
    pub fn clear_full_lines(&self) -> LineClear {
        let mut field = Field::new();
        let mut records = ClearedLines::new();
        let mut write_y = ROWS;

        // Scan from bottom to top so surviving rows can be written in place.
        for read_y in (0..ROWS).rev() {
            let row = &self.rows[read_y];
            match full_row_colors(row) {
                Some(colors) => records.push(ClearedLineRecord {
                    row: read_y as u8,
                    colors,
                }),
                None => {
                    write_y -= 1;
                    field.rows[write_y] = *row;
                }
            }
        }

        records.reverse();
        LineClear { field, records }
    }

    /// Write the field as color codes (0 = empty), see [`ColorId::code`]
    pub fn write_code_grid(&self, out: &mut [[u8; COLS]; ROWS]) {
        for (dst, src) in out.iter_mut().zip(self.rows.iter()) {
            for (d, cell) in dst.iter_mut().zip(src.iter()) {
                *d = cell.map_or(0, |c| c.code());
            }
        }
    }

    /// Rebuild a field from color codes. Fails on any unknown non-zero code.
    pub fn from_code_grid(grid: &[[u8; COLS]; ROWS]) -> Option<Field> {
        let mut field = Field::new();
        for (dst, src) in field.rows.iter_mut().zip(grid.iter()) {
            for (d, &code) in dst.iter_mut().zip(src.iter()) {
                *d = match code {
                    0 => None,
                    code => Some(ColorId::from_code(code)?),
                };
            }
        }
        Some(field)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

fn full_row_colors(row: &[Cell; COLS]) -> Option<[ColorId; COLS]> {
    let mut colors = [ColorId::Cyan; COLS];
    for (dst, cell) in colors.iter_mut().zip(row.iter()) {
        *dst = (*cell)?;
    }
    Some(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn fill_row(field: &mut Field, y: i8, color: ColorId) {
        for x in 0..COLS as i8 {
            field.set(x, y, Some(color));
        }
    }

    #[test]
    fn index_bounds() {
        assert_eq!(Field::index(0, 0), Some((0, 0)));
        assert_eq!(Field::index(9, 19), Some((19, 9)));
        assert_eq!(Field::index(-1, 0), None);
        assert_eq!(Field::index(10, 0), None);
        assert_eq!(Field::index(0, 20), None);
    }

    #[test]
    fn clearing_empty_field_is_a_no_op() {
        let field = Field::new();
        let clear = field.clear_full_lines();
        assert_eq!(clear.count(), 0);
        assert_eq!(clear.field, field);
    }

    #[test]
    fn clear_removes_rows_and_shifts_down() {
        let mut field = Field::new();
        field.set(2, 17, Some(ColorId::Green));
        fill_row(&mut field, 18, ColorId::Red);
        field.set(0, 19, Some(ColorId::Blue));

        let clear = field.clear_full_lines();
        assert_eq!(clear.count(), 1);
        assert_eq!(clear.records[0].row, 18);
        assert_eq!(clear.records[0].colors, [ColorId::Red; COLS]);
        // Row 17 moved to 18, row 19 stayed.
        assert_eq!(clear.field.get(2, 18), Some(Some(ColorId::Green)));
        assert_eq!(clear.field.get(0, 19), Some(Some(ColorId::Blue)));
        assert_eq!(clear.field.filled_count(), 2);
        assert!(clear.field.rows()[0].iter().all(Option::is_none));
    }

    #[test]
    fn non_adjacent_rows_are_reported_top_to_bottom() {
        let mut field = Field::new();
        fill_row(&mut field, 15, ColorId::Cyan);
        field.set(3, 16, Some(ColorId::Orange));
        fill_row(&mut field, 17, ColorId::Yellow);
        fill_row(&mut field, 19, ColorId::Purple);

        let clear = field.clear_full_lines();
        let rows: Vec<u8> = clear.records.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![15, 17, 19]);
        // Survivors keep their order: empty row 18 lands on 19, row 16 on 18.
        assert_eq!(clear.field.get(3, 18), Some(Some(ColorId::Orange)));
        assert_eq!(clear.field.get(3, 19), Some(None));
        assert_eq!(clear.field.filled_count(), 1);
    }

    #[test]
    fn records_keep_per_cell_colors() {
        let mut field = Field::new();
        let palette = [ColorId::Red, ColorId::Blue];
        for x in 0..COLS as i8 {
            field.set(x, 19, Some(palette[x as usize % 2]));
        }
        let clear = field.clear_full_lines();
        assert_eq!(clear.records[0].colors[0], ColorId::Red);
        assert_eq!(clear.records[0].colors[1], ColorId::Blue);
    }

    #[test]
    fn whole_field_can_clear() {
        let mut field = Field::new();
        for y in 0..ROWS as i8 {
            fill_row(&mut field, y, ColorId::Green);
        }
        let clear = field.clear_full_lines();
        assert_eq!(clear.count(), ROWS);
        assert_eq!(clear.field, Field::new());
    }

    #[test]
    fn merge_clips_cells_above_the_field() {
        let field = Field::new();
        let piece = Piece::spawn(PieceKind::T).shifted(0, -1);
        let merged = field.merge_piece(&piece);
        // Top row of T (one block) is above the field, the bar lands on row 0.
        assert_eq!(merged.filled_count(), 3);
        assert_eq!(merged.get(4, 0), Some(Some(ColorId::Purple)));
        // Input untouched.
        assert_eq!(field.filled_count(), 0);
    }

    #[test]
    fn code_grid_roundtrip_and_rejects_bad_codes() {
        let mut field = Field::new();
        field.set(1, 2, Some(ColorId::Orange));
        let mut grid = [[0u8; COLS]; ROWS];
        field.write_code_grid(&mut grid);
        assert_eq!(grid[2][1], 7);
        assert_eq!(Field::from_code_grid(&grid), Some(field));

        grid[0][0] = 42;
        assert_eq!(Field::from_code_grid(&grid), None);
    }
}
