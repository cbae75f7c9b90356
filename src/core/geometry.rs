//! # Grid Geometry
//!
//! Pure arithmetic between a linear cell index and a `(row, col)` position.
//!
//! Two distinct boundary rules apply:
//!
//! - **Wrap**: a directional step that leaves the row or column range cycles to
//!   the opposite end of that dimension. It does not care whether the slot it
//!   lands on actually holds a cell.
//! - **Clamp**: converting a position back to an index pins the result to
//!   `[0, len - 1]`, which is what resolves a wrap onto the missing slots of a
//!   short last row.
//!
//! ```text
//!  len = 5, cols = 3, rows = 2
//!
//!  ┌───┬───┬───┐
//!  │ 0 │ 1 │ 2 │
//!  ├───┼───┼───┤
//!  │ 3 │ 4 │ · │   · = (1, 2) → raw 5 → clamped to 4
//!  └───┴───┴───┘
//! ```

/// A cell coordinate. Rows and columns are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// One of the four arrow directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub fn to_position(index: usize, cols: usize) -> Position {
    Position {
        row: index / cols,
        col: index % cols,
    }
}

/// Convert a position back to a linear index, clamped into `[0, len - 1]`.
pub fn to_index(position: Position, cols: usize, len: usize) -> usize {
    let raw = position.row * cols + position.col;
    raw.min(len.saturating_sub(1))
}

pub fn step_up(position: Position, rows: usize) -> Position {
    let row = if position.row > 0 {
        position.row - 1
    } else {
        rows - 1
    };
    Position { row, ..position }
}

pub fn step_down(position: Position, rows: usize) -> Position {
    let row = if position.row + 1 < rows {
        position.row + 1
    } else {
        0
    };
    Position { row, ..position }
}

pub fn step_left(position: Position, cols: usize) -> Position {
    let col = if position.col > 0 {
        position.col - 1
    } else {
        cols - 1
    };
    Position { col, ..position }
}

pub fn step_right(position: Position, cols: usize) -> Position {
    let col = if position.col + 1 < cols {
        position.col + 1
    } else {
        0
    };
    Position { col, ..position }
}

/// Smallest `n` with `n * n >= len`; the column count used when none is configured.
pub fn default_cols(len: usize) -> usize {
    let mut n = 1;
    while n * n < len {
        n += 1;
    }
    n
}

/// The fixed dimensions of one prompt's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub rows: usize,
    pub cols: usize,
    pub len: usize,
}

impl GridGeometry {
    /// Build the geometry for `len` cells. `cols` of `None` or `0` falls back
    /// to [`default_cols`].
    pub fn new(len: usize, cols: Option<usize>) -> Self {
        let cols = match cols {
            Some(c) if c > 0 => c,
            _ => default_cols(len),
        };
        let rows = len.div_ceil(cols).max(1);
        Self { rows, cols, len }
    }

    pub fn to_position(&self, index: usize) -> Position {
        to_position(index, self.cols)
    }

    pub fn to_index(&self, position: Position) -> usize {
        to_index(position, self.cols, self.len)
    }

    /// The index one step from `index` in `direction`, after wrap and clamp.
    pub fn step(&self, index: usize, direction: Direction) -> usize {
        let pos = self.to_position(index);
        let next = match direction {
            Direction::Up => step_up(pos, self.rows),
            Direction::Down => step_down(pos, self.rows),
            Direction::Left => step_left(pos, self.cols),
            Direction::Right => step_right(pos, self.cols),
        };
        self.to_index(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_position_row_major() {
        assert_eq!(to_position(0, 3), Position { row: 0, col: 0 });
        assert_eq!(to_position(4, 3), Position { row: 1, col: 1 });
        assert_eq!(to_position(8, 3), Position { row: 2, col: 2 });
    }

    #[test]
    fn test_to_index_clamps_short_last_row() {
        assert_eq!(to_index(Position { row: 1, col: 2 }, 3, 5), 4);
        assert_eq!(to_index(Position { row: 1, col: 1 }, 3, 5), 4);
        assert_eq!(to_index(Position { row: 0, col: 2 }, 3, 5), 2);
    }

    #[test]
    fn test_default_cols_is_ceil_sqrt() {
        assert_eq!(default_cols(1), 1);
        assert_eq!(default_cols(4), 2);
        assert_eq!(default_cols(5), 3);
        assert_eq!(default_cols(9), 3);
        assert_eq!(default_cols(26), 6);
    }

    #[test]
    fn test_geometry_rows_from_cols() {
        let g = GridGeometry::new(6, Some(3));
        assert_eq!((g.rows, g.cols), (2, 3));
        let g = GridGeometry::new(7, Some(3));
        assert_eq!((g.rows, g.cols), (3, 3));
        let g = GridGeometry::new(2, Some(5));
        assert_eq!((g.rows, g.cols), (1, 5));
    }

    #[test]
    fn test_zero_cols_falls_back_to_default() {
        let g = GridGeometry::new(9, Some(0));
        assert_eq!(g.cols, 3);
    }

    #[test]
    fn test_up_from_top_row_wraps_to_bottom() {
        let g = GridGeometry::new(9, Some(3));
        assert_eq!(g.step(1, Direction::Up), 7);
    }

    #[test]
    fn test_down_from_bottom_row_wraps_to_top() {
        let g = GridGeometry::new(9, Some(3));
        assert_eq!(g.step(7, Direction::Down), 1);
    }

    #[test]
    fn test_wrap_onto_missing_slot_is_clamped() {
        // 5 cells, 3 cols: slot (1, 2) does not exist
        let g = GridGeometry::new(5, Some(3));
        assert_eq!(g.step(2, Direction::Up), 4);
        assert_eq!(g.step(2, Direction::Down), 4);
    }

    #[test]
    fn test_left_and_right_wrap_within_row() {
        let g = GridGeometry::new(6, Some(3));
        assert_eq!(g.step(3, Direction::Left), 5);
        assert_eq!(g.step(5, Direction::Right), 3);
        assert_eq!(g.step(0, Direction::Right), 1);
    }

    #[test]
    fn test_single_column_left_right_stay_put() {
        let g = GridGeometry::new(4, Some(1));
        assert_eq!(g.step(2, Direction::Left), 2);
        assert_eq!(g.step(2, Direction::Right), 2);
        assert_eq!(g.step(3, Direction::Down), 0);
    }

    proptest! {
        #[test]
        fn test_index_position_round_trip(len in 1usize..200, cols in 1usize..20, seed in any::<usize>()) {
            let index = seed % len;
            prop_assert_eq!(to_index(to_position(index, cols), cols, len), index);
        }

        #[test]
        fn test_vertical_steps_are_inverse(rows in 1usize..20, row in 0usize..20, col in 0usize..20) {
            let pos = Position { row: row % rows, col };
            prop_assert_eq!(step_down(step_up(pos, rows), rows), pos);
            prop_assert_eq!(step_up(step_down(pos, rows), rows), pos);
        }

        #[test]
        fn test_horizontal_steps_are_inverse(cols in 1usize..20, row in 0usize..20, col in 0usize..20) {
            let pos = Position { row, col: col % cols };
            prop_assert_eq!(step_right(step_left(pos, cols), cols), pos);
            prop_assert_eq!(step_left(step_right(pos, cols), cols), pos);
        }

        #[test]
        fn test_step_always_lands_in_range(len in 1usize..100, cols in 1usize..12, seed in any::<usize>()) {
            let g = GridGeometry::new(len, Some(cols));
            let index = seed % len;
            for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
                prop_assert!(g.step(index, dir) < len);
            }
        }
    }
}
