use crate::PuzzleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel value held by the blank cell
pub const BLANK: u16 = 0;

/// Smallest supported grid size
pub const MIN_SIZE: usize = 2;

/// Largest supported grid size (tile labels are `u16`)
pub const MAX_SIZE: usize = 255;

/// A row/column coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` shares an edge with this cell: Manhattan distance
    /// exactly 1, along exactly one axis. A cell is not adjacent to itself,
    /// and diagonals do not count.
    pub fn is_adjacent(&self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N×N sliding-tile board.
///
/// Cells are stored row-major; tile labels are `1..=N²-1`, each exactly
/// once, plus a single [`BLANK`]. The blank's coordinates are cached for
/// O(1) lookup and always agree with the cell actually holding the
/// sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<u16>,
    blank: Position,
}

impl Board {
    /// The solved layout for an N×N grid: `1..N²-1` in row-major order,
    /// blank in the bottom-right cell.
    pub fn solved(size: usize) -> Result<Self, PuzzleError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(PuzzleError::InvalidConfiguration { size });
        }
        let mut cells: Vec<u16> = (1..(size * size) as u16).collect();
        cells.push(BLANK);
        Ok(Self {
            size,
            cells,
            blank: Position::new(size - 1, size - 1),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Coordinates of the blank cell
    pub fn blank(&self) -> Position {
        self.blank
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Tile value at `pos` ([`BLANK`] for the gap), or `None` out of bounds
    pub fn value(&self, pos: Position) -> Option<u16> {
        self.contains(pos).then(|| self.cells[self.index(pos)])
    }

    /// Where `value` belongs in the solved layout
    pub fn home_of(&self, value: u16) -> Position {
        if value == BLANK {
            return Position::new(self.size - 1, self.size - 1);
        }
        let i = value as usize - 1;
        Position::new(i / self.size, i % self.size)
    }

    /// True if the cell at `pos` holds a tile sitting in its solved-layout
    /// position (the blank never counts as home)
    pub fn is_home(&self, pos: Position) -> bool {
        match self.value(pos) {
            Some(v) if v != BLANK => self.home_of(v) == pos,
            _ => false,
        }
    }

    /// True iff every row-major cell `i < N²-1` holds `i + 1` and the final
    /// cell holds the blank. All tiles in order with the blank anywhere but
    /// the last cell is not solved.
    pub fn is_solved(&self) -> bool {
        let last = self.size * self.size - 1;
        self.cells[last] == BLANK
            && self.cells[..last]
                .iter()
                .enumerate()
                .all(|(i, &v)| v as usize == i + 1)
    }

    /// Swap the tile at `pos` with the blank and re-cache the blank's
    /// coordinates. Callers must have validated `pos`.
    pub(crate) fn swap_with_blank(&mut self, pos: Position) {
        let blank_idx = self.index(self.blank);
        let pos_idx = self.index(pos);
        self.cells.swap(blank_idx, pos_idx);
        self.blank = pos;
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = ((self.size * self.size) - 1).to_string().len();
        for row in 0..self.size {
            for col in 0..self.size {
                let v = self.cells[row * self.size + col];
                if v == BLANK {
                    write!(f, "{:>width$} ", "·")?;
                } else {
                    write!(f, "{:>width$} ", v)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
