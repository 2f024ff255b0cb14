//! Sliding-tile puzzle engine.
//!
//! The classic 15-puzzle, generalized to any square grid from 2x2 up to
//! 255x255. The engine owns the board, validates move requests against the
//! blank's position, and shuffles by replaying random legal moves so every
//! generated board is solvable by construction, with no permutation-parity
//! analysis needed.
//!
//! ```
//! use slide_core::Engine;
//!
//! let mut engine = Engine::new(4).unwrap();
//! engine.shuffle(500);
//! assert_eq!(engine.moves(), 0);
//!
//! let blank = engine.blank();
//! let result = engine.request_move(blank.row, blank.col.wrapping_sub(1));
//! if let Ok(result) = result {
//!     // Accepted iff the target was orthogonally adjacent to the blank.
//!     assert_eq!(result.accepted, result.moves == 1);
//! }
//! ```

mod board;
mod engine;

pub use board::{Board, Position, BLANK, MAX_SIZE, MIN_SIZE};
pub use engine::{Engine, MoveResult, DEFAULT_SHUFFLE_STEPS, DEFAULT_SIZE};

use std::fmt;

/// Errors from engine configuration and move requests.
///
/// A move aimed at a cell that is simply not adjacent to the blank is not an
/// error: it comes back as [`MoveResult`] with `accepted == false`, so the
/// input hot path never has to unwind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    /// Requested grid size outside the supported `MIN_SIZE..=MAX_SIZE` range
    InvalidConfiguration { size: usize },
    /// Move target outside the grid
    OutOfBounds {
        row: usize,
        col: usize,
        size: usize,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::InvalidConfiguration { size } => {
                write!(
                    f,
                    "invalid grid size {} (supported: {}..={})",
                    size, MIN_SIZE, MAX_SIZE
                )
            }
            PuzzleError::OutOfBounds { row, col, size } => {
                write!(
                    f,
                    "move target ({}, {}) outside the {}x{} grid",
                    row, col, size, size
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {}
