use crate::board::{Board, Position};
use crate::PuzzleError;
use serde::{Deserialize, Serialize};

/// Default grid size (the classic 15-puzzle)
pub const DEFAULT_SIZE: usize = 4;

/// Default number of random-walk steps for [`Engine::shuffle`]
pub const DEFAULT_SHUFFLE_STEPS: usize = 500;

/// Outcome of an in-bounds move request.
///
/// `accepted == false` means the target was not orthogonally adjacent to the
/// blank (which includes aiming at the blank itself); the request was a
/// no-op and `moves` is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Whether the tile was slid into the blank
    pub accepted: bool,
    /// Accepted player moves since the last reset or shuffle
    pub moves: u32,
    /// Whether the board is now in the solved configuration
    pub solved: bool,
    /// Snapshot of the board after the request
    pub board: Board,
}

/// The puzzle engine.
///
/// Owns the board and the move counter; external callers observe through
/// read-only queries and submit moves through [`Engine::request_move`].
/// Shuffling replays random legal moves, so every board the engine hands out
/// is reachable from the solved state and therefore solvable.
///
/// The engine keeps accepting legal moves after the solved configuration is
/// reached; the `solved` flag on the move that produced it is the win
/// signal, and what to do with further input is the caller's call.
pub struct Engine {
    board: Board,
    moves: u32,
    rng: SimpleRng,
}

impl Engine {
    /// A solved N×N board, blank bottom-right, counter at 0
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        Ok(Self {
            board: Board::solved(size)?,
            moves: 0,
            rng: SimpleRng::new(),
        })
    }

    /// Like [`Engine::new`] but with a fixed RNG seed, for deterministic
    /// shuffles
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, PuzzleError> {
        Ok(Self {
            board: Board::solved(size)?,
            moves: 0,
            rng: SimpleRng::with_seed(seed),
        })
    }

    /// Re-initialize to the solved configuration for an N×N grid and zero
    /// the move counter
    pub fn reset(&mut self, size: usize) -> Result<(), PuzzleError> {
        self.board = Board::solved(size)?;
        self.moves = 0;
        Ok(())
    }

    /// Read-only view of the current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates of the blank cell
    pub fn blank(&self) -> Position {
        self.board.blank()
    }

    /// Accepted player moves since the last reset or shuffle
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Randomize the board with `steps` legal blank-neighbor swaps.
    ///
    /// Every step is itself a legal move, so the result is reachable from
    /// the solved state by construction. With `steps == 0` the board is left
    /// as-is; a freshly reset board stays solved, which is a valid state.
    /// The move counter is zeroed afterwards: shuffle steps are not player
    /// moves.
    pub fn shuffle(&mut self, steps: usize) {
        self.random_walk(steps);
        self.moves = 0;
    }

    /// Attempt to slide the tile at `(row, col)` into the blank.
    ///
    /// Out-of-bounds coordinates are a caller error and fail hard. An
    /// in-bounds target that is not orthogonally adjacent to the blank is
    /// rejected with no state change of any kind, so rapid clicks on
    /// arbitrary cells are safe to forward unfiltered.
    pub fn request_move(&mut self, row: usize, col: usize) -> Result<MoveResult, PuzzleError> {
        let target = Position::new(row, col);
        if !self.board.contains(target) {
            return Err(PuzzleError::OutOfBounds {
                row,
                col,
                size: self.board.size(),
            });
        }

        let accepted = target.is_adjacent(self.board.blank());
        if accepted {
            self.board.swap_with_blank(target);
            self.moves += 1;
        }

        Ok(MoveResult {
            accepted,
            moves: self.moves,
            solved: self.board.is_solved(),
            board: self.board.clone(),
        })
    }

    /// The walk behind [`Engine::shuffle`]. Returns the blank's position
    /// before each applied step; replaying the list in reverse as move
    /// targets undoes the walk.
    fn random_walk(&mut self, steps: usize) -> Vec<Position> {
        let mut path = Vec::with_capacity(steps);
        for _ in 0..steps {
            let neighbors = self.blank_neighbors();
            let pick = neighbors[self.rng.next_usize(neighbors.len())];
            path.push(self.board.blank());
            self.board.swap_with_blank(pick);
        }
        path
    }

    /// Cells orthogonally adjacent to the blank (2 in a corner, 3 on an
    /// edge, 4 in the interior)
    fn blank_neighbors(&self) -> Vec<Position> {
        let Position { row, col } = self.board.blank();
        let size = self.board.size();
        let mut out = Vec::with_capacity(4);
        if row > 0 {
            out.push(Position::new(row - 1, col));
        }
        if row + 1 < size {
            out.push(Position::new(row + 1, col));
        }
        if col > 0 {
            out.push(Position::new(row, col - 1));
        }
        if col + 1 < size {
            out.push(Position::new(row, col + 1));
        }
        out
    }
}

/// Simple PCG-style PRNG, seeded from the OS so the core stays free of the
/// `rand` stack and works under wasm
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: a static counter still yields distinct streams
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BLANK;

    /// Every reachable board holds each label `1..=N²-1` exactly once, one
    /// blank, and a blank cache that matches the cell actually holding it.
    fn assert_tile_set_intact(board: &Board) {
        let size = board.size();
        let mut seen = vec![0usize; size * size];
        for row in 0..size {
            for col in 0..size {
                let v = board.value(Position::new(row, col)).unwrap();
                seen[v as usize] += 1;
                if v == BLANK {
                    assert_eq!(board.blank(), Position::new(row, col));
                }
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_new_engine_is_solved() {
        let engine = Engine::new(DEFAULT_SIZE).unwrap();
        assert!(engine.is_solved());
        assert_eq!(engine.moves(), 0);
        assert_eq!(engine.blank(), Position::new(3, 3));
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        assert!(matches!(
            Engine::new(1),
            Err(PuzzleError::InvalidConfiguration { size: 1 })
        ));
        let mut engine = Engine::new(4).unwrap();
        assert!(engine.reset(0).is_err());
        // Failed reset leaves the engine untouched
        assert_eq!(engine.board().size(), 4);
    }

    #[test]
    fn test_accept_then_reject_same_target() {
        // Concrete scenario: solved 4x4, move 12 at (2,3) into the blank at
        // (3,3), then aim at (2,3) again, which now holds the blank.
        let mut engine = Engine::new(4).unwrap();

        let result = engine.request_move(2, 3).unwrap();
        assert!(result.accepted);
        assert_eq!(result.moves, 1);
        assert!(!result.solved);
        assert_eq!(engine.blank(), Position::new(2, 3));
        assert_eq!(engine.board().value(Position::new(3, 3)), Some(12));

        let repeat = engine.request_move(2, 3).unwrap();
        assert!(!repeat.accepted);
        assert_eq!(repeat.moves, 1);
        assert_eq!(engine.blank(), Position::new(2, 3));
        assert_tile_set_intact(engine.board());
    }

    #[test]
    fn test_out_of_bounds_is_hard_error() {
        let mut engine = Engine::new(4).unwrap();
        assert!(matches!(
            engine.request_move(4, 0),
            Err(PuzzleError::OutOfBounds { row: 4, col: 0, size: 4 })
        ));
        assert!(engine.request_move(0, 17).is_err());
        assert_eq!(engine.moves(), 0);
    }

    #[test]
    fn test_rejection_is_byte_for_byte_noop() {
        let mut engine = Engine::with_seed(4, 7).unwrap();
        engine.shuffle(100);
        let before = engine.board().clone();

        for row in 0..4 {
            for col in 0..4 {
                let target = Position::new(row, col);
                if target.is_adjacent(before.blank()) {
                    continue;
                }
                let result = engine.request_move(row, col).unwrap();
                assert!(!result.accepted);
                assert_eq!(result.moves, 0);
                assert_eq!(engine.board(), &before);
            }
        }
    }

    #[test]
    fn test_move_counter_monotonic() {
        let mut engine = Engine::with_seed(4, 99).unwrap();
        engine.shuffle(250);
        assert_eq!(engine.moves(), 0);

        let mut expected = 0u32;
        // Sweep every cell a few times; only accepted moves may bump the
        // counter, by exactly one each.
        for _ in 0..3 {
            for row in 0..4 {
                for col in 0..4 {
                    let before = engine.moves();
                    let result = engine.request_move(row, col).unwrap();
                    if result.accepted {
                        expected += 1;
                        assert_eq!(result.moves, before + 1);
                    } else {
                        assert_eq!(result.moves, before);
                    }
                    assert_eq!(engine.moves(), expected);
                }
            }
        }
        assert_tile_set_intact(engine.board());

        engine.reset(4).unwrap();
        assert_eq!(engine.moves(), 0);
    }

    #[test]
    fn test_shuffle_zero_steps_stays_solved() {
        let mut engine = Engine::new(4).unwrap();
        engine.shuffle(0);
        assert!(engine.is_solved());
        assert_eq!(engine.moves(), 0);
    }

    #[test]
    fn test_shuffle_preserves_tile_set() {
        for seed in [0, 1, 42, 12345] {
            let mut engine = Engine::with_seed(5, seed).unwrap();
            engine.shuffle(DEFAULT_SHUFFLE_STEPS);
            assert_tile_set_intact(engine.board());
            assert_eq!(engine.moves(), 0);
        }
    }

    #[test]
    fn test_shuffle_resets_player_move_counter() {
        let mut engine = Engine::new(4).unwrap();
        assert!(engine.request_move(2, 3).unwrap().accepted);
        assert_eq!(engine.moves(), 1);
        engine.shuffle(50);
        assert_eq!(engine.moves(), 0);
    }

    #[test]
    fn test_shuffle_walk_inverse_returns_to_solved() {
        // Solvability by construction: replay the recorded walk backwards
        // and the board must come back to the solved layout.
        let mut engine = Engine::with_seed(4, 2024).unwrap();
        let path = engine.random_walk(500);
        assert_eq!(path.len(), 500);

        for &target in path.iter().rev() {
            let result = engine.request_move(target.row, target.col).unwrap();
            assert!(result.accepted);
        }
        assert!(engine.is_solved());
    }

    #[test]
    fn test_solving_by_moves_sets_flag() {
        let mut engine = Engine::new(3).unwrap();
        // Slide 8 right, then back: the second move restores the solved
        // layout and must report it.
        let out = engine.request_move(2, 1).unwrap();
        assert!(out.accepted && !out.solved);
        let back = engine.request_move(2, 2).unwrap();
        assert!(back.accepted);
        assert!(back.solved);
        assert_eq!(back.moves, 2);
        // Solved is not terminal for the engine: further legal moves are
        // still accepted.
        assert!(engine.request_move(2, 1).unwrap().accepted);
    }

    #[test]
    fn test_independent_instances() {
        let mut a = Engine::with_seed(4, 1).unwrap();
        let b = Engine::new(4).unwrap();
        a.shuffle(100);
        assert!(b.is_solved());
    }

    #[test]
    fn test_minimum_size_board() {
        let mut engine = Engine::with_seed(2, 5).unwrap();
        engine.shuffle(DEFAULT_SHUFFLE_STEPS);
        assert_tile_set_intact(engine.board());
        // 2x2 blank always sits in a corner: exactly two legal targets
        let legal = (0..2)
            .flat_map(|r| (0..2).map(move |c| Position::new(r, c)))
            .filter(|p| p.is_adjacent(engine.board().blank()))
            .count();
        assert_eq!(legal, 2);
    }

    #[test]
    fn test_move_result_snapshot_matches_engine() {
        let mut engine = Engine::with_seed(4, 8).unwrap();
        engine.shuffle(30);
        let blank = engine.blank();
        let target = if blank.row > 0 {
            Position::new(blank.row - 1, blank.col)
        } else {
            Position::new(blank.row + 1, blank.col)
        };
        let result = engine.request_move(target.row, target.col).unwrap();
        assert!(result.accepted);
        assert_eq!(&result.board, engine.board());
        assert_eq!(result.board.blank(), target);
    }
}
