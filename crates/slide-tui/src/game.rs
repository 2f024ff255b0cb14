use slide_core::{Engine, MoveResult, Position, PuzzleError};
use std::time::{Duration, Instant};

/// A slide direction as the player sees it: the arrow says which way a tile
/// moves, so the target tile sits on the opposite side of the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One play session: the engine plus the presentation-side bookkeeping the
/// engine deliberately does not own (elapsed time, completion latch).
pub struct Game {
    engine: Engine,
    size: usize,
    shuffle_steps: usize,
    /// Timer starts on the first accepted move, not on shuffle
    start_time: Option<Instant>,
    /// Frozen at the winning move
    final_time: Option<Duration>,
    completed: bool,
}

impl Game {
    /// Shuffled game on an N×N board
    pub fn new(size: usize, shuffle_steps: usize) -> Result<Self, PuzzleError> {
        let mut engine = Engine::new(size)?;
        engine.shuffle(shuffle_steps);
        let completed = engine.is_solved();
        Ok(Self {
            engine,
            size,
            shuffle_steps,
            start_time: None,
            final_time: None,
            completed,
        })
    }

    /// Shuffled game with a fixed shuffle seed
    pub fn with_seed(size: usize, shuffle_steps: usize, seed: u64) -> Result<Self, PuzzleError> {
        let mut engine = Engine::with_seed(size, seed)?;
        engine.shuffle(shuffle_steps);
        let completed = engine.is_solved();
        Ok(Self {
            engine,
            size,
            shuffle_steps,
            start_time: None,
            final_time: None,
            completed,
        })
    }

    /// Fresh shuffled board, same size and step count
    pub fn restart(&mut self) {
        self.engine.shuffle(self.shuffle_steps);
        self.start_time = None;
        self.final_time = None;
        // A zero-step reshuffle leaves a solved board, which is already won
        self.completed = self.engine.is_solved();
    }

    pub fn board(&self) -> &slide_core::Board {
        self.engine.board()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn moves(&self) -> u32 {
        self.engine.moves()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Time since the first accepted move; zero before it, frozen after the
    /// winning move
    pub fn elapsed(&self) -> Duration {
        if let Some(frozen) = self.final_time {
            return frozen;
        }
        match self.start_time {
            Some(started) => started.elapsed(),
            None => Duration::ZERO,
        }
    }

    /// Format the elapsed time as MM:SS
    pub fn format_time(&self) -> String {
        let secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Forward an arrow press to the engine. Returns the engine's result, or
    /// `None` when the press has no target tile (gap on that border, or the
    /// game is already won and input is no longer forwarded).
    pub fn slide(&mut self, dir: Direction) -> Option<MoveResult> {
        if self.completed {
            return None;
        }
        let target = self.slide_target(dir)?;

        // Target is a blank neighbor, so in bounds; the engine can still
        // reject it only if our geometry were wrong.
        let result = self.engine.request_move(target.row, target.col).ok()?;
        if result.accepted {
            if self.start_time.is_none() {
                self.start_time = Some(Instant::now());
            }
            if result.solved {
                self.final_time = Some(self.elapsed());
                self.completed = true;
            }
        }
        Some(result)
    }

    /// The tile an arrow press refers to: pressing Up slides the tile below
    /// the gap upward, and so on
    fn slide_target(&self, dir: Direction) -> Option<Position> {
        let blank = self.engine.blank();
        let last = self.size - 1;
        match dir {
            Direction::Up if blank.row < last => Some(Position::new(blank.row + 1, blank.col)),
            Direction::Down if blank.row > 0 => Some(Position::new(blank.row - 1, blank.col)),
            Direction::Left if blank.col < last => Some(Position::new(blank.row, blank.col + 1)),
            Direction::Right if blank.col > 0 => Some(Position::new(blank.row, blank.col - 1)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_step_shuffle_is_won_immediately() {
        let game = Game::new(4, 0).unwrap();
        assert!(game.is_completed());
        assert_eq!(game.moves(), 0);
        assert_eq!(game.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_completed_game_ignores_input() {
        let mut game = Game::new(4, 0).unwrap();
        assert!(game.slide(Direction::Up).is_none());
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_slide_direction_geometry() {
        // Unshuffled board: gap at (3, 3). Nothing below or right of the
        // gap, so Up and Left have no target tile.
        let mut game = Game::with_seed(4, 0, 1).unwrap();
        game.engine.reset(4).unwrap();
        game.completed = false;

        assert!(game.slide(Direction::Up).is_none());
        assert!(game.slide(Direction::Left).is_none());

        // Down slides the tile above the gap (12) downward
        let result = game.slide(Direction::Down).unwrap();
        assert!(result.accepted);
        assert_eq!(game.board().blank(), Position::new(2, 3));
        assert_eq!(
            game.board().value(Position::new(3, 3)),
            Some(12)
        );
    }

    #[test]
    fn test_winning_move_latches_completion() {
        let mut game = Game::with_seed(3, 0, 1).unwrap();
        game.engine.reset(3).unwrap();
        game.completed = false;

        // Slide 8 right (gap moves left), then slide it back to win
        let out = game.slide(Direction::Right).unwrap();
        assert!(out.accepted && !out.solved);
        assert!(!game.is_completed());

        let win = game.slide(Direction::Left).unwrap();
        assert!(win.solved);
        assert!(game.is_completed());
        assert_eq!(game.moves(), 2);

        // Latched: no more input reaches the engine
        assert!(game.slide(Direction::Right).is_none());
        assert_eq!(game.moves(), 2);
    }

    #[test]
    fn test_restart_rewinds_session() {
        let mut game = Game::with_seed(4, 200, 7).unwrap();
        if game.slide(Direction::Up).is_none() {
            let _ = game.slide(Direction::Down);
        }
        game.restart();
        // Counter and timer rewound, completion unlatched
        assert_eq!(game.moves(), 0);
        assert_eq!(game.elapsed(), Duration::ZERO);
        assert!(!game.is_completed());
    }
}
