use crate::animations::WinScreen;
use crate::game::{Direction, Game};
use crate::scores::ScoreBook;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::terminal;
use slide_core::PuzzleError;
use std::time::Duration;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Normal gameplay
    Playing,
    /// Win celebration screen
    Win,
    /// Best-scores screen
    Scores,
}

/// The main application state
pub struct App {
    /// Current game session
    pub game: Game,
    /// Color theme
    pub theme: Theme,
    /// Best-score cache
    pub scores: ScoreBook,
    /// Current screen state
    pub screen_state: ScreenState,
    /// Win screen animation
    pub win_screen: WinScreen,
    /// Message to display
    pub message: Option<String>,
    /// Message timer (ticks)
    message_timer: u32,
    /// Whether the finished game already went into the score book
    game_recorded: bool,
    /// Whether the last recorded game set a new best
    pub new_best: bool,
}

impl App {
    pub fn new(
        size: usize,
        shuffle_steps: usize,
        seed: Option<u64>,
        theme: Theme,
    ) -> Result<Self, PuzzleError> {
        let game = match seed {
            Some(seed) => Game::with_seed(size, shuffle_steps, seed)?,
            None => Game::new(size, shuffle_steps)?,
        };
        Ok(Self {
            game,
            theme,
            scores: ScoreBook::load(),
            screen_state: ScreenState::Playing,
            win_screen: WinScreen::new(),
            message: None,
            message_timer: 0,
            game_recorded: false,
            new_best: false,
        })
    }

    /// Get the tick rate based on current screen
    pub fn get_tick_rate(&self) -> Duration {
        match self.screen_state {
            // 30 FPS for the celebration, 10 FPS otherwise
            ScreenState::Win => Duration::from_millis(33),
            ScreenState::Playing | ScreenState::Scores => Duration::from_millis(100),
        }
    }

    /// Update animations, the message timer, and the win transition
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        match self.screen_state {
            ScreenState::Win => self.win_screen.update(),
            ScreenState::Playing => {
                if self.game.is_completed() {
                    self.record_finished_game();
                    let (width, height) = terminal::size().unwrap_or((80, 24));
                    self.win_screen.reset(width, height);
                    self.screen_state = ScreenState::Win;
                }
            }
            ScreenState::Scores => {}
        }
    }

    /// Push the finished game into the score book exactly once
    fn record_finished_game(&mut self) {
        if self.game_recorded {
            return;
        }
        self.game_recorded = true;
        self.new_best = self.scores.record(
            self.game.size(),
            self.game.moves(),
            self.game.elapsed().as_secs(),
        );
    }

    /// Show a temporary message (~3 seconds at the playing tick rate)
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30;
    }

    fn new_game(&mut self) {
        self.game.restart();
        self.game_recorded = false;
        self.new_best = false;
        self.screen_state = ScreenState::Playing;
        self.show_message(&format!("New {0}x{0} game", self.game.size()));
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen_state {
            ScreenState::Playing => self.handle_game_key(key),
            ScreenState::Win => self.handle_win_key(key),
            ScreenState::Scores => self.handle_scores_key(key),
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => self.slide(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => self.slide(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => self.slide(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => self.slide(Direction::Right),
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('s') => self.screen_state = ScreenState::Scores,
            KeyCode::Char('t') => {
                self.theme = self.theme.next();
                self.show_message(&format!("Theme: {}", self.theme.name));
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn slide(&mut self, dir: Direction) {
        // A press with no target tile (gap on that border) is silently
        // ignored, same as a click on a non-adjacent tile in the engine
        let _ = self.game.slide(dir);
    }

    fn handle_win_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Char('n') | KeyCode::Enter | KeyCode::Char(' ') => self.new_game(),
            KeyCode::Char('s') => self.screen_state = ScreenState::Scores,
            KeyCode::Esc => {
                // Back to the (finished) board view
                self.screen_state = ScreenState::Playing;
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_scores_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Esc | KeyCode::Char('s') => {
                self.screen_state = if self.game.is_completed() {
                    ScreenState::Win
                } else {
                    ScreenState::Playing
                };
            }
            _ => {}
        }
        AppAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn test_app(size: usize, steps: usize) -> App {
        let mut app = App::new(size, steps, Some(42), Theme::dark()).unwrap();
        // Keep tests off the real score file
        app.scores = ScoreBook::in_memory();
        app
    }

    #[test]
    fn test_quit_from_any_screen() {
        let mut app = test_app(4, 100);
        assert!(matches!(press(&mut app, KeyCode::Char('q')), AppAction::Quit));

        app.screen_state = ScreenState::Scores;
        assert!(matches!(press(&mut app, KeyCode::Char('q')), AppAction::Quit));
    }

    #[test]
    fn test_arrows_drive_the_engine() {
        let mut app = test_app(4, 100);
        let before = app.game.board().clone();
        // Up only lacks a target when the gap is on the bottom row, in
        // which case Down always has one
        press(&mut app, KeyCode::Up);
        if app.game.moves() == 0 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.game.moves(), 1);
        assert_ne!(app.game.board(), &before);
    }

    #[test]
    fn test_win_transition_records_once() {
        // Zero-step shuffle: board is already solved
        let mut app = test_app(4, 0);
        assert!(app.game.is_completed());

        app.tick();
        assert_eq!(app.screen_state, ScreenState::Win);
        assert!(app.new_best);
        assert_eq!(app.scores.best(4).unwrap().moves, 0);

        // Further ticks must not re-record
        app.screen_state = ScreenState::Playing;
        app.tick();
        assert_eq!(app.scores.best(4).unwrap().moves, 0);
    }

    #[test]
    fn test_scores_screen_round_trip() {
        let mut app = test_app(4, 100);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.screen_state, ScreenState::Scores);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen_state, ScreenState::Playing);
    }

    #[test]
    fn test_message_expires() {
        let mut app = test_app(4, 100);
        app.show_message("hello");
        assert!(app.message.is_some());
        for _ in 0..30 {
            app.tick();
        }
        assert!(app.message.is_none());
    }
}
