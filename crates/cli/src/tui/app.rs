//! Application state and main loop for the TUI.

use std::time::Duration;

use ratatui::DefaultTerminal;
use twenty48_core::Direction;
use twenty48_core::advisor::Evaluation;
use twenty48_core::constants::{MAX_GRID_SIZE, MIN_GRID_SIZE};

use crate::game::Game;

use super::event::{self, Event};
use super::render;

/// UI mode for handling different interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal game play mode
    Normal,
    /// Showing the advisor's suggestion
    Hint,
    /// Game over notice
    GameOver,
    /// Confirming quit
    ConfirmQuit,
}

/// Main application state.
pub struct App {
    /// Current game
    pub game: Game,
    /// Current UI mode
    pub ui_mode: UiMode,
    /// Grid size the next new game will use
    pub pending_size: usize,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Suggested direction while the hint popup is open
    pub hint: Option<Direction>,
    /// Per-direction results backing the hint popup
    pub evaluations: Vec<Evaluation>,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    pub fn new(game: Game) -> Self {
        let pending_size = game.session().size();
        let ui_mode = if game.session().is_game_over() {
            UiMode::GameOver
        } else {
            UiMode::Normal
        };
        Self {
            game,
            ui_mode,
            pending_size,
            should_quit: false,
            hint: None,
            evaluations: Vec::new(),
            status_message: None,
        }
    }

    /// Runs the main TUI loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        loop {
            terminal.draw(|frame| render::render(frame, &self))?;

            if let Some(event) = event::poll_event(Duration::from_millis(100))? {
                self.handle_event(event);
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Handles an input event.
    pub(super) fn handle_event(&mut self, event: Event) {
        if event == Event::ForceQuit {
            self.should_quit = true;
            return;
        }
        match self.ui_mode {
            UiMode::Normal => self.handle_normal_event(event),
            UiMode::Hint => self.handle_hint_event(event),
            UiMode::GameOver => self.handle_game_over_event(event),
            UiMode::ConfirmQuit => self.handle_confirm_quit_event(event),
        }
    }

    fn handle_normal_event(&mut self, event: Event) {
        match event {
            Event::Quit => self.ui_mode = UiMode::ConfirmQuit,
            Event::Move(dir) => self.make_move(dir),
            Event::Undo => self.undo_move(),
            Event::NewGame => self.new_game(),
            Event::Hint => self.show_hint(),
            Event::SizeUp => self.change_size(1),
            Event::SizeDown => self.change_size(-1),
            _ => {}
        }
    }

    fn handle_hint_event(&mut self, event: Event) {
        self.close_hint();
        match event {
            Event::Quit | Event::Hint | Event::Select => {}
            // Any other key acts as it would without the popup.
            other => self.handle_normal_event(other),
        }
    }

    fn handle_game_over_event(&mut self, event: Event) {
        match event {
            Event::Quit => self.ui_mode = UiMode::ConfirmQuit,
            Event::Undo => {
                self.ui_mode = UiMode::Normal;
                self.undo_move();
            }
            Event::NewGame => {
                self.ui_mode = UiMode::Normal;
                self.new_game();
            }
            Event::Select => self.ui_mode = UiMode::Normal,
            Event::SizeUp => self.change_size(1),
            Event::SizeDown => self.change_size(-1),
            _ => {}
        }
    }

    fn handle_confirm_quit_event(&mut self, event: Event) {
        match event {
            Event::Char('y') | Event::Char('Y') => {
                self.should_quit = true;
            }
            _ => {
                self.ui_mode = self.resting_mode();
            }
        }
    }

    /// Mode to fall back to once a dialog closes.
    fn resting_mode(&self) -> UiMode {
        if self.game.session().is_game_over() {
            UiMode::GameOver
        } else {
            UiMode::Normal
        }
    }

    fn make_move(&mut self, dir: Direction) {
        if self.game.session().is_game_over() {
            self.status_message = Some("Game is over!".to_string());
            return;
        }
        let outcome = self.game.make_move(dir);
        if !outcome.moved {
            self.status_message = Some(format!("Nothing moves {dir}"));
            return;
        }
        let game_over = outcome.game_over;
        self.status_message = None;
        if game_over {
            self.ui_mode = UiMode::GameOver;
        }
    }

    fn undo_move(&mut self) {
        if self.game.undo() {
            self.status_message = Some("Move undone".to_string());
            self.ui_mode = self.resting_mode();
        } else {
            self.status_message = Some("Nothing to undo".to_string());
        }
    }

    fn new_game(&mut self) {
        match self.game.new_game(self.pending_size) {
            Ok(()) => {
                self.status_message = Some(format!(
                    "New {0}x{0} game started",
                    self.pending_size
                ));
                self.ui_mode = self.resting_mode();
            }
            Err(err) => self.status_message = Some(err.to_string()),
        }
    }

    fn show_hint(&mut self) {
        let session = self.game.session();
        let Some(dir) = session.suggest() else {
            self.status_message = Some("No move changes the grid".to_string());
            return;
        };
        self.hint = Some(dir);
        self.evaluations = session.evaluate().to_vec();
        self.ui_mode = UiMode::Hint;
    }

    fn close_hint(&mut self) {
        self.hint = None;
        self.evaluations.clear();
        self.ui_mode = UiMode::Normal;
    }

    fn change_size(&mut self, delta: isize) {
        let size = self
            .pending_size
            .saturating_add_signed(delta)
            .clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        self.pending_size = size;
        self.status_message = Some(format!("Next game: {size}x{size} (press N)"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsStore;
    use twenty48_core::{GameState, Session};

    fn app(name: &str, grid: &str) -> App {
        let path = std::env::temp_dir().join(format!(
            "twenty48-app-{}-{name}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        let state = GameState::from_grid(grid.parse().unwrap(), 0);
        let session = Session::from_state(state, 11);
        App::new(Game::with_session(session, SettingsStore::open(path)))
    }

    #[test]
    fn test_quit_needs_confirmation() {
        let mut app = app("quit", "2 0 / 0 0");
        app.handle_event(Event::Quit);
        assert_eq!(app.ui_mode, UiMode::ConfirmQuit);
        app.handle_event(Event::Char('n'));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.should_quit);

        app.handle_event(Event::Quit);
        app.handle_event(Event::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_force_quit_from_any_mode() {
        let mut app = app("force", "2 2 / 0 0");
        app.handle_event(Event::Hint);
        assert_eq!(app.ui_mode, UiMode::Hint);
        app.handle_event(Event::ForceQuit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_noop_move_reports_status() {
        let mut app = app("noop", "2 0 / 4 0");
        app.handle_event(Event::Move(Direction::Left));
        assert_eq!(app.game.session().score(), 0);
        assert_eq!(app.status_message.as_deref(), Some("Nothing moves left"));
    }

    #[test]
    fn test_hint_popup_is_transient() {
        let mut app = app("hint", "2 2 0 / 0 0 0 / 0 0 0");
        let before = app.game.session().state().clone();
        app.handle_event(Event::Hint);
        assert_eq!(app.ui_mode, UiMode::Hint);
        assert_eq!(app.hint, Some(Direction::Right));
        assert_eq!(app.evaluations.len(), 4);
        assert_eq!(app.game.session().state(), &before);

        app.handle_event(Event::Select);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.hint, None);
    }

    #[test]
    fn test_move_while_hint_open_is_applied() {
        let mut app = app("hint-move", "2 2 0 / 0 0 0 / 0 0 0");
        app.handle_event(Event::Hint);
        app.handle_event(Event::Move(Direction::Left));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.game.session().score(), 4);
    }

    #[test]
    fn test_game_over_popup_then_undo() {
        let mut app = app("over", "2 2 16 / 8 4 32 / 64 128 256");
        app.handle_event(Event::Move(Direction::Left));
        assert_eq!(app.ui_mode, UiMode::GameOver);

        app.handle_event(Event::Undo);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.game.session().is_game_over());
        assert_eq!(app.game.session().score(), 0);
    }

    #[test]
    fn test_size_changes_apply_on_new_game() {
        let mut app = app("size", "2 0 0 / 0 0 0 / 0 0 0");
        app.handle_event(Event::SizeUp);
        app.handle_event(Event::SizeUp);
        assert_eq!(app.pending_size, 5);
        assert_eq!(app.game.session().size(), 3);

        app.handle_event(Event::NewGame);
        assert_eq!(app.game.session().size(), 5);
        assert_eq!(app.game.session().grid().empty_count(), 23);

        for _ in 0..10 {
            app.handle_event(Event::SizeDown);
        }
        assert_eq!(app.pending_size, MIN_GRID_SIZE);
        for _ in 0..10 {
            app.handle_event(Event::SizeUp);
        }
        assert_eq!(app.pending_size, MAX_GRID_SIZE);
    }
}
