//! Game state management for the terminal front ends.
//!
//! This module provides the `Game` struct which wraps the core session and
//! adds best-score persistence and colored terminal display.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use log::warn;
use twenty48_core::advisor::TieBreak;
use twenty48_core::constants::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};
use twenty48_core::types::{Score, Tile};
use twenty48_core::{Direction, MoveOutcome, Session};

use crate::settings::SettingsStore;

/// A session plus everything the front ends keep around it.
pub struct Game {
    /// Core session with history and undo support
    session: Session,
    /// Persisted size and best score
    store: SettingsStore,
    /// What the last move did, for highlighting
    last_outcome: Option<MoveOutcome>,
}

impl Game {
    /// Starts a game and records its size in the store.
    ///
    /// # Arguments
    /// * `size` - Grid edge to play on
    /// * `seed` - Fixed seed for reproducible spawns
    /// * `tie_break` - Advisor policy for equal gains
    /// * `store` - Settings file to read and update
    pub fn new(
        size: usize,
        seed: Option<u64>,
        tie_break: TieBreak,
        store: SettingsStore,
    ) -> Result<Self> {
        let mut session = match seed {
            Some(seed) => Session::with_seed(size, seed)?,
            None => Session::new(size)?,
        };
        session.set_tie_break(tie_break);
        Ok(Self::with_session(session, store))
    }

    /// Wraps `session` and records its grid size in the store.
    pub fn with_session(session: Session, mut store: SettingsStore) -> Self {
        if let Err(err) = store.set_size(session.size()) {
            warn!("could not save grid size: {err:#}");
        }
        Self {
            session,
            store,
            last_outcome: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Best score across runs, including the game in progress.
    pub fn best(&self) -> Score {
        self.store.best().max(self.session.score())
    }

    pub fn last_outcome(&self) -> Option<&MoveOutcome> {
        self.last_outcome.as_ref()
    }

    /// Plays `direction` and saves the best score if it improved.
    pub fn make_move(&mut self, direction: Direction) -> &MoveOutcome {
        let outcome = self.session.apply_move(direction);
        if outcome.moved
            && let Err(err) = self.store.record_score(self.session.score())
        {
            warn!("could not save best score: {err:#}");
        }
        self.last_outcome.insert(outcome)
    }

    /// Undoes the last move.
    ///
    /// # Returns
    /// `true` if a move was undone, `false` if there was nothing to undo
    pub fn undo(&mut self) -> bool {
        self.last_outcome = None;
        self.session.undo().is_some()
    }

    /// Starts over on a grid of edge `size` and remembers the size.
    pub fn new_game(&mut self, size: usize) -> Result<()> {
        self.session.new_game(size)?;
        self.last_outcome = None;
        if let Err(err) = self.store.set_size(size) {
            warn!("could not save grid size: {err:#}");
        }
        Ok(())
    }

    /// Prints a colored representation of the grid to the terminal.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    /// Colored grid followed by the score lines and, once no move is left,
    /// the game-over notice.
    pub fn render(&self) -> String {
        use std::fmt::Write;

        let grid = self.session.grid();
        let size = grid.size();
        let spawned: Vec<usize> = self
            .last_outcome
            .iter()
            .flat_map(|o| o.spawned.iter().map(|s| s.index))
            .collect();

        let border = |left: &str, mid: &str, right: &str| {
            let mut line = String::from(left);
            for c in 0..size {
                line.push_str("──────");
                line.push_str(if c + 1 < size { mid } else { right });
            }
            line
        };

        let mut out = String::new();
        let _ = writeln!(out, "  {}", border("┌", "┬", "┐"));
        for row in 0..size {
            out.push_str("  │");
            for col in 0..size {
                let index = grid.index(row, col);
                let cell = tile_label(grid.cells()[index]);
                if spawned.contains(&index) {
                    let _ = write!(out, "{}│", cell.underline());
                } else {
                    let _ = write!(out, "{cell}│");
                }
            }
            out.push('\n');
            if row + 1 < size {
                let _ = writeln!(out, "  {}", border("├", "┼", "┤"));
            }
        }
        let _ = writeln!(out, "  {}", border("└", "┴", "┘"));
        let _ = writeln!(
            out,
            "  Score: {}   Best: {}",
            self.session.score().to_string().bright_cyan(),
            self.best().to_string().bright_yellow()
        );
        if self.session.is_game_over() {
            let _ = writeln!(out, "  {}", GAME_OVER_NOTICE.bright_red());
        }
        out
    }
}

/// Shown once no direction can change the grid.
pub const GAME_OVER_NOTICE: &str = "*** Game Over *** (undo or start a new game)";

/// Chooses the grid size for a run.
///
/// An explicit size wins, then the persisted one if it is still valid, then
/// the default.
pub fn resolve_size(requested: Option<usize>, stored: Option<usize>) -> usize {
    requested
        .or(stored.filter(|s| (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(s)))
        .unwrap_or(DEFAULT_GRID_SIZE)
}

/// Six-character colored label for a tile.
fn tile_label(value: Tile) -> ColoredString {
    if value == 0 {
        return "   ·  ".bright_black();
    }
    let text = format!("{value:^6}");
    match value.trailing_zeros() {
        1 => text.white(),
        2 => text.bright_white(),
        3 => text.yellow(),
        4 => text.bright_yellow(),
        5 => text.red(),
        6 => text.bright_red(),
        7 => text.magenta(),
        8 => text.bright_magenta(),
        9 => text.green(),
        10 => text.bright_green().bold(),
        11 => text.bright_cyan().bold(),
        _ => text.bright_blue().bold(),
    }
}
