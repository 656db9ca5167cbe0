//! Full-screen terminal interface built on ratatui.
//!
//! Keyboard only: arrows or WASD slide the tiles, single letters run the
//! game commands, and popups show hints, game over and quit confirmation.

mod app;
mod event;
mod render;
mod widgets;

use app::App;

use crate::game::Game;

/// Runs the TUI until the player quits.
pub fn run(game: Game) -> Result<(), String> {
    let app = App::new(game);

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();

    result.map_err(|e| e.to_string())
}
