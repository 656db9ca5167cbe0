//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};
use twenty48_core::Direction;

/// Application events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Quit the application (asks for confirmation)
    Quit,
    /// Force quit the application (Ctrl+C)
    ForceQuit,
    /// Slide the tiles
    Move(Direction),
    /// Select/confirm action (Enter or Space)
    Select,
    /// Undo last move
    Undo,
    /// Start a new game
    NewGame,
    /// Show the advisor's suggestion
    Hint,
    /// Grow the grid used by the next new game
    SizeUp,
    /// Shrink the grid used by the next new game
    SizeDown,
    /// Any other character (dialog answers)
    Char(char),
}

/// Polls for an event with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c'))
            {
                return Ok(Some(Event::ForceQuit));
            }
            Ok(map_key_event(key.code))
        }
        _ => Ok(None),
    }
}

/// Maps a key code to an application event.
fn map_key_event(code: KeyCode) -> Option<Event> {
    let event = match code {
        KeyCode::Char('q') | KeyCode::Esc => Event::Quit,

        // Arrow keys
        KeyCode::Up => Event::Move(Direction::Up),
        KeyCode::Down => Event::Move(Direction::Down),
        KeyCode::Left => Event::Move(Direction::Left),
        KeyCode::Right => Event::Move(Direction::Right),

        // WASD
        KeyCode::Char('w') => Event::Move(Direction::Up),
        KeyCode::Char('s') => Event::Move(Direction::Down),
        KeyCode::Char('a') => Event::Move(Direction::Left),
        KeyCode::Char('d') => Event::Move(Direction::Right),

        KeyCode::Enter | KeyCode::Char(' ') => Event::Select,

        // Game commands
        KeyCode::Char('u') => Event::Undo,
        KeyCode::Char('n') => Event::NewGame,
        KeyCode::Char('i') => Event::Hint,
        KeyCode::Char('+') | KeyCode::Char('=') => Event::SizeUp,
        KeyCode::Char('-') => Event::SizeDown,

        KeyCode::Char(c) => Event::Char(c),
        _ => return None,
    };
    Some(event)
}
