//! Core engine for a sliding-tile merge puzzle played on a square grid.
//!
//! Everything in this crate is synchronous and free of I/O. Front ends own a
//! [`Session`](session::Session) and feed it directions; the session reports
//! what changed so the caller can redraw.

pub mod advisor;
pub mod constants;
pub mod direction;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod history;
pub mod session;
pub mod spawner;
pub mod terminal;
pub mod transform;
pub mod types;

pub use direction::Direction;
pub use error::{GameError, Result};
pub use game_state::GameState;
pub use grid::Grid;
pub use session::{MoveOutcome, Session};
