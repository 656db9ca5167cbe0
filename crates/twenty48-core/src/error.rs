//! Error types for the engine.
//!
//! Only contract violations are errors. A move that changes nothing, a spawn
//! into a full grid and a finished game are all reported as data instead.

use thiserror::Error;

use crate::constants::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::types::Tile;

/// Invalid input handed to the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Grid edge outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    #[error(
        "invalid grid size {0}: must be between {min} and {max}",
        min = MIN_GRID_SIZE,
        max = MAX_GRID_SIZE
    )]
    InvalidSize(usize),

    /// A direction name or index that is not one of left, right, up, down.
    #[error("invalid direction '{0}': expected left, right, up or down")]
    InvalidDirection(String),

    /// A non-zero cell that is not a power of two >= 2.
    #[error("invalid tile {value} at cell {index}")]
    InvalidTile { index: usize, value: Tile },

    /// Cell count does not match `size * size`.
    #[error("expected {expected} cells, got {got}")]
    CellCountMismatch { expected: usize, got: usize },

    /// Text that could not be parsed into a grid.
    #[error("malformed grid: {0}")]
    MalformedGrid(String),
}

/// Convenience alias for results carrying a [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;
