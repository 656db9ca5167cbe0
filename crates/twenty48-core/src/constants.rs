//! Global constants

use crate::types::Tile;

/// Smallest grid edge accepted by [`Grid::new`](crate::grid::Grid::new).
pub const MIN_GRID_SIZE: usize = 2;

/// Largest grid edge. Line buffers are stack allocated with this capacity.
pub const MAX_GRID_SIZE: usize = 8;

/// Grid edge used when nothing else is configured.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Largest tile a grid can hold. Tiles of this value no longer merge, since
/// their sum does not fit in a [`Tile`].
pub const MAX_TILE: Tile = 1 << (Tile::BITS - 1);

/// Number of snapshots kept for undo.
pub const HISTORY_CAPACITY: usize = 50;

/// Tiles placed on an empty grid at the start of a game.
pub const INITIAL_TILES: usize = 2;

/// Tiles placed after every move that changes the grid.
pub const TILES_PER_MOVE: usize = 1;

/// Probability that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;
