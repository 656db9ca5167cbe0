//! Grid plus running score.

use rand::Rng;

use crate::constants::INITIAL_TILES;
use crate::error::Result;
use crate::grid::Grid;
use crate::spawner;
use crate::types::Score;

/// A position in a game: the grid and the score reached so far.
///
/// Cloning produces an independent deep copy, which is what undo snapshots
/// rely on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// The current grid.
    pub grid: Grid,
    /// Score accumulated from merges.
    pub score: Score,
}

impl GameState {
    /// Creates a state from an existing grid and score.
    ///
    /// This is useful for setting up specific positions for analysis or
    /// tests.
    pub fn from_grid(grid: Grid, score: Score) -> Self {
        Self { grid, score }
    }

    /// Starts a new game: an empty `size * size` grid with
    /// [`INITIAL_TILES`] random tiles and a score of zero.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`](crate::GameError::InvalidSize) for
    /// an unsupported grid size.
    pub fn new_game<R: Rng>(size: usize, rng: &mut R) -> Result<Self> {
        let mut grid = Grid::new(size)?;
        spawner::spawn(&mut grid, INITIAL_TILES, rng);
        Ok(Self { grid, score: 0 })
    }
}
