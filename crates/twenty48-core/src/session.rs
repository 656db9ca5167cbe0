//! Game session management.
//!
//! A [`Session`] owns everything a single game needs: the current
//! [`GameState`], the undo [`History`], the random source used for spawns and
//! the advisor's tie-break policy. Front ends keep the only reference and call
//! into it once per input event.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::advisor::{self, Evaluation, TieBreak};
use crate::constants::TILES_PER_MOVE;
use crate::direction::Direction;
use crate::error::Result;
use crate::game_state::GameState;
use crate::grid::Grid;
use crate::history::History;
use crate::spawner::{self, Spawn};
use crate::terminal;
use crate::transform;
use crate::types::Score;

/// What a call to [`Session::apply_move`] did, for the renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the grid changed. When false nothing else happened.
    pub moved: bool,
    /// Score earned by merges in this move.
    pub gained: Score,
    /// Tiles spawned after the move.
    pub spawned: Vec<Spawn>,
    /// Whether the game is over after this move.
    pub game_over: bool,
}

/// A running game.
#[derive(Debug)]
pub struct Session {
    state: GameState,
    history: History,
    rng: StdRng,
    tie_break: TieBreak,
    game_over: bool,
}

impl Session {
    /// Starts a new game with a randomly seeded tile source.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`](crate::GameError::InvalidSize) for
    /// an unsupported grid size.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_rng(size, StdRng::from_os_rng())
    }

    /// Starts a new game whose spawns are fully determined by `seed`.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self> {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: usize, mut rng: StdRng) -> Result<Self> {
        let state = GameState::new_game(size, &mut rng)?;
        debug!("new {size}x{size} game");
        Ok(Self::build(state, rng))
    }

    /// Continues from an existing position with a seeded tile source.
    pub fn from_state(state: GameState, seed: u64) -> Self {
        Self::build(state, StdRng::seed_from_u64(seed))
    }

    fn build(state: GameState, rng: StdRng) -> Self {
        let game_over = !terminal::has_moves(&state.grid);
        Self {
            state,
            history: History::new(),
            rng,
            tie_break: TieBreak::default(),
            game_over,
        }
    }

    /// Replaces the current game with a fresh one of edge `size`.
    ///
    /// Clears the undo history; the random source carries on.
    pub fn new_game(&mut self, size: usize) -> Result<()> {
        let state = GameState::new_game(size, &mut self.rng)?;
        debug!("new {size}x{size} game");
        self.game_over = !terminal::has_moves(&state.grid);
        self.state = state;
        self.history.clear();
        Ok(())
    }

    /// Slides the grid towards `direction`.
    ///
    /// If the grid changes, the previous state is pushed onto the history,
    /// the gain is added to the score, a new tile is spawned and game over is
    /// re-evaluated. A move that changes nothing leaves the session untouched.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let result = transform::transform(&self.state.grid, direction);
        if !result.changed {
            return MoveOutcome {
                game_over: self.game_over,
                ..MoveOutcome::default()
            };
        }

        self.history.push(&self.state);
        self.state.grid = result.grid;
        self.state.score += result.score_gained;

        let spawned = spawner::spawn(&mut self.state.grid, TILES_PER_MOVE, &mut self.rng);
        self.game_over = !terminal::has_moves(&self.state.grid);

        debug!(
            "moved {direction}: +{} (score {})",
            result.score_gained, self.state.score
        );
        if self.game_over {
            info!(
                "game over with score {} and max tile {}",
                self.state.score,
                self.state.grid.max_tile()
            );
        }

        MoveOutcome {
            moved: true,
            gained: result.score_gained,
            spawned,
            game_over: self.game_over,
        }
    }

    /// Restores the state from before the last grid-changing move.
    ///
    /// # Returns
    ///
    /// The restored state, or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&GameState> {
        let previous = self.history.pop()?;
        self.game_over = !terminal::has_moves(&previous.grid);
        self.state = previous;
        debug!("undo: score back to {}", self.state.score);
        Some(&self.state)
    }

    /// Suggests the next direction without changing anything.
    pub fn suggest(&self) -> Option<Direction> {
        advisor::suggest(&self.state.grid, self.tie_break)
    }

    /// Per-direction probe results for the current grid.
    pub fn evaluate(&self) -> [Evaluation; 4] {
        advisor::evaluate(&self.state.grid)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn size(&self) -> usize {
        self.state.grid.size()
    }

    /// Whether no direction can change the grid any more.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_undo(&self) -> bool {
        self.history.peek().is_some()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.tie_break = tie_break;
    }
}
