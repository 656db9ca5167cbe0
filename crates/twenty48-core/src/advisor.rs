//! Greedy move suggestion.
//!
//! The advisor probes the transform engine in every direction and recommends
//! the grid-changing direction with the largest immediate score gain. It only
//! ever looks at copies, so asking for a hint cannot disturb a game.

use std::fmt;
use std::str::FromStr;

use crate::direction::Direction;
use crate::grid::Grid;
use crate::transform;
use crate::types::Score;

/// Rule for choosing among directions with the same maximal gain.
///
/// Directions are evaluated in [`Direction::ALL`] order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The last direction with the maximal gain wins (compare with `>=`).
    #[default]
    LastWins,
    /// The first direction with the maximal gain wins (compare with `>`).
    FirstWins,
}

impl TieBreak {
    pub fn as_str(self) -> &'static str {
        match self {
            TieBreak::LastWins => "last",
            TieBreak::FirstWins => "first",
        }
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" => Ok(TieBreak::LastWins),
            "first" => Ok(TieBreak::FirstWins),
            other => Err(format!("Invalid tie-break '{other}': expected 'last' or 'first'")),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of probing one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub direction: Direction,
    /// Whether the move would change the grid.
    pub changed: bool,
    /// Score the move would earn.
    pub score_gained: Score,
}

/// Probes all four directions against `grid`, in [`Direction::ALL`] order.
pub fn evaluate(grid: &Grid) -> [Evaluation; 4] {
    Direction::ALL.map(|direction| {
        let result = transform::transform(grid, direction);
        Evaluation {
            direction,
            changed: result.changed,
            score_gained: result.score_gained,
        }
    })
}

/// Picks the best direction from a set of evaluations.
///
/// Directions that leave the grid unchanged are ignored. Returns `None` when
/// no direction changes the grid.
pub fn pick(evaluations: &[Evaluation], tie_break: TieBreak) -> Option<Direction> {
    let mut best: Option<&Evaluation> = None;
    for eval in evaluations.iter().filter(|e| e.changed) {
        let better = match best {
            None => true,
            Some(current) => match tie_break {
                TieBreak::LastWins => eval.score_gained >= current.score_gained,
                TieBreak::FirstWins => eval.score_gained > current.score_gained,
            },
        };
        if better {
            best = Some(eval);
        }
    }
    best.map(|e| e.direction)
}

/// Suggests a direction for `grid`, or `None` if no move changes it.
pub fn suggest(grid: &Grid, tie_break: TieBreak) -> Option<Direction> {
    pick(&evaluate(grid), tie_break)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_prefers_largest_gain() {
        // Vertical moves merge the 8s, horizontal moves merge the 2s.
        let g = grid("2 2 8 / 0 0 8 / 0 0 0");
        assert_eq!(suggest(&g, TieBreak::LastWins), Some(Direction::Down));
        assert_eq!(suggest(&g, TieBreak::FirstWins), Some(Direction::Up));
    }

    #[test]
    fn test_tie_break_policies() {
        // Every direction changes the grid without merging.
        let g = grid("0 0 0 / 0 2 0 / 0 0 0");
        assert_eq!(suggest(&g, TieBreak::LastWins), Some(Direction::Down));
        assert_eq!(suggest(&g, TieBreak::FirstWins), Some(Direction::Left));
    }

    #[test]
    fn test_ignores_unchanged_directions() {
        // Left does nothing, right slides without merging, up and down merge.
        let g = grid("2 0 / 2 0");
        let evals = evaluate(&g);
        assert!(!evals[0].changed);
        assert_eq!((evals[1].changed, evals[1].score_gained), (true, 0));
        assert_eq!((evals[2].changed, evals[2].score_gained), (true, 4));
        assert_eq!((evals[3].changed, evals[3].score_gained), (true, 4));
        assert_eq!(suggest(&g, TieBreak::FirstWins), Some(Direction::Up));
        assert_eq!(suggest(&g, TieBreak::LastWins), Some(Direction::Down));

        // An unchanged direction never wins, even with nothing else on offer.
        let stuck = grid("2 4 / 0 0");
        assert_eq!(suggest(&stuck, TieBreak::LastWins), Some(Direction::Down));
        assert_eq!(suggest(&stuck, TieBreak::FirstWins), Some(Direction::Down));
    }

    #[test]
    fn test_no_moves() {
        let g = grid("2 4 / 4 2");
        assert_eq!(suggest(&g, TieBreak::LastWins), None);
        assert_eq!(suggest(&g, TieBreak::FirstWins), None);
    }

    #[test]
    fn test_does_not_mutate_grid() {
        let g = grid("2 2 / 0 0");
        let copy = g.clone();
        let _ = suggest(&g, TieBreak::LastWins);
        assert_eq!(g, copy);
    }

    #[test]
    fn test_parse_tie_break() {
        assert_eq!("last".parse::<TieBreak>(), Ok(TieBreak::LastWins));
        assert_eq!("First".parse::<TieBreak>(), Ok(TieBreak::FirstWins));
        assert!("middle".parse::<TieBreak>().is_err());
    }
}
