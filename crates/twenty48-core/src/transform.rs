//! Directional slide-and-merge of a whole grid.
//!
//! Each row (left/right) or column (up/down) is handled on its own:
//!
//! 1. Non-empty tiles are collected in travel order.
//! 2. A single forward scan merges equal neighbours. A tile produced by a
//!    merge is skipped over, so it cannot merge again in the same move.
//! 3. The merged tiles are packed against the target edge and the rest of
//!    the line is filled with zeros.
//!
//! The engine is pure: it never touches its input and uses no randomness.

use arrayvec::ArrayVec;

use crate::constants::MAX_GRID_SIZE;
use crate::direction::Direction;
use crate::grid::{Grid, can_merge};
use crate::types::{Score, Tile};

/// One line of tiles in travel order.
pub type Line = ArrayVec<Tile, MAX_GRID_SIZE>;

/// Outcome of sliding a grid in one direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// Grid after the slide. Equal to the input when `changed` is false.
    pub grid: Grid,
    /// Whether any cell differs from the input grid.
    pub changed: bool,
    /// Sum of the values of every tile created by a merge.
    pub score_gained: Score,
}

/// Slides and merges a single line that is already in travel order.
///
/// Returns the resulting line, padded with zeros to the input length, and
/// the score gained by merges.
///
/// ```
/// use twenty48_core::transform::slide_line;
///
/// let (line, gained) = slide_line(&[2, 2, 2, 2]);
/// assert_eq!(line.as_slice(), &[4, 4, 0, 0]);
/// assert_eq!(gained, 8);
/// ```
pub fn slide_line(line: &[Tile]) -> (Line, Score) {
    debug_assert!(line.len() <= MAX_GRID_SIZE);

    let tiles: Line = line.iter().copied().filter(|&v| v != 0).collect();

    let mut merged = Line::new();
    let mut gained: Score = 0;
    let mut k = 0;
    while k < tiles.len() {
        let value = tiles[k];
        if k + 1 < tiles.len() && tiles[k + 1] == value && can_merge(value) {
            let doubled = value * 2;
            merged.push(doubled);
            gained += Score::from(doubled);
            k += 2;
        } else {
            merged.push(value);
            k += 1;
        }
    }

    while merged.len() < line.len() {
        merged.push(0);
    }

    (merged, gained)
}

/// Slides every line of `grid` towards `direction`.
pub fn transform(grid: &Grid, direction: Direction) -> MoveResult {
    let size = grid.size();
    let mut result = grid.clone();
    let mut changed = false;
    let mut score_gained: Score = 0;

    for i in 0..size {
        let indices = grid.line(direction, i);
        let original: Line = indices.iter().map(|&idx| grid.cells()[idx]).collect();

        let (slid, gained) = slide_line(&original);
        score_gained += gained;

        for (&idx, (&before, &after)) in indices.iter().zip(original.iter().zip(slid.iter())) {
            if before != after {
                changed = true;
                result.set(idx, after);
            }
        }
    }

    MoveResult {
        grid: result,
        changed,
        score_gained,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_TILE;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_slide_line_merges_once_per_tile() {
        let (line, gained) = slide_line(&[2, 2, 2, 2]);
        assert_eq!(line.as_slice(), &[4, 4, 0, 0]);
        assert_eq!(gained, 8);
    }

    #[test]
    fn test_slide_line_cases() {
        let cases: &[(&[Tile], &[Tile], Score)] = &[
            (&[0, 0, 0, 0], &[0, 0, 0, 0], 0),
            (&[2, 4, 8, 16], &[2, 4, 8, 16], 0),
            (&[0, 0, 0, 2], &[2, 0, 0, 0], 0),
            (&[2, 0, 2, 0], &[4, 0, 0, 0], 4),
            (&[2, 2, 2, 0], &[4, 2, 0, 0], 4),
            (&[4, 4, 8, 8], &[8, 16, 0, 0], 24),
            (&[2, 2, 4, 0], &[4, 4, 0, 0], 4),
            (&[8, 0, 0, 8], &[16, 0, 0, 0], 16),
            (&[2, 4, 4, 2], &[2, 8, 2, 0], 8),
        ];
        for &(input, expected, expected_gain) in cases {
            let (line, gained) = slide_line(input);
            assert_eq!(line.as_slice(), expected, "input {input:?}");
            assert_eq!(gained, expected_gain, "input {input:?}");
        }
    }

    #[test]
    fn test_transform_left() {
        let g = grid("2 2 0 0 / 0 0 0 0 / 0 0 0 0 / 0 0 0 0");
        let result = transform(&g, Direction::Left);
        assert!(result.changed);
        assert_eq!(result.score_gained, 4);
        assert_eq!(&result.grid.cells()[..4], &[4, 0, 0, 0]);
        assert_eq!(result.grid.tile_sum(), 4);
    }

    #[test]
    fn test_transform_right_merges_from_the_right() {
        let g = grid("2 2 2 0 / 0 0 0 0 / 0 0 0 0 / 0 0 0 0");
        let result = transform(&g, Direction::Right);
        assert_eq!(&result.grid.cells()[..4], &[0, 0, 2, 4]);
        assert_eq!(result.score_gained, 4);
    }

    #[test]
    fn test_transform_up_and_down() {
        let g = grid("2 0 0 / 2 0 0 / 4 0 0");
        let up = transform(&g, Direction::Up);
        assert_eq!(up.grid, grid("4 0 0 / 4 0 0 / 0 0 0"));
        assert_eq!(up.score_gained, 4);

        let down = transform(&g, Direction::Down);
        assert_eq!(down.grid, grid("0 0 0 / 4 0 0 / 4 0 0"));
        assert_eq!(down.score_gained, 4);
    }

    #[test]
    fn test_transform_unchanged() {
        let g = grid("2 4 / 8 16");
        for dir in Direction::ALL {
            let result = transform(&g, dir);
            assert!(!result.changed, "{dir}");
            assert_eq!(result.score_gained, 0);
            assert_eq!(result.grid, g);
        }
    }

    #[test]
    fn test_transform_does_not_touch_input() {
        let g = grid("2 2 / 0 0");
        let copy = g.clone();
        let _ = transform(&g, Direction::Left);
        assert_eq!(g, copy);
    }

    #[test]
    fn test_transform_sums_gains_across_lines() {
        let g = grid("2 2 0 / 4 4 0 / 8 0 8");
        let result = transform(&g, Direction::Left);
        assert_eq!(result.grid, grid("4 0 0 / 8 0 0 / 16 0 0"));
        assert_eq!(result.score_gained, 4 + 8 + 16);
    }

    #[test]
    fn test_largest_tiles_do_not_merge() {
        let (line, gained) = slide_line(&[MAX_TILE, MAX_TILE, 0]);
        assert_eq!(line.as_slice(), &[MAX_TILE, MAX_TILE, 0]);
        assert_eq!(gained, 0);

        let g = Grid::from_cells(2, vec![MAX_TILE, MAX_TILE, 0, 0]).unwrap();
        let result = transform(&g, Direction::Left);
        assert!(!result.changed);
        assert_eq!(result.grid, g);

        let result = transform(&g, Direction::Right);
        assert!(!result.changed);
    }

    #[test]
    fn test_merge_up_to_largest_tile() {
        let half = MAX_TILE / 2;
        let (line, gained) = slide_line(&[half, half, MAX_TILE]);
        assert_eq!(line.as_slice(), &[MAX_TILE, MAX_TILE, 0]);
        assert_eq!(gained, Score::from(MAX_TILE));
    }
}
