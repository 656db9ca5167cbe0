//! Game-over detection.

use crate::grid::{Grid, can_merge};

/// Returns `true` if some direction would change `grid`.
///
/// That is the case exactly when a cell is empty or two orthogonally
/// adjacent cells hold the same mergeable value. Only right and down neighbours are
/// compared; together they cover every adjacent pair.
pub fn has_moves(grid: &Grid) -> bool {
    if !grid.is_full() {
        return true;
    }

    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            let v = grid.get(row, col);
            if !can_merge(v) {
                continue;
            }
            if col + 1 < size && grid.get(row, col + 1) == v {
                return true;
            }
            if row + 1 < size && grid.get(row + 1, col) == v {
                return true;
            }
        }
    }
    false
}
