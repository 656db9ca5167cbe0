//! Random tile insertion.

use log::trace;
use rand::Rng;

use crate::constants::SPAWN_TWO_PROBABILITY;
use crate::grid::Grid;
use crate::types::Tile;

/// A tile placed by [`spawn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spawn {
    /// Row-major cell index.
    pub index: usize,
    /// Value written into the cell, 2 or 4.
    pub value: Tile,
}

impl Spawn {
    /// Row of the spawned tile on a grid with edge `size`.
    #[inline]
    pub fn row(&self, size: usize) -> usize {
        self.index / size
    }

    /// Column of the spawned tile on a grid with edge `size`.
    #[inline]
    pub fn col(&self, size: usize) -> usize {
        self.index % size
    }
}

/// Places up to `count` new tiles on empty cells of `grid`.
///
/// Each tile goes to a cell chosen uniformly among the cells that are empty
/// at that moment and is a 2 with probability [`SPAWN_TWO_PROBABILITY`],
/// otherwise a 4. Stops early, without error, once the grid is full.
///
/// # Returns
///
/// The placed tiles in insertion order.
pub fn spawn<R: Rng>(grid: &mut Grid, count: usize, rng: &mut R) -> Vec<Spawn> {
    let mut spawned = Vec::with_capacity(count);
    for _ in 0..count {
        let empty = grid.empty_cells();
        if empty.is_empty() {
            break;
        }
        let index = empty[rng.random_range(0..empty.len())];
        let value = random_tile(rng);
        grid.set(index, value);
        trace!("spawned {value} at cell {index}");
        spawned.push(Spawn { index, value });
    }
    spawned
}

fn random_tile<R: Rng>(rng: &mut R) -> Tile {
    if rng.random::<f64>() < SPAWN_TWO_PROBABILITY {
        2
    } else {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_into_empty_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(4).unwrap();
        let spawned = spawn(&mut grid, 2, &mut rng);

        assert_eq!(spawned.len(), 2);
        assert_ne!(spawned[0].index, spawned[1].index);
        assert_eq!(grid.empty_count(), 14);
        for s in &spawned {
            assert!(s.value == 2 || s.value == 4);
            assert_eq!(grid.cells()[s.index], s.value);
        }
    }

    #[test]
    fn test_spawn_only_fills_empty_cells() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut grid: Grid = "2 4 / 0 8".parse().unwrap();
        let spawned = spawn(&mut grid, 1, &mut rng);

        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].index, 2);
        assert_eq!(spawned[0].row(2), 1);
        assert_eq!(spawned[0].col(2), 0);
        assert_eq!(grid.get(0, 0), 2);
        assert_eq!(grid.get(0, 1), 4);
        assert_eq!(grid.get(1, 1), 8);
    }

    #[test]
    fn test_spawn_stops_when_full() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid: Grid = "2 0 / 8 16".parse().unwrap();
        let spawned = spawn(&mut grid, 5, &mut rng);
        assert_eq!(spawned.len(), 1);
        assert!(grid.is_full());

        let again = spawn(&mut grid, 1, &mut rng);
        assert!(again.is_empty());
    }

    #[test]
    fn test_spawn_is_deterministic_for_a_seed() {
        let mut a = Grid::new(4).unwrap();
        let mut b = Grid::new(4).unwrap();
        let sa = spawn(&mut a, 8, &mut StdRng::seed_from_u64(42));
        let sb = spawn(&mut b, 8, &mut StdRng::seed_from_u64(42));
        assert_eq!(sa, sb);
        assert_eq!(a, b);
    }

    #[test]
    fn test_value_distribution() {
        let mut rng = StdRng::seed_from_u64(2024);
        let fours = (0..10_000).filter(|_| random_tile(&mut rng) == 4).count();
        // Expected 1000; allow a wide margin.
        assert!((700..1300).contains(&fours), "fours = {fours}");
    }
}
