use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use twenty48_core::terminal::has_moves;
use twenty48_core::transform::{slide_line, transform};
use twenty48_core::{Direction, Grid};

/// Builds a grid where each cell is empty or a small power of two.
fn random_grid(rng: &mut StdRng, size: usize) -> Grid {
    let cells = (0..size * size)
        .map(|_| match rng.random_range(0..6u32) {
            0 | 1 => 0,
            n => 1 << (n - 1),
        })
        .collect();
    Grid::from_cells(size, cells).unwrap()
}

#[test]
fn test_second_transform_is_a_noop() {
    let mut rng = StdRng::seed_from_u64(0x2048);
    for size in 2..=6 {
        for _ in 0..200 {
            let grid = random_grid(&mut rng, size);
            for dir in Direction::ALL {
                let once = transform(&grid, dir);
                let twice = transform(&once.grid, dir);
                assert!(!twice.changed, "{dir} on\n{grid}");
                assert_eq!(twice.score_gained, 0);
            }
        }
    }
}

#[test]
fn test_transform_conserves_tile_sum() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..500 {
        let grid = random_grid(&mut rng, 4);
        for dir in Direction::ALL {
            let result = transform(&grid, dir);
            assert_eq!(result.grid.tile_sum(), grid.tile_sum(), "{dir} on\n{grid}");
            // Every merge removes one tile and earns the merged value.
            let merges = grid.empty_count().abs_diff(result.grid.empty_count());
            assert_eq!(merges == 0, result.score_gained == 0);
        }
    }
}

#[test]
fn test_changed_matches_grid_inequality() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..500 {
        let grid = random_grid(&mut rng, 3);
        for dir in Direction::ALL {
            let result = transform(&grid, dir);
            assert_eq!(result.changed, result.grid != grid);
        }
    }
}

#[test]
fn test_merge_once_on_a_single_line() {
    let (line, gained) = slide_line(&[2, 2, 2, 2]);
    assert_eq!(line.as_slice(), &[4, 4, 0, 0]);
    assert_eq!(gained, 8);

    let grid: Grid = "2 2 2 2 / 0 0 0 0 / 0 0 0 0 / 0 0 0 0".parse().unwrap();
    let result = transform(&grid, Direction::Left);
    assert_eq!(&result.grid.cells()[..4], &[4, 4, 0, 0]);
    assert_eq!(result.score_gained, 8);

    let result = transform(&grid, Direction::Right);
    assert_eq!(&result.grid.cells()[..4], &[0, 0, 4, 4]);
    assert_eq!(result.score_gained, 8);
}

/// Exhaustive check over every 3x3 grid with cells drawn from {0, 2, 4, 8}.
#[test]
fn test_has_moves_exhaustive_3x3() {
    const VALUES: [u32; 4] = [0, 2, 4, 8];
    let total = VALUES.len().pow(9);

    for code in 0..total {
        let mut rest = code;
        let cells: Vec<u32> = (0..9)
            .map(|_| {
                let v = VALUES[rest % VALUES.len()];
                rest /= VALUES.len();
                v
            })
            .collect();
        let grid = Grid::from_cells(3, cells).unwrap();

        let any_change = Direction::ALL
            .iter()
            .any(|&dir| transform(&grid, dir).changed);
        assert_eq!(has_moves(&grid), any_change, "grid\n{grid}");
        if !has_moves(&grid) {
            assert!(grid.is_full());
        }
    }
}
