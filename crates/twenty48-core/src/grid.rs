//! Square grid of tiles.

use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::constants::{MAX_GRID_SIZE, MAX_TILE, MIN_GRID_SIZE};
use crate::direction::Direction;
use crate::error::{GameError, Result};
use crate::types::{Score, Tile};

/// Cell indices of one row or column, listed in travel order.
pub type LineIndices = ArrayVec<usize, MAX_GRID_SIZE>;

/// A fixed-size square grid stored row-major.
///
/// The grid is indexed as follows for `size == 4`:
///
/// ```text
///  0  1  2  3
///  4  5  6  7
///  8  9 10 11
/// 12 13 14 15
/// ```
///
/// Every non-zero cell holds a power of two no smaller than 2.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Creates an empty grid of `size * size` cells.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] when `size` is outside
    /// `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    pub fn new(size: usize) -> Result<Grid> {
        check_size(size)?;
        Ok(Grid {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Creates a grid from row-major cell values.
    ///
    /// # Errors
    ///
    /// Fails on an invalid size, a cell count other than `size * size`, or a
    /// non-zero value that is not a power of two >= 2.
    pub fn from_cells(size: usize, cells: Vec<Tile>) -> Result<Grid> {
        check_size(size)?;
        if cells.len() != size * size {
            return Err(GameError::CellCountMismatch {
                expected: size * size,
                got: cells.len(),
            });
        }
        if let Some((index, &value)) = cells
            .iter()
            .enumerate()
            .find(|&(_, &v)| v != 0 && !is_valid_tile(v))
        {
            return Err(GameError::InvalidTile { index, value });
        }
        Ok(Grid { size, cells })
    }

    /// Length of one edge.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cell values.
    #[inline]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Converts a `(row, col)` pair to a cell index.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    /// Returns the tile at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub(crate) fn set(&mut self, index: usize, value: Tile) {
        self.cells[index] = value;
    }

    /// Indices of all empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| (v == 0).then_some(i))
            .collect()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Largest tile on the grid, `0` for an empty grid.
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> Score {
        self.cells.iter().map(|&v| Score::from(v)).sum()
    }

    /// Cell indices of line `i` in the order tiles travel for `direction`.
    ///
    /// Rows are used for left/right and columns for up/down. The first index
    /// is the cell at the edge tiles slide towards.
    pub fn line(&self, direction: Direction, i: usize) -> LineIndices {
        debug_assert!(i < self.size);
        let mut indices: LineIndices = (0..self.size)
            .map(|j| {
                if direction.is_horizontal() {
                    i * self.size + j
                } else {
                    j * self.size + i
                }
            })
            .collect();
        if direction.is_reversed() {
            indices.reverse();
        }
        indices
    }
}

/// Returns `true` for values a non-empty cell may hold.
#[inline]
pub fn is_valid_tile(value: Tile) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// Returns `true` if two tiles of `value` combine when they meet.
#[inline]
pub fn can_merge(value: Tile) -> bool {
    value != 0 && value < MAX_TILE
}

fn check_size(size: usize) -> Result<()> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GameError::InvalidSize(size))
    }
}

impl FromStr for Grid {
    type Err = GameError;

    /// Parses rows separated by `/` or newlines, cells separated by
    /// whitespace. Empty cells are written as `.` or `0`.
    ///
    /// ```
    /// use twenty48_core::Grid;
    ///
    /// let grid: Grid = "2 2 . . / . . . . / . . . . / . . . 4".parse().unwrap();
    /// assert_eq!(grid.size(), 4);
    /// assert_eq!(grid.get(3, 3), 4);
    /// ```
    fn from_str(s: &str) -> Result<Grid> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        let size = rows.len();

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let before = cells.len();
            for token in row.split_whitespace() {
                let value = match token {
                    "." => 0,
                    _ => token.parse::<Tile>().map_err(|_| {
                        GameError::MalformedGrid(format!("bad cell '{token}' in row {}", r + 1))
                    })?,
                };
                cells.push(value);
            }
            let width = cells.len() - before;
            if width != size {
                return Err(GameError::MalformedGrid(format!(
                    "row {} has {width} cells, expected {size}",
                    r + 1
                )));
            }
        }

        Grid::from_cells(size, cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &v) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if v == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{v:>width$}")?;
                }
            }
        }
        Ok(())
    }
}
