use super::{Cell, DeathPolicy};
use rand::Rng;
use rayon::prelude::*;

/// Moore neighborhood offsets as (row, col)
#[rustfmt::skip]
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid is the square N×N board, addressed row first.
/// Every transition returns a new grid; the input is never touched.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside the {0}x{0} grid",
            self.size
        );
    }

    /// Get cell at position. Out-of-range coordinates panic.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.check_bounds(row, col);
        self.cells[self.index(row, col)]
    }

    /// Get cell at signed position, `None` off the board
    pub fn try_get(&self, row: isize, col: isize) -> Option<Cell> {
        let in_range = |v: isize| v >= 0 && (v as usize) < self.size;
        (in_range(row) && in_range(col))
            .then(|| self.cells[self.index(row as usize, col as usize)])
    }

    /// Return a copy of this grid with one cell replaced
    pub fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Self {
        self.check_bounds(row, col);
        let mut next = self.clone();
        let idx = next.index(row, col);
        next.cells[idx] = cell;
        next
    }

    /// Count live neighbors. The board does not wrap: positions past an
    /// edge contribute nothing.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.check_bounds(row, col);
        NEIGHBORS
            .iter()
            .filter_map(|&(dr, dc)| self.try_get(row as isize + dr, col as isize + dc))
            .filter(|cell| cell.counts_as_neighbor())
            .count() as u8
    }

    fn next_cell(&self, row: usize, col: usize, policy: DeathPolicy) -> Cell {
        let neighbors = self.count_live_neighbors(row, col);
        self.cells[self.index(row, col)].evolve(neighbors, policy)
    }

    /// Compute the next generation (serial). All counts are read from `self`.
    pub fn step(&self, policy: DeathPolicy) -> Self {
        let cells = (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col, policy))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Compute the next generation with rows spread over the rayon pool.
    /// Produces exactly the same grid as `step`.
    pub fn step_parallel(&self, policy: DeathPolicy) -> Self {
        let cells: Vec<Cell> = (0..self.size)
            .into_par_iter()
            .flat_map_iter(|row| (0..self.size).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col, policy))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Copy with every Dying cell cleared to Dead
    pub fn purged(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.iter().map(|cell| cell.purge()).collect(),
        }
    }

    /// Fresh grid where each cell is alive with probability `density`
    pub fn random<R: Rng>(size: usize, density: f64, rng: &mut R) -> Self {
        let mut grid = Self::new(size);
        grid.cells.iter_mut().for_each(|cell| {
            if rng.random_bool(density) {
                *cell = Cell::Alive;
            }
        });
        grid
    }

    /// Number of Alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True when no cell is Alive or Dying
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::Dead)
    }

    /// Iterate over all cells as (row, col, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.size, idx % self.size, cell))
    }
}
