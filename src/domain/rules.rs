//! Generation advance for the bounded board.
//!
//! Both entry points read only the current grid and write into a fresh
//! buffer, so no cell ever sees a neighbour from the generation being built.

use super::{CellState, Grid};
use rayon::prelude::*;

/// Boards at least this wide are advanced with rayon.
pub const PARALLEL_THRESHOLD: usize = 256;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Count active neighbours of (row, col). Off-board neighbours don't count;
/// there is no wraparound.
pub fn count_active_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (r, c) = (row as isize, col as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| grid.is_active_at(r + dr, c + dc))
        .count() as u8
}

fn next_state(grid: &Grid, row: usize, col: usize) -> CellState {
    let current = CellState::from(grid.is_active_at(row as isize, col as isize));
    current.evolve(count_active_neighbors(grid, row, col))
}

/// Serial evolution - returns the next generation
pub fn next_generation(grid: &Grid) -> Grid {
    let n = grid.size();
    let cells = (0..n)
        .flat_map(|row| (0..n).map(move |col| (row, col)))
        .map(|(row, col)| next_state(grid, row, col))
        .collect();
    Grid::from_cells(n, cells)
}

/// Parallel evolution, one rayon task per row.
/// Produces exactly the same board as [`next_generation`].
pub fn next_generation_parallel(grid: &Grid) -> Grid {
    let n = grid.size();
    let mut cells = vec![CellState::Inactive; n * n];
    if n > 0 {
        cells
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(row, out)| {
                out.iter_mut()
                    .enumerate()
                    .for_each(|(col, cell)| *cell = next_state(grid, row, col));
            });
    }
    Grid::from_cells(n, cells)
}

/// Pick serial or parallel evolution based on board size
pub fn advance(grid: &Grid) -> Grid {
    if grid.size() >= PARALLEL_THRESHOLD {
        next_generation_parallel(grid)
    } else {
        next_generation(grid)
    }
}
