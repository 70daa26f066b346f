//! Random field generation.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::common::GridError;
use crate::grid::{Cell, Grid};

/// Generate an `nrows` x `ncols` field with exactly `nmines` mines placed
/// uniformly at random.
///
/// Walks the cells once in row-major order, picking each as a mine with
/// probability mines-left-to-place / cells-left-to-visit. Every set of
/// `nmines` cells is equally likely. Returns `Err(TooManyMines)` when
/// `nmines` exceeds the cell count.
pub fn random_field<R: Rng>(
    rng: &mut R,
    nrows: usize,
    ncols: usize,
    nmines: usize,
) -> Result<Grid, GridError> {
    let ncells = nrows * ncols;
    if nmines > ncells {
        return Err(GridError::TooManyMines {
            requested: nmines,
            capacity: ncells,
        });
    }
    let mut left_to_place = nmines;
    let mut left_to_visit = ncells;
    let mut cells: Vec<Vec<Cell>> = Vec::with_capacity(nrows);
    for _ in 0..nrows {
        let mut row = Vec::with_capacity(ncols);
        for _ in 0..ncols {
            // left_to_place <= left_to_visit holds throughout, so the
            // probability never exceeds 1.
            if left_to_place > 0
                && rng.random_bool(left_to_place as f64 / left_to_visit as f64)
            {
                row.push(Cell::Mine);
                left_to_place -= 1;
            } else {
                row.push(Cell::Empty);
            }
            left_to_visit -= 1;
        }
        cells.push(row);
    }
    Grid::from_cells(cells)
}

/// Generate a field using the thread-local RNG.
#[cfg(feature = "std")]
pub fn random_field_thread(
    nrows: usize,
    ncols: usize,
    nmines: usize,
) -> Result<Grid, GridError> {
    random_field(&mut rand::rng(), nrows, ncols, nmines)
}
