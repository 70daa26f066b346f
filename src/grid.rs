//! Rectangular minefield grid: cells, parsing, bounds-checked access.
//!
//! The grid is alloc-only and `no_std` friendly. Rows are stored in
//! row-major order; the rectangular invariant is checked once at
//! construction so lookups never have to re-validate shape.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

use crate::common::GridError;

/// Character marking a mine, in both input and annotated output.
pub const MINE_CHAR: char = '*';

/// A single cell of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Cell holding a mine.
    Mine,
    /// Cell holding no mine.
    Empty,
}

impl Cell {
    /// Classify an input character: `*` is a mine, anything else is empty.
    #[inline]
    pub fn from_char(c: char) -> Self {
        if c == MINE_CHAR {
            Cell::Mine
        } else {
            Cell::Empty
        }
    }

    /// Returns `true` for a mine cell.
    #[inline]
    pub fn is_mine(&self) -> bool {
        matches!(self, Cell::Mine)
    }
}

/// An immutable rectangular field of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from rows of cell characters.
    ///
    /// Returns `Err(RaggedRow)` when any row's length differs from the
    /// first row's. Zero rows and zero-length rows are both valid.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let cells = rows
            .iter()
            .map(|row| row.as_ref().chars().map(Cell::from_char).collect())
            .collect();
        Self::from_cells(cells)
    }

    /// Build a grid directly from cells, validating the rectangular invariant.
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        if let Some(first) = cells.first() {
            let expected = first.len();
            for (row, cells_in_row) in cells.iter().enumerate() {
                if cells_in_row.len() != expected {
                    return Err(GridError::RaggedRow {
                        row,
                        expected,
                        actual: cells_in_row.len(),
                    });
                }
            }
        }
        Ok(Grid { cells })
    }

    /// Number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (`0` for a grid with no rows).
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Cell at (`row`, `col`), or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns `true` when (`row`, `col`) is in bounds and holds a mine.
    #[inline]
    pub fn is_mine(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Mine))
    }

    /// Total number of mines on the field.
    pub fn num_mines(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|c| c.is_mine()).count())
            .sum()
    }

    /// Iterator over the rows of the field.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                let ch = if cell.is_mine() { MINE_CHAR } else { ' ' };
                write!(f, "{}", ch)?;
            }
            if r + 1 < self.cells.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
