//! Mine-adjacency annotation.
//!
//! Replaces each empty cell of a field with the number of mines among its
//! up-to-8 neighbors, or a blank when that number is zero. Mines pass
//! through unchanged. The computation is pure: the input grid is read-only
//! and each cell's annotation depends only on its own neighborhood.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use core::fmt;

use crate::common::GridError;
use crate::grid::{Grid, MINE_CHAR};

/// The eight (row, col) offsets of a cell's neighbors.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Annotation of a single output cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Annotation {
    /// A mine, rendered as itself.
    Mine,
    /// An empty cell with no adjacent mines, rendered as a space.
    Clear,
    /// An empty cell with 1 to 8 adjacent mines, rendered as a digit.
    Adjacent(u8),
}

impl Annotation {
    /// Output character for this annotation.
    pub fn as_char(&self) -> char {
        match self {
            Annotation::Mine => MINE_CHAR,
            Annotation::Clear => ' ',
            Annotation::Adjacent(n) => (b'0' + n) as char,
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Grid {
    /// Count the mines among the in-bounds neighbors of (`row`, `col`).
    ///
    /// Out-of-bounds neighbors count as no mine; edge and corner cells
    /// simply see fewer candidates. The same bounds test covers all eight
    /// directions.
    pub fn adjacent_mines(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r < 0 || c < 0 {
                continue;
            }
            if self.is_mine(r as usize, c as usize) {
                count += 1;
            }
        }
        count
    }

    /// Annotation for the cell at (`row`, `col`).
    pub fn annotation(&self, row: usize, col: usize) -> Annotation {
        if self.is_mine(row, col) {
            return Annotation::Mine;
        }
        match self.adjacent_mines(row, col) {
            0 => Annotation::Clear,
            n => Annotation::Adjacent(n),
        }
    }
}

/// Annotate a field, producing one `Annotation` per cell in row-major
/// order. The result has the same shape as the input.
pub fn annotate(grid: &Grid) -> Vec<Vec<Annotation>> {
    (0..grid.num_rows())
        .map(|r| (0..grid.num_cols()).map(|c| grid.annotation(r, c)).collect())
        .collect()
}

/// Parse, annotate, and render in one call.
///
/// This is the string-level interface: one input string per row, `*` for a
/// mine, any other character for an empty cell; one output string per row
/// over the alphabet `*`, `' '`, `'1'..='8'`. Ragged input fails fast with
/// `RaggedRow` rather than producing a misshapen result.
pub fn annotate_rows<S: AsRef<str>>(rows: &[S]) -> Result<Vec<String>, GridError> {
    let grid = Grid::parse(rows)?;
    Ok(annotate(&grid)
        .iter()
        .map(|row| row.iter().map(Annotation::as_char).collect())
        .collect())
}
