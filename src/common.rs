//! Common types for Minefield: grid construction and generation errors.

/// Errors returned by grid construction and field generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's length.
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// More mines requested than the field has cells.
    TooManyMines { requested: usize, capacity: usize },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::RaggedRow {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "RaggedRow: row {} has length {}, expected {}",
                    row, actual, expected
                )
            }
            GridError::TooManyMines {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "TooManyMines: requested {}, field holds at most {}",
                    requested, capacity
                )
            }
        }
    }
}
