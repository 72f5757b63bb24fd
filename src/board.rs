//! Display grid: one `CellValue` per cell, fixed dimensions.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{cell_count, BoardError, CellValue};

/// Per-cell display state of a game. Holds no mine information.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<CellValue>,
}

impl Board {
    /// Create a board with every cell `Unrevealed`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let cells = cell_count(rows, cols)?;
        Ok(Board {
            rows,
            cols,
            cells: vec![CellValue::Unrevealed; cells],
        })
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Display value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<CellValue, BoardError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrite the display value at (row, col). `Count(n)` must have
    /// `1 <= n <= 8`; zero adjacency is `Empty`.
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        if let CellValue::Count(count) = value {
            if !(1..=8).contains(&count) {
                return Err(BoardError::InvalidCount { row, col, count });
            }
        }
        self.cells[idx] = value;
        Ok(())
    }

    /// Number of cells that are no longer `Unrevealed`.
    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_revealed()).count()
    }

    /// All cells as `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellValue)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / cols, i % cols, v))
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.rows || col >= self.cols {
            Err(BoardError::OutOfBounds { row, col })
        } else {
            Ok(row * self.cols + col)
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ rows: {}, cols: {} }}", self.rows, self.cols)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
