//! Common types for Minesweeper: cell values, reveal outcomes, game status and board errors.

use core::fmt;

use crate::mask::MaskError;

/// Display value of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Not yet exposed to the player.
    #[default]
    Unrevealed,
    /// Exposed mine.
    Mine,
    /// Revealed cell with no adjacent mines.
    Empty,
    /// Revealed cell with `1..=8` adjacent mines.
    Count(u8),
}

impl CellValue {
    /// Display value for a revealed safe cell with `adjacent` neighbouring mines.
    pub const fn from_adjacency(adjacent: u8) -> Self {
        if adjacent == 0 {
            CellValue::Empty
        } else {
            CellValue::Count(adjacent)
        }
    }

    /// Returns `true` once the cell has been exposed.
    pub const fn is_revealed(self) -> bool {
        !matches!(self, CellValue::Unrevealed)
    }

    /// Adjacent mine count of a revealed safe cell.
    pub const fn adjacency(self) -> Option<u8> {
        match self {
            CellValue::Empty => Some(0),
            CellValue::Count(n) => Some(n),
            _ => None,
        }
    }

    /// Single character used by text renderings.
    pub const fn symbol(self) -> char {
        match self {
            CellValue::Unrevealed => '.',
            CellValue::Mine => '*',
            CellValue::Empty => ' ',
            CellValue::Count(n) => match char::from_digit(n as u32, 10) {
                Some(ch) => ch,
                None => '?',
            },
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Result of a reveal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealOutcome {
    /// The game is already won or lost; nothing changed.
    Ignored,
    /// The cell was already exposed; nothing changed.
    AlreadyRevealed,
    /// The cell held a mine.
    Detonated,
    /// Safe cells were exposed, `revealed` of them including the target.
    Cleared { revealed: usize },
}

impl RevealOutcome {
    /// Returns `true` if the board changed.
    pub const fn changed_board(self) -> bool {
        matches!(self, RevealOutcome::Detonated | RevealOutcome::Cleared { .. })
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` accept no further reveals.
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Errors returned by Board, Model and Presenter operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Zero rows or zero columns.
    InvalidDimensions { rows: usize, cols: usize },
    /// Mine count leaves no safe cell.
    TooManyMines { mines: usize, cells: usize },
    /// `Count(n)` outside `1..=8`.
    InvalidCount { row: usize, col: usize, count: u8 },
}

/// Number of cells on a `rows × cols` grid. Zero or overflowing dimensions
/// are rejected.
pub fn cell_count(rows: usize, cols: usize) -> Result<usize, BoardError> {
    match rows.checked_mul(cols) {
        Some(cells) if cells > 0 => Ok(cells),
        _ => Err(BoardError::InvalidDimensions { rows, cols }),
    }
}

impl From<MaskError> for BoardError {
    fn from(err: MaskError) -> Self {
        match err {
            MaskError::InvalidGrid { rows, cols } => BoardError::InvalidDimensions { rows, cols },
            MaskError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "Board dimensions {}x{} must be positive and fit in memory", rows, cols)
            }
            BoardError::InvalidCount { row, col, count } => {
                write!(f, "Count({}) at ({}, {}) is outside 1..=8", count, row, col)
            }
            BoardError::TooManyMines { mines, cells } => write!(
                f,
                "{} mines do not fit on a board of {} cells with one safe cell",
                mines, cells
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
