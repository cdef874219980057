use serde::{Deserialize, Serialize};

use crate::BoardSizeError;

use super::shape::Cell;

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardSize {
    pub width: u16,
    pub height: u16,
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            width: 10,
            height: 20,
        }
    }
}

impl BoardSize {
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// The grid of locked cells.
///
/// Cells are stored in one contiguous row-major buffer (`y * width + x`).
/// Coordinates grow right (`x`) and down (`y`), with `(0, 0)` at the top left.
/// The board itself does no bounds checking beyond slice indexing; the engine
/// only hands it coordinates it has already validated.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, BoardSize, Cell};
///
/// let mut board = Board::new(BoardSize::new(4, 3)).unwrap();
/// board.set(1, 2, Cell::Filled('#'));
/// assert!(board.cell(1, 2).is_filled());
/// assert!(board.cell(0, 0).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Allocates an empty board.
    pub fn new(size: BoardSize) -> Result<Self, BoardSizeError> {
        if size.width == 0 {
            return Err(BoardSizeError::ZeroWidth);
        }
        if size.height == 0 {
            return Err(BoardSizeError::ZeroHeight);
        }
        let len = usize::from(size.width) * usize::from(size.height);
        Ok(Self {
            size,
            cells: vec![Cell::Empty; len],
        })
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> usize {
        usize::from(self.size.width)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        usize::from(self.size.height)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width() && y < self.height(), "({x}, {y}) out of board");
        y * self.width() + x
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_filled()
    }

    /// Returns row `y`, left to right.
    #[must_use]
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width();
        &self.cells[start..start + self.width()]
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width())
    }

    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).iter().all(|cell| cell.is_filled())
    }

    /// Removes row `y` by shifting every row above it down by one.
    ///
    /// Row 0 is left empty afterwards.
    pub fn collapse_row(&mut self, y: usize) {
        let width = self.width();
        self.cells.copy_within(..y * width, width);
        self.cells[..width].fill(Cell::Empty);
    }

    /// Number of filled cells on the board.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }
}
