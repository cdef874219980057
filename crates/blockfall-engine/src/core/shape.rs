use std::fmt;

/// Largest bounding box side a shape may have.
pub const MAX_SHAPE_SIZE: usize = 5;

/// A single cell of the board or of a shape mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Cell {
    #[default]
    Empty,
    /// Occupied by a piece, carrying the symbol the piece is drawn with.
    Filled(char),
}

impl Cell {
    /// Returns the symbol of a filled cell, or a space for an empty one.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Filled(symbol) => symbol,
        }
    }
}

/// A piece shape: a mask inside a bounding box of at most 5×5 cells.
///
/// The mask is stored in a fixed-size buffer together with its active width and
/// height, so shapes are `Copy` and rotating one never allocates.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Cell, Shape};
///
/// let t = Shape::from_rows(&[" X ", "XXX"]);
/// let rotated = t.rotated();
/// assert_eq!((rotated.width(), rotated.height()), (2, 3));
/// assert_eq!(rotated.cell(1, 1), Cell::Filled('X'));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    width: u8,
    height: u8,
}

impl Shape {
    /// Builds a shape from its rows, top to bottom.
    ///
    /// Spaces are unoccupied sub-cells; any other character is occupied and is
    /// the symbol written into the board when the piece locks.
    ///
    /// # Panics
    ///
    /// Panics if there are no rows, rows differ in length, or the bounding box
    /// exceeds [`MAX_SHAPE_SIZE`] on either side.
    #[must_use]
    pub const fn from_rows(rows: &[&str]) -> Self {
        assert!(
            !rows.is_empty() && rows.len() <= MAX_SHAPE_SIZE,
            "shape height out of range"
        );
        let width = rows[0].len();
        assert!(
            width > 0 && width <= MAX_SHAPE_SIZE,
            "shape width out of range"
        );

        let mut cells = [[Cell::Empty; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < rows.len() {
            let row = rows[y].as_bytes();
            assert!(row.len() == width, "shape rows must have equal width");
            let mut x = 0;
            while x < width {
                if row[x] != b' ' {
                    cells[y][x] = Cell::Filled(row[x] as char);
                }
                x += 1;
            }
            y += 1;
        }

        #[expect(clippy::cast_possible_truncation)]
        let (width, height) = (width as u8, rows.len() as u8);
        Self {
            cells,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height as usize
    }

    /// Width and height as signed values, for anchor arithmetic.
    #[must_use]
    pub fn signed_size(&self) -> (i32, i32) {
        (i32::from(self.width), i32::from(self.height))
    }

    /// Returns the sub-cell at column `x`, row `y` of the bounding box.
    #[must_use]
    pub const fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    /// Iterates over the occupied sub-cells as `(x, y, symbol)`.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.cells[..self.height()]
            .iter()
            .enumerate()
            .flat_map(move |(y, row)| {
                row[..self.width()]
                    .iter()
                    .enumerate()
                    .filter_map(move |(x, cell)| match cell {
                        Cell::Empty => None,
                        Cell::Filled(symbol) => Some((x, y, *symbol)),
                    })
            })
    }

    /// Returns the shape turned a quarter clockwise.
    ///
    /// Row `r` of the result is column `r` of this shape read bottom to top,
    /// so the width and height swap.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut cells = [[Cell::Empty; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let (width, height) = (self.width(), self.height());
        for (row, new_row) in cells.iter_mut().enumerate().take(width) {
            for (col, new_cell) in new_row.iter_mut().enumerate().take(height) {
                *new_cell = self.cells[height - 1 - col][row];
            }
        }
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self.cells[..self.height()]
            .iter()
            .map(|row| row[..self.width()].iter().map(|c| c.symbol()).collect())
            .collect();
        f.debug_tuple("Shape").field(&rows).finish()
    }
}

/// The piece catalog, indexed by shape id.
pub const SHAPES: [Shape; 6] = [
    Shape::from_rows(&["##", "##"]),
    Shape::from_rows(&[" X ", "XXX"]),
    Shape::from_rows(&["@@@@"]),
    Shape::from_rows(&["OO", "O ", "O "]),
    Shape::from_rows(&["&&", " &", " &"]),
    Shape::from_rows(&["ZZ ", " ZZ"]),
];
