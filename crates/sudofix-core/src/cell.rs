//! Board positions on the 9×9 grid.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// Rows run 0-8 top to bottom and are labeled `A`-`I`; columns run 0-8 left
/// to right and are labeled `1`-`9`. Cells are totally ordered by row-major
/// traversal, matching the order of characters in a puzzle string.
///
/// # Examples
///
/// ```
/// use sudofix_core::Cell;
///
/// let cell = Cell::new(0, 0);
/// assert_eq!(cell.to_string(), "A1");
/// assert_eq!(cell.index(), 0);
///
/// let last = Cell::from_index(80);
/// assert_eq!(last.to_string(), "I9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Number of cells on the board.
    pub const COUNT: usize = 81;

    /// Creates a cell from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a cell from its row-major index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self {
            row: index / 9,
            col: index % 9,
        }
    }

    /// Returns the row-major index of this cell (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row * 9 + self.col) as usize
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3×3 box containing this cell (0-8, row-major
    /// over the box grid).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }

    /// Returns an iterator over all 81 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_index)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + self.row) as char;
        let col = self.col + 1;
        write!(f, "{row}{col}")
    }
}
