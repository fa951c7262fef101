//! Static unit and peer structure of the 9×9 board.

use crate::cell::Cell;

/// One Sudoku unit: a row, a column, or a 3×3 box.
///
/// There are 27 units in total; every cell belongs to exactly three of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A row identified by its row index (0-8).
    Row(u8),
    /// A column identified by its column index (0-8).
    Column(u8),
    /// A 3×3 box identified by its index (0-8, row-major over the box grid).
    Box(u8),
}

impl Unit {
    /// All 27 units in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row(i as u8);
            all[i + 9] = Self::Column(i as u8);
            all[i + 18] = Self::Box(i as u8);
            i += 1;
        }
        all
    };

    /// Returns the 9 cells of this unit in traversal order.
    #[must_use]
    pub fn cells(self) -> [Cell; 9] {
        std::array::from_fn(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            match self {
                Self::Row(row) => Cell::new(row, i),
                Self::Column(col) => Cell::new(i, col),
                Self::Box(index) => Cell::new(index / 3 * 3 + i / 3, index % 3 * 3 + i % 3),
            }
        })
    }

    /// Returns `true` if `cell` is a member of this unit.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        match self {
            Self::Row(row) => cell.row() == row,
            Self::Column(col) => cell.col() == col,
            Self::Box(index) => cell.box_index() == index,
        }
    }
}

/// Precomputed unit and peer structure of the 9×9 board.
///
/// For every cell this stores the three units containing it and its peer set:
/// the 20 other cells sharing at least one unit with it. The structure is
/// derived purely from the board geometry; build it once with
/// [`Topology::new`] and share it by reference with whatever consumes it.
///
/// # Examples
///
/// ```
/// use sudofix_core::{Cell, Topology, Unit};
///
/// let topology = Topology::new();
/// let cell = Cell::new(0, 0);
///
/// assert_eq!(topology.units_of(cell), &[Unit::Row(0), Unit::Column(0), Unit::Box(0)]);
/// assert_eq!(topology.peers_of(cell).len(), 20);
/// assert_eq!(topology.units().len(), 27);
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    units_of: [[Unit; 3]; 81],
    peers_of: [[Cell; 20]; 81],
}

impl Topology {
    /// Builds the unit and peer structure for the standard 9×9 board.
    #[must_use]
    pub fn new() -> Self {
        let mut units_of = [[Unit::Row(0); 3]; 81];
        let mut peers_of = [[Cell::from_index(0); 20]; 81];

        for cell in Cell::all() {
            let units = [
                Unit::Row(cell.row()),
                Unit::Column(cell.col()),
                Unit::Box(cell.box_index()),
            ];
            units_of[cell.index()] = units;

            let mut seen = [false; 81];
            let mut count = 0;
            for unit in units {
                for peer in unit.cells() {
                    if peer != cell && !seen[peer.index()] {
                        seen[peer.index()] = true;
                        peers_of[cell.index()][count] = peer;
                        count += 1;
                    }
                }
            }
            assert_eq!(count, 20);
        }

        Self { units_of, peers_of }
    }

    /// Returns all 27 units.
    #[must_use]
    pub fn units(&self) -> &[Unit; 27] {
        &Unit::ALL
    }

    /// Returns the three units (row, column, box) containing `cell`.
    #[must_use]
    pub fn units_of(&self, cell: Cell) -> &[Unit; 3] {
        &self.units_of[cell.index()]
    }

    /// Returns the 20 cells sharing at least one unit with `cell`.
    #[must_use]
    pub fn peers_of(&self, cell: Cell) -> &[Cell; 20] {
        &self.peers_of[cell.index()]
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}
