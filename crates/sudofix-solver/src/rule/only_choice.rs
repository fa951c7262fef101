use sudofix_core::{Digit, Grid, Topology};

use super::Rule;

const NAME: &str = "only choice";

/// Collapses a cell to a digit that fits nowhere else in one of its units.
///
/// For every unit and every digit, if exactly one cell of the unit still
/// admits the digit, that cell is set to the singleton — even if it had
/// several other candidates left.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice;

impl OnlyChoice {
    /// Creates a new `OnlyChoice` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for OnlyChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, grid: &mut Grid, topology: &Topology) -> bool {
        let mut changed = false;
        for &unit in topology.units() {
            for digit in Digit::ALL {
                let mut admitting = unit.cells().into_iter().filter(|&cell| grid.candidates(cell).contains(digit));
                let (Some(cell), None) = (admitting.next(), admitting.next()) else {
                    continue;
                };
                if grid.candidates(cell).as_single() != Some(digit) {
                    grid.place(cell, digit);
                    changed = true;
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use sudofix_core::{Cell, DigitSet};

    use super::*;

    #[test]
    fn test_collapses_sole_position_in_row() {
        let topology = Topology::new();
        let mut grid = Grid::new();
        // Remove D5 from every cell of row 0 except A4, which keeps several
        // other candidates.
        for col in 0..9 {
            if col != 3 {
                grid.remove_candidate(Cell::new(0, col), Digit::D5);
            }
        }

        assert!(OnlyChoice::new().apply(&mut grid, &topology));
        assert_eq!(grid.candidates(Cell::new(0, 3)).as_single(), Some(Digit::D5));
    }

    #[test]
    fn test_collapses_sole_position_in_box() {
        let topology = Topology::new();
        let mut grid = Grid::new();
        // Remove D9 from every cell of the center box except E5.
        for row in 3..6 {
            for col in 3..6 {
                if (row, col) != (4, 4) {
                    grid.remove_candidate(Cell::new(row, col), Digit::D9);
                }
            }
        }

        assert!(OnlyChoice::new().apply(&mut grid, &topology));
        assert_eq!(grid.candidates(Cell::new(4, 4)).as_single(), Some(Digit::D9));
    }

    #[test]
    fn test_no_change_on_fresh_grid() {
        let topology = Topology::new();
        let mut grid = Grid::new();
        assert!(!OnlyChoice::new().apply(&mut grid, &topology));
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_already_solved_cell_is_not_reported_as_change() {
        let topology = Topology::new();
        let mut grid = Grid::new();
        // D5 already fixed at its only admitting position in row 0.
        for col in 1..9 {
            grid.remove_candidate(Cell::new(0, col), Digit::D5);
        }
        grid.place(Cell::new(0, 0), Digit::D5);
        let before = grid.clone();

        // Applying the rule twice from here must settle immediately.
        OnlyChoice::new().apply(&mut grid, &topology);
        let after_first = grid.clone();
        assert!(!OnlyChoice::new().apply(&mut grid, &topology));
        assert_eq!(grid, after_first);
        assert_eq!(grid.candidates(Cell::new(0, 0)), before.candidates(Cell::new(0, 0)));
    }

    #[test]
    fn test_digit_with_no_position_is_ignored() {
        let topology = Topology::new();
        let mut grid = Grid::new();
        // D1 admitted nowhere in row 0: the rule has nothing to collapse and
        // must not touch the rest of the grid.
        for col in 0..9 {
            grid.remove_candidate(Cell::new(0, col), Digit::D1);
        }
        let before = grid.clone();

        OnlyChoice::new().apply(&mut grid, &topology);
        for (cell, candidates) in grid.entries() {
            assert!(candidates.is_subset(before.candidates(cell)));
        }
    }

    #[test]
    fn test_never_grows_candidates() {
        let topology = Topology::new();
        let mut grid = Grid::new();
        for col in 1..9 {
            grid.set_candidates(
                Cell::new(0, col),
                DigitSet::FULL.difference(DigitSet::from_elem(Digit::D3)),
            );
        }
        let before = grid.clone();

        OnlyChoice::new().apply(&mut grid, &topology);
        for (cell, candidates) in grid.entries() {
            assert!(candidates.is_subset(before.candidates(cell)));
        }
    }
}
