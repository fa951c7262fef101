//! Candidate state for all 81 cells, plus the solved-state queries.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet};

/// The character that marks an unknown cell in a puzzle string.
pub const PLACEHOLDER: char = '.';

/// Error returned when a puzzle string cannot be parsed into a [`Grid`].
///
/// Parsing only validates the shape of the input. A well-formed string with
/// contradictory givens is accepted and will be driven to a contradicted
/// state by the solver instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The input was not exactly 81 characters long.
    #[display("puzzle string must be 81 characters, got {len}")]
    InvalidLength {
        /// Actual length of the input in characters.
        len: usize,
    },
    /// The input contained a character that is neither a digit 1-9 nor the
    /// placeholder.
    #[display("invalid character {ch:?} at position {index}")]
    InvalidChar {
        /// Row-major position of the offending character.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

/// Snapshot of a grid's standing, as reported by the solved-state queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GridStatus {
    /// Every cell holds exactly one candidate.
    Solved,
    /// Some cells hold several candidates and none is empty.
    Unresolved,
    /// At least one cell has run out of candidates.
    Contradicted,
}

/// The mapping from every cell to its current candidate set.
///
/// A grid is created from an 81-character puzzle string (digits `1`-`9` for
/// givens, `.` for unknowns, row-major from `A1` to `I9`) and mutated only by
/// shrinking candidate sets. During valid execution no set ever becomes empty;
/// an empty set means the grid is contradicted.
///
/// # Examples
///
/// ```
/// use sudofix_core::{Cell, Digit, Grid};
///
/// let puzzle = format!("4{}", ".".repeat(80));
/// let grid: Grid = puzzle.parse()?;
///
/// assert_eq!(grid.candidates(Cell::new(0, 0)).as_single(), Some(Digit::D4));
/// assert_eq!(grid.candidates(Cell::new(0, 1)).len(), 9);
/// assert_eq!(grid.solved_count(), 1);
/// assert_eq!(grid.unsolved_count(), 80);
/// # Ok::<(), sudofix_core::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [DigitSet; Cell::COUNT],
}

impl Grid {
    /// Creates a grid with every candidate open in every cell (an empty
    /// puzzle).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; Cell::COUNT],
        }
    }

    /// Returns the candidate set of `cell`.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Replaces the candidate set of `cell`.
    pub fn set_candidates(&mut self, cell: Cell, candidates: DigitSet) {
        self.cells[cell.index()] = candidates;
    }

    /// Removes `digit` from the candidates of `cell`, returning `true` if it
    /// was present.
    pub fn remove_candidate(&mut self, cell: Cell, digit: Digit) -> bool {
        self.cells[cell.index()].remove(digit)
    }

    /// Collapses `cell` to the singleton `{digit}`.
    pub fn place(&mut self, cell: Cell, digit: Digit) {
        self.cells[cell.index()] = DigitSet::from_elem(digit);
    }

    /// Returns an iterator over all cells and their candidate sets in
    /// row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (Cell, DigitSet)> {
        Cell::all().map(|cell| (cell, self.candidates(cell)))
    }

    /// Returns the number of cells holding exactly one candidate.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|set| set.len() == 1).count()
    }

    /// Returns the number of cells still holding more than one candidate (or
    /// none at all).
    #[must_use]
    pub fn unsolved_count(&self) -> usize {
        Cell::COUNT - self.solved_count()
    }

    /// Returns `true` if every cell holds exactly one candidate.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved_count() == Cell::COUNT
    }

    /// Returns `true` if some cell has run out of candidates.
    #[must_use]
    pub fn is_contradicted(&self) -> bool {
        self.cells.iter().any(|set| set.is_empty())
    }

    /// Classifies the grid. Contradiction takes precedence over everything
    /// else.
    #[must_use]
    pub fn status(&self) -> GridStatus {
        if self.is_contradicted() {
            GridStatus::Contradicted
        } else if self.is_solved() {
            GridStatus::Solved
        } else {
            GridStatus::Unresolved
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != Cell::COUNT {
            return Err(ParseError::InvalidLength { len });
        }

        let mut grid = Self::new();
        for (cell, (index, ch)) in Cell::all().zip(s.chars().enumerate()) {
            if let Some(digit) = Digit::from_char(ch) {
                grid.place(cell, digit);
            } else if ch != PLACEHOLDER {
                return Err(ParseError::InvalidChar { index, ch });
            }
        }
        Ok(grid)
    }
}

impl Display for Grid {
    /// Formats the grid as an 81-character string: solved cells render as
    /// their digit, everything else as the placeholder.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, candidates) in self.entries() {
            match candidates.as_single() {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "{PLACEHOLDER}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const EMPTY_PUZZLE: &str =
        ".................................................................................";

    #[test]
    fn test_parse_empty_puzzle() {
        let grid: Grid = EMPTY_PUZZLE.parse().unwrap();
        assert_eq!(grid, Grid::new());
        assert_eq!(grid.solved_count(), 0);
        assert_eq!(grid.unsolved_count(), 81);
        assert_eq!(grid.status(), GridStatus::Unresolved);
    }

    #[test]
    fn test_parse_givens() {
        let puzzle = format!("12{}", ".".repeat(79));
        let grid: Grid = puzzle.parse().unwrap();
        assert_eq!(grid.candidates(Cell::new(0, 0)), DigitSet::from_elem(Digit::D1));
        assert_eq!(grid.candidates(Cell::new(0, 1)), DigitSet::from_elem(Digit::D2));
        assert_eq!(grid.candidates(Cell::new(0, 2)), DigitSet::FULL);
        assert_eq!(grid.solved_count(), 2);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        for len in [0, 80, 82] {
            let input = ".".repeat(len);
            assert_eq!(
                input.parse::<Grid>(),
                Err(ParseError::InvalidLength { len }),
                "length {len} must be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_foreign_characters() {
        let puzzle = format!("{}x{}", ".".repeat(40), ".".repeat(40));
        assert_eq!(
            puzzle.parse::<Grid>(),
            Err(ParseError::InvalidChar { index: 40, ch: 'x' })
        );

        let puzzle = format!("0{}", ".".repeat(80));
        assert_eq!(
            puzzle.parse::<Grid>(),
            Err(ParseError::InvalidChar { index: 0, ch: '0' })
        );
    }

    #[test]
    fn test_contradictory_givens_are_accepted_by_the_parser() {
        // Two 1s in the same row are shape-valid; the solver is what turns
        // this into a contradicted state.
        let puzzle = format!("11{}", ".".repeat(79));
        let grid: Grid = puzzle.parse().unwrap();
        assert_eq!(grid.status(), GridStatus::Unresolved);
    }

    #[test]
    fn test_contradiction_detection() {
        let mut grid = Grid::new();
        grid.set_candidates(Cell::new(4, 4), DigitSet::EMPTY);
        assert!(grid.is_contradicted());
        assert_eq!(grid.status(), GridStatus::Contradicted);
    }

    #[test]
    fn test_solved_detection() {
        let mut grid = Grid::new();
        for cell in Cell::all() {
            grid.place(cell, Digit::D1);
        }
        assert!(grid.is_solved());
        assert_eq!(grid.status(), GridStatus::Solved);
        // Contradiction wins over solved-ness in classification.
        grid.set_candidates(Cell::new(0, 0), DigitSet::EMPTY);
        assert_eq!(grid.status(), GridStatus::Contradicted);
    }

    #[test]
    fn test_display_round_trip() {
        let puzzle = format!("9.8.7{}", ".".repeat(76));
        let grid: Grid = puzzle.parse().unwrap();
        assert_eq!(grid.to_string(), puzzle);
    }

    proptest! {
        #[test]
        fn prop_shape_valid_strings_parse(s in "[1-9.]{81}") {
            let grid: Grid = s.parse().unwrap();
            // Display reproduces the input: givens stay solved, dots stay open.
            prop_assert_eq!(grid.to_string(), s);
            prop_assert!(!grid.is_contradicted());
        }
    }
}
