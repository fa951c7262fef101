//! Constraint-propagation solver for 9×9 Sudoku grids.
//!
//! The solver applies two deterministic local-inference rules — [`rule::Elimination`]
//! and [`rule::OnlyChoice`] — to a fixed point. It performs no search or
//! backtracking: a run ends in one of three terminal states, reported as a
//! value rather than an error.
//!
//! - [`Outcome::Solved`]: every cell was reduced to a single candidate
//! - [`Outcome::Stalled`]: a fixed point was reached with unsolved cells left
//! - [`Outcome::Contradicted`]: some cell lost all of its candidates
//!
//! # Examples
//!
//! ```
//! use sudofix_core::Grid;
//! use sudofix_solver::{EXAMPLE_PUZZLE, Engine, Outcome};
//!
//! let engine = Engine::new();
//! let mut grid: Grid = EXAMPLE_PUZZLE.parse()?;
//!
//! assert_eq!(engine.solve(&mut grid), Outcome::Solved);
//! assert!(grid.is_solved());
//! # Ok::<(), sudofix_core::ParseError>(())
//! ```

pub use self::engine::*;

mod engine;
pub mod rule;

/// A classic puzzle that propagation alone fully solves, used as the default
/// input of the command-line front end.
pub const EXAMPLE_PUZZLE: &str =
    "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
