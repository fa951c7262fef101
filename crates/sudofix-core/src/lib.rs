//! Core data structures for the sudofix constraint-propagation engine.
//!
//! This crate provides the static and mutable state of a 9×9 Sudoku puzzle:
//!
//! - [`digit`]: type-safe representation of the digits 1-9
//! - [`cell`]: board positions with row-letter/column-digit labels (`A1`..`I9`)
//! - [`digit_set`]: per-cell candidate sets, stored as 9-bit masks
//! - [`topology`]: the 27 units (rows, columns, boxes) and the 20-member peer
//!   set of every cell, precomputed once and shared by reference
//! - [`grid`]: the cell → candidate-set mapping, parsed from an 81-character
//!   puzzle string, together with the solved/stalled/contradicted queries the
//!   solver's termination test is built on
//!
//! The inference rules themselves live in the `sudofix-solver` crate; this
//! crate only knows how to represent state and answer questions about it.
//!
//! # Examples
//!
//! ```
//! use sudofix_core::{Cell, Digit, Grid, Topology};
//!
//! let topology = Topology::new();
//! let grid: Grid = format!("5{}", ".".repeat(80)).parse()?;
//!
//! // The given cell is solved, every other cell is wide open.
//! assert_eq!(grid.candidates(Cell::new(0, 0)).as_single(), Some(Digit::D5));
//! assert_eq!(grid.solved_count(), 1);
//!
//! // Peers of A1 are the 20 cells sharing its row, column, or box.
//! assert_eq!(topology.peers_of(Cell::new(0, 0)).len(), 20);
//! # Ok::<(), sudofix_core::ParseError>(())
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod topology;

pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, GridStatus, PLACEHOLDER, ParseError},
    topology::{Topology, Unit},
};
