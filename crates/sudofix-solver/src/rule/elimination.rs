use sudofix_core::{Cell, Digit, Grid, Topology};

use super::Rule;

const NAME: &str = "elimination";

/// Removes every solved cell's digit from the candidates of its 20 peers.
///
/// The rule works from a snapshot of the cells that were already solved when
/// the pass started. A cell that becomes solved mid-pass does not propagate
/// within the same pass; the next pass picks it up.
#[derive(Debug, Default, Clone, Copy)]
pub struct Elimination;

impl Elimination {
    /// Creates a new `Elimination` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for Elimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, grid: &mut Grid, topology: &Topology) -> bool {
        let solved: Vec<(Cell, Digit)> = grid
            .entries()
            .filter_map(|(cell, candidates)| candidates.as_single().map(|digit| (cell, digit)))
            .collect();

        let mut changed = false;
        for (cell, digit) in solved {
            for &peer in topology.peers_of(cell) {
                changed |= grid.remove_candidate(peer, digit);
            }
        }
        changed
    }
}
