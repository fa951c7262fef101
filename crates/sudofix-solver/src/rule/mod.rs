//! Local inference rules applied by the propagation engine.

pub use self::{elimination::Elimination, only_choice::OnlyChoice};

use std::fmt::Debug;

use sudofix_core::{Grid, Topology};

mod elimination;
mod only_choice;

/// A deterministic local-inference rule.
///
/// Rules mutate the grid in place and report whether anything changed. A rule
/// application only ever shrinks candidate sets; it never reintroduces a
/// digit.
pub trait Rule: Debug + Send + Sync {
    /// Human-readable rule name, used in statistics and logs.
    fn name(&self) -> &'static str;

    /// Applies the rule once across the whole grid.
    ///
    /// Returns `true` if any candidate set changed.
    fn apply(&self, grid: &mut Grid, topology: &Topology) -> bool;
}

/// A heap-allocated rule trait object.
pub type BoxedRule = Box<dyn Rule>;

/// Returns the standard rule ordering: elimination first, then only-choice.
///
/// The engine applies each rule exactly once per step, in this order.
#[must_use]
pub fn standard_rules() -> Vec<BoxedRule> {
    vec![Box::new(Elimination::new()), Box::new(OnlyChoice::new())]
}
