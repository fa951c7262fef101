//! Fixed-point propagation engine.

use log::{debug, trace};
use sudofix_core::{Grid, Topology};

use crate::rule::{BoxedRule, standard_rules};

/// Terminal state of a propagation run.
///
/// All three are ordinary values, never errors: a contradicted grid is a
/// normal outcome of feeding contradictory givens to a deterministic engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Outcome {
    /// Every cell was reduced to a single candidate.
    #[display("solved")]
    Solved,
    /// A fixed point was reached with unsolved cells remaining. Search would
    /// be required to make further progress, and this engine does not search.
    #[display("stalled")]
    Stalled,
    /// Some cell lost all of its candidates; no solution is reachable by
    /// local inference from this grid.
    #[display("contradicted")]
    Contradicted,
}

/// Statistics collected while solving.
///
/// Tracks the number of engine steps and, per rule, how many steps that rule
/// changed the grid in.
#[derive(Debug, Clone)]
pub struct SolveStats {
    steps: usize,
    applications: Vec<usize>,
}

impl SolveStats {
    /// Returns the number of steps the engine has taken.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns per-rule counts of steps in which the rule changed the grid,
    /// in engine rule order.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns `true` if any rule changed the grid at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.applications.iter().any(|&count| count > 0)
    }
}

/// Applies elimination and only-choice to a fixed point.
///
/// The engine owns the board [`Topology`] (built once at construction) and a
/// rule list. Each step applies every rule exactly once, in order, then
/// classifies the grid:
///
/// 1. any empty candidate set → [`Outcome::Contradicted`]
/// 2. 81 singletons → [`Outcome::Solved`]
/// 3. solved-cell count unchanged since the step started → [`Outcome::Stalled`]
/// 4. otherwise the run continues
///
/// Progress is measured purely by the solved-cell count; candidate-set
/// shrinkage alone does not keep a run alive. Since every step must grow that
/// count or terminate, a run ends within 81 steps.
///
/// # Examples
///
/// ```
/// use sudofix_core::Grid;
/// use sudofix_solver::{EXAMPLE_PUZZLE, Engine, Outcome};
///
/// let engine = Engine::new();
/// let mut grid: Grid = EXAMPLE_PUZZLE.parse()?;
/// let mut stats = engine.new_stats();
///
/// let outcome = engine.solve_with_stats(&mut grid, &mut stats);
/// assert_eq!(outcome, Outcome::Solved);
/// assert!(stats.steps() <= 81);
/// # Ok::<(), sudofix_core::ParseError>(())
/// ```
#[derive(Debug)]
pub struct Engine {
    topology: Topology,
    rules: Vec<BoxedRule>,
}

impl Engine {
    /// Creates an engine with the standard rules (elimination, only-choice).
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(standard_rules())
    }

    /// Creates an engine with a custom rule list, applied in the given order.
    #[must_use]
    pub fn with_rules(rules: Vec<BoxedRule>) -> Self {
        Self {
            topology: Topology::new(),
            rules,
        }
    }

    /// Returns the board topology the engine propagates over.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Returns the configured rules in application order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`SolveStats::applications`].
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Creates a statistics object aligned with this engine's rule order.
    #[must_use]
    pub fn new_stats(&self) -> SolveStats {
        SolveStats {
            steps: 0,
            applications: vec![0; self.rules.len()],
        }
    }

    /// Runs one step: every rule once, in order, then classification.
    ///
    /// Returns `None` while the run should continue and `Some` with the
    /// terminal [`Outcome`] once it must stop.
    pub fn step(&self, grid: &mut Grid, stats: &mut SolveStats) -> Option<Outcome> {
        debug_assert_eq!(self.rules.len(), stats.applications.len());
        let solved_before = grid.solved_count();

        for (i, rule) in self.rules.iter().enumerate() {
            if rule.apply(grid, &self.topology) {
                stats.applications[i] += 1;
                trace!("rule {:?} changed the grid", rule.name());
            }
        }
        stats.steps += 1;

        if grid.is_contradicted() {
            debug!("step {}: contradiction, a cell ran out of candidates", stats.steps);
            return Some(Outcome::Contradicted);
        }

        let solved_after = grid.solved_count();
        debug!(
            "step {}: {solved_before} -> {solved_after} solved cells",
            stats.steps
        );
        if grid.is_solved() {
            return Some(Outcome::Solved);
        }
        if solved_after == solved_before {
            return Some(Outcome::Stalled);
        }
        None
    }

    /// Steps until a terminal state is reached.
    pub fn solve(&self, grid: &mut Grid) -> Outcome {
        let mut stats = self.new_stats();
        self.solve_with_stats(grid, &mut stats)
    }

    /// Steps until a terminal state is reached, recording statistics.
    pub fn solve_with_stats(&self, grid: &mut Grid, stats: &mut SolveStats) -> Outcome {
        self.solve_with_observer(grid, stats, |_, _| {})
    }

    /// Steps until a terminal state is reached, reporting progress.
    ///
    /// After every step the observer receives the grid and the count of still
    /// unsolved cells, so an external display can render the trace without
    /// reaching into engine state.
    pub fn solve_with_observer<F>(
        &self,
        grid: &mut Grid,
        stats: &mut SolveStats,
        mut observer: F,
    ) -> Outcome
    where
        F: FnMut(&Grid, usize),
    {
        loop {
            let outcome = self.step(grid, stats);
            observer(grid, grid.unsolved_count());
            if let Some(outcome) = outcome {
                return outcome;
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
