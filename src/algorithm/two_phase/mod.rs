//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a
//! book by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! The phase logic drives the tableau: the first phase manufactures a basic feasible solution
//! with artificial variables where the problem has no ready-made basis, the second phase
//! optimizes the real objective from that basis. Problems with a complete initial basis skip the
//! first phase entirely.
use log::debug;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::phase_one::{Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::strategy::pivot_rule::{
    FirstProfitable, PivotRule, SteepestDescentAlongVariable,
};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::RealField;

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

/// Pivots allowed per column of the problem when no explicit cap is configured.
///
/// Generous: nondegenerate solves visit each basis at most once and use far fewer.
const DEFAULT_ITERATIONS_PER_COLUMN: usize = 64;

/// Configuration of a single solve.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SolveOptions {
    /// Select the entering column with Bland's rule rather than the steepest descent rule.
    ///
    /// Guarantees termination on degenerate problems that would otherwise cycle, at the cost of
    /// potentially more iterations.
    pub use_blands_rule: bool,
    /// Maximum number of pivots over both phases together.
    ///
    /// `None` uses a default proportional to the number of variables. The cap exists because the
    /// steepest descent rule can in principle cycle forever; exceeding it reports
    /// `OptimizationResult::IterationLimitReached` instead of looping.
    pub max_iterations: Option<usize>,
}

/// Pivots remaining before the solver gives up. Shared between the two phases.
#[derive(Debug)]
pub(crate) struct IterationBudget {
    remaining: usize,
}

impl IterationBudget {
    pub(crate) fn new(limit: usize) -> Self {
        Self { remaining: limit }
    }

    /// Consume one iteration; `false` when the budget is exhausted.
    pub(crate) fn take(&mut self) -> bool {
        if self.remaining == 0 {
            false
        } else {
            self.remaining -= 1;
            true
        }
    }
}

impl<F: RealField> StandardForm<F> {
    /// Solve this linear program with the two-phase simplex method.
    ///
    /// # Arguments
    ///
    /// * `options`: Entering rule and iteration cap for this run.
    ///
    /// # Return value
    ///
    /// An `OptimizationResult`: the optimal solution, or the reason there is none. Per-pivot
    /// progress is logged at debug level and the full tableau at trace level.
    pub fn solve(&self, options: &SolveOptions) -> OptimizationResult<F> {
        if options.use_blands_rule {
            self.solve_with_rule::<FirstProfitable>(options)
        } else {
            self.solve_with_rule::<SteepestDescentAlongVariable>(options)
        }
    }

    fn solve_with_rule<PR: PivotRule>(&self, options: &SolveOptions) -> OptimizationResult<F> {
        let limit = options.max_iterations
            .unwrap_or(DEFAULT_ITERATIONS_PER_COLUMN * self.nr_variables());
        let mut budget = IterationBudget::new(limit);

        let mut tableau = Tableau::new(self);
        if tableau.nr_artificial_variables() > 0 {
            debug!(
                "no identifiable basis; solving an auxiliary problem with {} artificial variables",
                tableau.nr_artificial_variables(),
            );
            match phase_one::primal::<_, PR>(&mut tableau, &mut budget) {
                RankedFeasibilityResult::Feasible { rank } => {
                    if let Rank::Deficient(rows) = rank {
                        debug!("removed {} redundant constraint rows: {rows:?}", rows.len());
                    }
                },
                RankedFeasibilityResult::Infeasible => return OptimizationResult::Infeasible,
                RankedFeasibilityResult::IterationLimit => {
                    return OptimizationResult::IterationLimitReached;
                },
            }
            debug!("feasible basis found; dropping artificial variables");
            tableau = Tableau::from_artificial(tableau, self);
        }

        phase_two::primal::<_, PR>(&mut tableau, &mut budget)
    }
}
