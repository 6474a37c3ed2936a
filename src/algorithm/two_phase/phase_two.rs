//! # Optimizing over a feasible basis
//!
//! The second phase of the two-phase method: starting from a basic feasible solution, reduce the
//! cost of that solution to the minimum.
use log::{debug, trace};

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::IterationBudget;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{Tableau, is_in_basic_feasible_solution_state};
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::RealField;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be positive (primal feasibility)
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot
/// be infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    budget: &mut IterationBudget,
) -> OptimizationResult<F>
where
    F: RealField,
    PR: PivotRule,
{
    let mut rule = PR::new();
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));

        match rule.select_primal_pivot_column(tableau) {
            Some((column, _cost)) => {
                if !budget.take() {
                    break OptimizationResult::IterationLimitReached;
                }
                match tableau.select_primal_pivot_row(column) {
                    Some(row) => {
                        debug!("phase two: pivot on row {row}, column {column}");
                        tableau.bring_into_basis(column, row);
                        trace!("{tableau}");
                    },
                    None => break OptimizationResult::Unbounded,
                }
            },
            None => break OptimizationResult::FiniteOptimum(Solution::new(
                tableau.objective_function_value(),
                tableau.current_bfs(),
            )),
        }
    }
}
