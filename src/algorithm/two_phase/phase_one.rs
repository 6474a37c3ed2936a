//! # Finding a feasible basis
//!
//! The first phase of the two-phase method minimizes the sum of the artificial variables. When
//! that sum can be driven to zero, a basic feasible solution to the original problem has been
//! found; otherwise, no feasible point exists.
use log::{debug, trace};

use crate::algorithm::two_phase::IterationBudget;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{Tableau, is_in_basic_feasible_solution_state};
use crate::data::number_types::RealField;

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so,
/// a basic feasible solution to the standard form linear program is found.
///
/// # Arguments
///
/// * `tableau`: Artificial tableau with a valid basis. This basis will typically consist of
///   artificial variables.
/// * `budget`: Pivots still allowed; shared with the second phase.
///
/// # Return value
///
/// Whether the tableau allows a basic feasible solution without artificial variables.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    budget: &mut IterationBudget,
) -> RankedFeasibilityResult
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
                    break RankedFeasibilityResult::IterationLimit;
                }
                match tableau.select_primal_pivot_row(column) {
                    Some(row) => {
                        debug!("phase one: pivot on row {row}, column {column}");
                        tableau.bring_into_basis(column, row);
                        trace!("{tableau}");
                    },
                    None => panic!("Artificial cost can not be unbounded."),
                }
            },
            // The objective value is the negated sum of the artificial variables.
            None => break if tableau.objective_function_value() < -F::zero_tolerance() {
                RankedFeasibilityResult::Infeasible
            } else {
                let rank = if tableau.has_artificial_in_basis() {
                    let rows_removed = remove_artificial_basis_variables(tableau);
                    if rows_removed.is_empty() {
                        Rank::Full
                    } else {
                        Rank::Deficient(rows_removed)
                    }
                } else {
                    Rank::Full
                };
                RankedFeasibilityResult::Feasible { rank }
            },
        }
    }
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum RankedFeasibilityResult {
    /// The problem is feasible; the tableau basis is free of artificial variables.
    Feasible {
        /// Whether redundant constraint rows were removed.
        rank: Rank,
    },
    /// The problem is not feasible.
    Infeasible,
    /// The iteration budget ran out before the auxiliary problem was solved.
    IterationLimit,
}

/// A matrix or linear program either has full rank, or is rank deficient.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Rank {
    /// No rows needed to be removed.
    Full,
    /// The contained constraint row indices were redundant and have been removed from the
    /// tableau. Sorted and deduplicated.
    Deficient(Vec<usize>),
}

/// Removes all artificial variables from the basis by making basis changes "at zero level", or
/// without change of cost of the current solution.
///
/// An artificial variable that is still basic at the end of the first phase has value zero. Where
/// some nonbasic structural column with zero relative cost has a nonzero coefficient in its row,
/// pivoting on it swaps the artificial out without leaving the auxiliary optimum. Where no such
/// column exists, the row is a linear combination of the others and is removed.
///
/// # Return value
///
/// The indices of the removed rows, sorted as a side effect of the iteration order.
fn remove_artificial_basis_variables<F: RealField>(tableau: &mut Tableau<F>) -> Vec<usize> {
    let mut rows_to_remove = Vec::new();

    for row in 0..tableau.nr_rows() {
        if tableau.basis_column_in_row(row) < tableau.nr_structural_columns() {
            continue;
        }

        let pivot_column = (0..tableau.nr_structural_columns())
            .filter(|&j| !tableau.is_in_basis(j))
            .filter(|&j| tableau.relative_cost(j).is_negligible())
            .find(|&j| !tableau.constraint_value(row, j).is_negligible());

        match pivot_column {
            Some(column) => {
                debug!("phase one: driving artificial out of row {row} with column {column}");
                tableau.bring_into_basis(column, row);
            },
            None => rows_to_remove.push(row),
        }
    }

    tableau.remove_rows(&rows_to_remove);
    debug_assert!(rows_to_remove.is_sorted());
    rows_to_remove
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::IterationBudget;
    use crate::algorithm::two_phase::phase_one::{Rank, RankedFeasibilityResult, primal};
    use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
    use crate::algorithm::two_phase::tableau::{Tableau, is_in_basic_feasible_solution_state};
    use crate::data::linear_program::standard_form::StandardForm;

    #[test]
    fn finds_feasible_basis() {
        let problem = StandardForm::new(
            vec![8_f64, 10_f64, 0_f64, 0_f64],
            vec![
                vec![1_f64, -1_f64, 0_f64, 0_f64],
                vec![1_f64, 1_f64, 1_f64, 0_f64],
                vec![1_f64, 0.5_f64, 0_f64, -1_f64],
            ],
            vec![1_f64, 9_f64, 4_f64],
        ).unwrap();
        let mut tableau = Tableau::new(&problem);
        let mut budget = IterationBudget::new(100);

        let result = primal::<_, FirstProfitable>(&mut tableau, &mut budget);
        assert_eq!(result, RankedFeasibilityResult::Feasible { rank: Rank::Full });
        assert!(!tableau.has_artificial_in_basis());
        assert!(tableau.objective_function_value().abs() < 1e-9);
        assert!(is_in_basic_feasible_solution_state(&tableau));
    }

    #[test]
    fn detects_infeasibility() {
        // After canonicalization: `-x1 - x2 = 1` can not hold for nonnegative variables.
        let problem = StandardForm::new(
            vec![1_f64, 0_f64, 0_f64],
            vec![
                vec![1_f64, 1_f64, 0_f64],
                vec![-1_f64, 0_f64, 1_f64],
            ],
            vec![-1_f64, -1_f64],
        ).unwrap();
        let mut tableau = Tableau::new(&problem);
        let mut budget = IterationBudget::new(100);

        let result = primal::<_, FirstProfitable>(&mut tableau, &mut budget);
        assert_eq!(result, RankedFeasibilityResult::Infeasible);
    }

    #[test]
    fn removes_redundant_row() {
        // The second constraint is the first one doubled; one artificial can never be driven
        // out by a structural column and its row must go.
        let problem = StandardForm::new(
            vec![1_f64, 1_f64],
            vec![
                vec![1_f64, 1_f64],
                vec![2_f64, 2_f64],
            ],
            vec![1_f64, 2_f64],
        ).unwrap();
        let mut tableau = Tableau::new(&problem);
        let mut budget = IterationBudget::new(100);

        let result = primal::<_, FirstProfitable>(&mut tableau, &mut budget);
        match result {
            RankedFeasibilityResult::Feasible { rank: Rank::Deficient(rows) } => {
                assert_eq!(rows.len(), 1);
            },
            other => panic!("expected a rank deficient feasible result, got {other:?}"),
        }
        assert_eq!(tableau.nr_rows(), 1);
        assert!(!tableau.has_artificial_in_basis());
    }

    #[test]
    fn stops_at_iteration_budget() {
        let problem = StandardForm::new(
            vec![8_f64, 10_f64, 0_f64, 0_f64],
            vec![
                vec![1_f64, -1_f64, 0_f64, 0_f64],
                vec![1_f64, 1_f64, 1_f64, 0_f64],
                vec![1_f64, 0.5_f64, 0_f64, -1_f64],
            ],
            vec![1_f64, 9_f64, 4_f64],
        ).unwrap();
        let mut tableau = Tableau::new(&problem);
        let mut budget = IterationBudget::new(0);

        let result = primal::<_, FirstProfitable>(&mut tableau, &mut budget);
        assert_eq!(result, RankedFeasibilityResult::IterationLimit);
    }
}
