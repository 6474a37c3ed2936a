//! # Pivot rules
//!
//! Strategies for deciding which variable enters the basis each iteration. One rule is active per
//! run. Candidates are the nonbasic structural columns with a negative relative cost; artificial
//! variables are never brought back into the basis once they left it.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::RealField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior: it selects the column entering the basis.
/// The row leaving the basis is subsequently found with the ratio test, independent of the
/// strategy.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The entering column index with its relative cost, or `None` when no column can improve
    /// the objective and the current basis is optimal.
    fn select_primal_pivot_column<F: RealField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)>;
}

/// Simply pivot on the first column which has a negative relative cost.
///
/// This is Bland's rule on the entering side. Combined with the lowest-index tie break of the
/// ratio test it guarantees that the method terminates, also on degenerate problems that cycle
/// under the steepest descent rule, typically at the cost of more iterations.
pub struct FirstProfitable;

impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: RealField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)> {
        let tolerance = F::zero_tolerance();
        (0..tableau.nr_structural_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|&(_, cost)| cost < -tolerance)
    }
}

/// Simply pivot on the column which has the most negative relative cost.
///
/// Dantzig's original rule, and the default. Ties are broken towards the lowest column index.
pub struct SteepestDescentAlongVariable;

impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: RealField>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)> {
        let tolerance = F::zero_tolerance();

        let mut smallest: Option<(usize, F)> = None;
        for (column, cost) in (0..tableau.nr_structural_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|&(_, cost)| cost < -tolerance)
        {
            if let Some((_, existing_cost)) = smallest {
                // Strict comparison keeps the lowest column index on a tie.
                if cost < existing_cost {
                    smallest = Some((column, cost));
                }
            } else {
                smallest = Some((column, cost));
            }
        }

        smallest
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::strategy::pivot_rule::{
        FirstProfitable, PivotRule, SteepestDescentAlongVariable,
    };
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_program::standard_form::StandardForm;

    /// Slack basis in columns 2 through 4; relative costs `[-2, -3, 0, 0, 0]`.
    fn tableau() -> Tableau<f64> {
        let problem = StandardForm::new(
            vec![2_f64, 3_f64, 0_f64, 0_f64, 0_f64],
            vec![
                vec![1_f64, -2_f64, 1_f64, 0_f64, 0_f64],
                vec![2_f64, 1_f64, 0_f64, 1_f64, 0_f64],
                vec![0_f64, 1_f64, 0_f64, 0_f64, 1_f64],
            ],
            vec![4_f64, 18_f64, 10_f64],
        ).unwrap();
        Tableau::new(&problem)
    }

    #[test]
    fn first_profitable_takes_lowest_index() {
        let tableau = tableau();
        let mut rule = FirstProfitable::new();
        assert_eq!(rule.select_primal_pivot_column(&tableau), Some((0, -2_f64)));
    }

    #[test]
    fn steepest_descent_takes_most_negative() {
        let tableau = tableau();
        let mut rule = SteepestDescentAlongVariable::new();
        assert_eq!(rule.select_primal_pivot_column(&tableau), Some((1, -3_f64)));
    }

    #[test]
    fn optimal_tableau_yields_no_column() {
        let problem = StandardForm::new(
            vec![0_f64, 0_f64],
            vec![vec![1_f64, 0_f64], vec![0_f64, 1_f64]],
            vec![1_f64, 2_f64],
        ).unwrap();
        let tableau = Tableau::new(&problem);

        let mut rule = SteepestDescentAlongVariable::new();
        assert_eq!(rule.select_primal_pivot_column(&tableau), None);
        let mut rule = FirstProfitable::new();
        assert_eq!(rule.select_primal_pivot_column(&tableau), None);
    }
}
