//! # End to end solves
//!
//! One module per problem. The bounded problems are from Linear Programming by James P. Ignizio;
//! the degenerate one is a classic cycling example.
use crate::algorithm::OptimizationResult;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::RealField;


pub(crate) fn expect_finite_optimum<F: RealField>(result: OptimizationResult<F>) -> Solution<F> {
    match result {
        OptimizationResult::FiniteOptimum(solution) => solution,
        other => panic!("expected a finite optimum, got {other:?}"),
    }
}
