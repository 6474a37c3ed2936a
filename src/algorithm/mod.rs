//! # Algorithms
use crate::data::linear_program::solution::Solution;

pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm. All of these are expected outcomes and are
/// reported as values; none of them is a fault.
#[derive(Debug, PartialEq)]
pub enum OptimizationResult<F> {
    /// The problem has a finite optimum, attained by the contained solution.
    FiniteOptimum(Solution<F>),
    /// No point satisfies all constraints.
    Infeasible,
    /// The objective function can be improved without bound.
    Unbounded,
    /// The iteration budget ran out before a terminal state was reached.
    ///
    /// Without Bland's rule the method can in principle cycle on degenerate problems, so runs are
    /// bounded. This is distinct from `Infeasible` and `Unbounded`: the solver gave up, it did
    /// not establish that no solution exists.
    IterationLimitReached,
}
