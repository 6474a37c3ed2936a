//! # Representation of feasible solutions
//!
//! Once a linear program is fully solved, a solution is derived. It is created once, when the
//! algorithm terminates, by reading the final basic feasible solution off the tableau, and is
//! immutable afterwards.
use std::fmt;

use itertools::Itertools;

use crate::data::number_types::RealField;

/// Represents an optimal solution to a linear program.
///
/// Values are indexed by variable, as the variables appeared in the problem: nonbasic variables
/// have value zero, basic variables carry their right-hand side value. This struct would probably
/// be used to print the optimal solution for the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    objective_value: F,
    /// Solution value per variable, ordered as in the original problem.
    solution_values: Vec<F>,
}

impl<F: RealField> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: F, solution_values: Vec<F>) -> Self {
        Self { objective_value, solution_values }
    }

    /// The optimal objective function value `z*`.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// The value of variable `j` in this solution.
    pub fn value(&self, j: usize) -> F {
        debug_assert!(j < self.solution_values.len());

        self.solution_values[j]
    }

    /// All solution values, ordered by variable index.
    pub fn solution_values(&self) -> &[F] {
        &self.solution_values
    }

    /// Whether two solutions are equal within a tolerance.
    ///
    /// Exact comparison of floating point solutions is almost never what a caller wants; two
    /// different pivot sequences reaching the same vertex produce slightly different values.
    pub fn is_probably_equal_to(&self, other: &Self, tolerance: F) -> bool {
        if (self.objective_value - other.objective_value).abs() > tolerance {
            return false;
        }

        self.solution_values.len() == other.solution_values.len()
            && self.solution_values.iter()
                .zip(&other.solution_values)
                .all(|(&left, &right)| (left - right).abs() <= tolerance)
    }
}

impl<F: RealField> fmt::Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "z* = {}", self.objective_value)?;
        write!(
            f,
            "x* = [{}]",
            self.solution_values.iter().map(ToString::to_string).join(", "),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::solution::Solution;

    #[test]
    fn accessors() {
        let solution = Solution::new(38_f64, vec![4_f64, 10_f64, 20_f64]);
        assert_eq!(solution.objective_value(), 38_f64);
        assert_eq!(solution.value(1), 10_f64);
        assert_eq!(solution.solution_values(), &[4_f64, 10_f64, 20_f64]);
    }

    #[test]
    fn probably_equal() {
        let left = Solution::new(1_f64, vec![0.5_f64, 0_f64]);
        let right = Solution::new(1_f64 + 1e-12, vec![0.5_f64 - 1e-12, 1e-13]);
        assert!(left.is_probably_equal_to(&right, 1e-9));
        assert!(!left.is_probably_equal_to(&Solution::new(2_f64, vec![0.5_f64, 0_f64]), 1e-9));
        assert!(!left.is_probably_equal_to(&Solution::new(1_f64, vec![0.5_f64]), 1e-9));
    }

    #[test]
    fn display() {
        let solution = Solution::new(3_f64, vec![1_f64, 2_f64]);
        assert_eq!(solution.to_string(), "z* = 3\nx* = [1, 2]");
    }
}
