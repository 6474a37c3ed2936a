//! # Linear programs in standard form
//!
//! A program in standard form maximizes a linear objective over equality constraints and
//! nonnegative variables. Callers are expected to have folded any slack, surplus or artificial
//! columns for inequality constraints into the coefficient matrix themselves.
use std::error::Error;
use std::fmt;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::RealField;

/// A validated linear program in standard form.
///
/// Maximize `c^T x` subject to `A x = b` and `x >= 0`. Construction is the only fallible step of
/// a solve: all dimension and value checks happen in `new`, before any algorithmic work is done.
///
/// Rows with a negative right-hand side are canonicalized by negating the entire constraint, so
/// the tableau always starts from `b >= 0`. Constraints that are genuinely contradictory then
/// surface as infeasibility during the first phase, never as a silently wrong answer.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    /// Coefficients of the objective function, one per variable. To be maximized.
    objective: Vec<F>,
    /// Coefficient matrix of size `nr_constraints` x `nr_variables`.
    constraints: DenseMatrix<F>,
    /// Right-hand side of the equality constraints, nonnegative after canonicalization.
    rhs: Vec<F>,
}

impl<F: RealField> StandardForm<F> {
    /// Create a new `StandardForm` after validating the problem data.
    ///
    /// # Arguments
    ///
    /// * `objective`: Objective function values, in order. Length determines the number of
    ///   variables `n`.
    /// * `coefficients`: Technological coefficients, row major, of size `m` x `n`.
    /// * `rhs`: Right-hand side of the constraints, of length `m`.
    ///
    /// # Errors
    ///
    /// A `BuildError` describing the first inconsistency found in the input.
    pub fn new(
        objective: Vec<F>,
        coefficients: Vec<Vec<F>>,
        rhs: Vec<F>,
    ) -> Result<Self, BuildError> {
        let m = rhs.len();
        let n = objective.len();

        if m == 0 || n == 0 {
            return Err(BuildError::Empty);
        }
        if coefficients.len() != m {
            return Err(BuildError::ConstraintCount { expected: m, found: coefficients.len() });
        }
        for (i, row) in coefficients.iter().enumerate() {
            if row.len() != n {
                return Err(BuildError::ConstraintLength { row: i, expected: n, found: row.len() });
            }
        }
        // Full rank assumption: more constraints than variables means linearly dependent rows.
        if m > n {
            return Err(BuildError::TooManyConstraints { nr_constraints: m, nr_variables: n });
        }

        if let Some(j) = objective.iter().position(|value| !value.is_finite()) {
            return Err(BuildError::NotFinite(format!("objective coefficient {j}")));
        }
        for (i, row) in coefficients.iter().enumerate() {
            if let Some(j) = row.iter().position(|value| !value.is_finite()) {
                return Err(BuildError::NotFinite(format!("coefficient ({i}, {j})")));
            }
        }
        if let Some(i) = rhs.iter().position(|value| !value.is_finite()) {
            return Err(BuildError::NotFinite(format!("right-hand side value {i}")));
        }

        let mut constraints = DenseMatrix::from_data(coefficients);
        let mut rhs = rhs;
        for i in 0..m {
            if rhs[i] < F::zero() {
                constraints.multiply_row(i, -F::one());
                rhs[i] = -rhs[i];
            }
        }

        Ok(Self { objective, constraints, rhs })
    }

    /// Objective coefficient of variable `j`.
    pub fn cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_variables());

        self.objective[j]
    }

    /// Coefficient of variable `j` in constraint `i`.
    pub fn coefficient(&self, i: usize, j: usize) -> F {
        self.constraints.get_value(i, j)
    }

    /// Right-hand side value of constraint `i`.
    pub fn rhs_value(&self, i: usize) -> F {
        debug_assert!(i < self.nr_constraints());

        self.rhs[i]
    }

    /// Number of variables `n` in the problem.
    pub fn nr_variables(&self) -> usize {
        self.objective.len()
    }

    /// Number of equality constraints `m` in the problem.
    pub fn nr_constraints(&self) -> usize {
        self.rhs.len()
    }
}

/// Problem data that can not describe a linear program in standard form.
///
/// Created before any pivot is attempted; a `StandardForm` value that exists is always safe to
/// solve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// The problem has no variables or no constraints.
    Empty,
    /// The number of coefficient rows differs from the length of the right-hand side.
    ConstraintCount {
        /// Length of the right-hand side.
        expected: usize,
        /// Number of coefficient rows provided.
        found: usize,
    },
    /// A coefficient row has a different length than the objective function.
    ConstraintLength {
        /// Index of the offending row.
        row: usize,
        /// Length of the objective function.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// More constraints than variables; the full rank assumption can not hold.
    TooManyConstraints {
        /// Number of constraints provided.
        nr_constraints: usize,
        /// Number of variables provided.
        nr_variables: usize,
    },
    /// A value in the problem data is NaN or infinite. Describes where it was found.
    NotFinite(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => {
                write!(f, "the problem has no variables or no constraints")
            },
            Self::ConstraintCount { expected, found } => {
                write!(
                    f,
                    "expected {expected} coefficient rows to match the right-hand side, found {found}",
                )
            },
            Self::ConstraintLength { row, expected, found } => {
                write!(
                    f,
                    "coefficient row {row} has length {found}, objective function has length {expected}",
                )
            },
            Self::TooManyConstraints { nr_constraints, nr_variables } => {
                write!(
                    f,
                    "{nr_constraints} constraints on {nr_variables} variables can not be linearly independent",
                )
            },
            Self::NotFinite(location) => {
                write!(f, "value at {location} is not finite")
            },
        }
    }
}

impl Error for BuildError {
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::standard_form::{BuildError, StandardForm};

    #[test]
    fn valid_problem() {
        let result = StandardForm::new(
            vec![2_f64, 3_f64],
            vec![vec![1_f64, 0_f64], vec![0_f64, 1_f64]],
            vec![4_f64, 5_f64],
        );
        assert!(result.is_ok());

        let problem = result.unwrap();
        assert_eq!(problem.nr_variables(), 2);
        assert_eq!(problem.nr_constraints(), 2);
        assert_eq!(problem.cost(1), 3_f64);
        assert_eq!(problem.coefficient(1, 1), 1_f64);
        assert_eq!(problem.rhs_value(0), 4_f64);
    }

    #[test]
    fn negative_rhs_is_canonicalized() {
        let problem = StandardForm::new(
            vec![1_f64, 0_f64],
            vec![vec![1_f64, 1_f64], vec![-1_f64, 0_f64]],
            vec![-1_f64, -1_f64],
        ).unwrap();

        assert_eq!(problem.rhs_value(0), 1_f64);
        assert_eq!(problem.rhs_value(1), 1_f64);
        assert_eq!(problem.coefficient(0, 0), -1_f64);
        assert_eq!(problem.coefficient(1, 0), 1_f64);
    }

    #[test]
    fn empty_problem() {
        assert_eq!(
            StandardForm::<f64>::new(vec![], vec![], vec![]),
            Err(BuildError::Empty),
        );
    }

    #[test]
    fn mismatched_row_count() {
        assert_eq!(
            StandardForm::new(vec![1_f64], vec![], vec![1_f64]),
            Err(BuildError::ConstraintCount { expected: 1, found: 0 }),
        );
    }

    #[test]
    fn mismatched_row_length() {
        assert_eq!(
            StandardForm::new(
                vec![1_f64, 1_f64],
                vec![vec![1_f64, 1_f64], vec![1_f64]],
                vec![1_f64, 1_f64],
            ),
            Err(BuildError::ConstraintLength { row: 1, expected: 2, found: 1 }),
        );
    }

    #[test]
    fn more_constraints_than_variables() {
        assert_eq!(
            StandardForm::new(
                vec![1_f64],
                vec![vec![1_f64], vec![2_f64]],
                vec![1_f64, 2_f64],
            ),
            Err(BuildError::TooManyConstraints { nr_constraints: 2, nr_variables: 1 }),
        );
    }

    #[test]
    fn non_finite_value() {
        let result = StandardForm::new(
            vec![1_f64, f64::NAN],
            vec![vec![1_f64, 1_f64]],
            vec![1_f64],
        );
        assert!(matches!(result, Err(BuildError::NotFinite(_))));
    }
}
