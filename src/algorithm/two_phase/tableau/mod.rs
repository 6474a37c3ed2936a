//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon
//! it. The tableau owns the matrix state of the problem being solved and the mapping describing
//! the current basis; bringing a column into the basis is its only mutating operation.
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::{Itertools, repeat_n};

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::RealField;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// The matrix has one row for the objective function followed by one row per constraint, and one
/// column per structural variable, then per artificial variable, and a final right-hand side
/// column. The objective row holds the negated reduced costs; its right-hand side entry is the
/// current objective value.
///
/// A tableau is created once per phase: a first phase tableau carries the artificial variables
/// and the auxiliary objective, the second phase tableau is derived from it through
/// `from_artificial` once a feasible basis is known.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Matrix of size `(m + 1) x (nr_structural + nr_artificial + 1)`.
    matrix: DenseMatrix<F>,
    /// For each constraint row, the index of the column that is basic in it.
    ///
    /// The defining invariant of tableau consistency: the columns named here, read across all
    /// constraint rows, form a permuted identity submatrix at all times.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,
    /// Number of columns the caller's problem provided.
    nr_structural: usize,
    /// Number of artificial columns appended after the structural block. Zero in the second
    /// phase.
    nr_artificial: usize,
}

impl<F: RealField> Tableau<F> {
    /// Create the initial tableau for a problem in standard form.
    ///
    /// Ready-made unit columns (coefficient one in a single row, zero elsewhere and in the
    /// objective) seed the basis. Every constraint row without one gets an artificial variable,
    /// and the objective row is replaced by the auxiliary first phase objective: the negated
    /// column sums over the rows that received an artificial, such that minimizing it drives the
    /// sum of the artificial variables to zero.
    pub fn new(problem: &StandardForm<F>) -> Self {
        let m = problem.nr_constraints();
        let n = problem.nr_variables();

        let detected = Self::detect_initial_basis(problem);
        let artificial_rows = detected.iter().positions(Option::is_none).collect::<Vec<_>>();
        let nr_artificial = artificial_rows.len();
        let rhs_column = n + nr_artificial;

        let mut data = Vec::with_capacity(m + 1);
        data.push(vec![F::zero(); rhs_column + 1]);
        for i in 0..m {
            let mut row = Vec::with_capacity(rhs_column + 1);
            row.extend((0..n).map(|j| problem.coefficient(i, j)));
            row.extend(repeat_n(F::zero(), nr_artificial));
            row.push(problem.rhs_value(i));
            data.push(row);
        }

        let mut basis_indices = detected.into_iter()
            .map(|maybe_column| maybe_column.unwrap_or(usize::MAX))
            .collect::<Vec<_>>();
        for (k, &i) in artificial_rows.iter().enumerate() {
            data[1 + i][n + k] = F::one();
            basis_indices[i] = n + k;
        }
        debug_assert!(basis_indices.iter().all(|&j| j <= rhs_column));

        if nr_artificial == 0 {
            for j in 0..n {
                data[0][j] = -problem.cost(j);
            }
        } else {
            // The auxiliary objective, expressed as reduced costs over the real variables. The
            // artificial columns themselves are basic and keep reduced cost zero.
            for j in 0..n {
                data[0][j] = -artificial_rows.iter()
                    .map(|&i| problem.coefficient(i, j))
                    .fold(F::zero(), |total, value| total + value);
            }
            data[0][rhs_column] = -artificial_rows.iter()
                .map(|&i| problem.rhs_value(i))
                .fold(F::zero(), |total, value| total + value);
        }

        let basis_columns = basis_indices.iter().copied().collect();
        Self {
            matrix: DenseMatrix::from_data(data),
            basis_indices,
            basis_columns,
            nr_structural: n,
            nr_artificial,
        }
    }

    /// Derive the second phase tableau from a first phase tableau with a feasible basis.
    ///
    /// Drops all artificial columns and restores the original objective row, recomputing the
    /// reduced costs with respect to the current basis.
    pub fn from_artificial(artificial: Self, problem: &StandardForm<F>) -> Self {
        debug_assert!(!artificial.has_artificial_in_basis());
        debug_assert!(artificial.objective_function_value().is_negligible());

        let mut tableau = artificial;
        let rhs_column = tableau.nr_structural + tableau.nr_artificial;
        tableau.matrix.remove_columns(tableau.nr_structural, rhs_column);
        tableau.nr_artificial = 0;

        for j in 0..=tableau.nr_structural {
            let direct_cost = if j < tableau.nr_structural {
                problem.cost(j)
            } else {
                F::zero()
            };
            let through_basis = tableau.basis_indices.iter()
                .enumerate()
                .map(|(r, &basic)| problem.cost(basic) * tableau.matrix.get_value(1 + r, j))
                .fold(F::zero(), |total, value| total + value);
            tableau.matrix.set_value(0, j, through_basis - direct_cost);
        }

        tableau
    }

    /// Brings a column into the basis by pivoting on coordinate (`pivot_row`, `pivot_column`).
    ///
    /// Normalizes the pivot row such that the pivot element becomes one, then eliminates the
    /// pivot column from every other row, the objective row included. The entries of the pivot
    /// column are written as exact zeros and a one afterwards, so rounding noise from the
    /// elimination can not accumulate in basis columns.
    ///
    /// # Arguments
    ///
    /// * `pivot_column`: Index of the column entering the basis.
    /// * `pivot_row`: Constraint row index (in range `0` until `self.nr_rows()`) whose basic
    ///   variable leaves the basis. The pivot element at this coordinate must be nonzero.
    pub fn bring_into_basis(&mut self, pivot_column: usize, pivot_row: usize) {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(pivot_row < self.nr_rows());

        let pivot_value = self.matrix.get_value(1 + pivot_row, pivot_column);
        debug_assert!(!pivot_value.is_negligible());

        self.matrix.multiply_row(1 + pivot_row, F::one() / pivot_value);
        self.matrix.set_value(1 + pivot_row, pivot_column, F::one());
        for row in 0..self.matrix.nr_rows() {
            if row == 1 + pivot_row {
                continue;
            }
            let factor = self.matrix.get_value(row, pivot_column);
            if factor != F::zero() {
                self.matrix.mul_add_rows(1 + pivot_row, row, -factor);
                self.matrix.set_value(row, pivot_column, F::zero());
            }
        }

        self.update_basis_indices(pivot_column, pivot_row);
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    fn update_basis_indices(&mut self, pivot_column: usize, pivot_row: usize) {
        let leaving_column = self.basis_indices[pivot_row];

        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(pivot_column);
        debug_assert!(was_not_there);

        self.basis_indices[pivot_row] = pivot_column;
    }

    /// Row selection rule for the primal Simplex method: the minimum ratio test.
    ///
    /// Among the constraint rows with a positive coefficient in the pivot column, the row with
    /// the minimum ratio of right-hand side to coefficient binds the increase of the entering
    /// variable most tightly. Degenerate ties are broken towards the row whose basic variable has
    /// the lowest index; this leaving-side application of Bland's rule is always on, regardless
    /// of which entering rule runs.
    ///
    /// # Return value
    ///
    /// The index of the row to pivot on, or `None` if no coefficient in the column is positive,
    /// in which case the entering variable can be increased without bound.
    pub fn select_primal_pivot_row(&self, pivot_column: usize) -> Option<usize> {
        debug_assert!(pivot_column < self.nr_columns());

        let tolerance = F::zero_tolerance();
        let mut candidate: Option<(usize, F)> = None;
        for row in 0..self.nr_rows() {
            let coefficient = self.matrix.get_value(1 + row, pivot_column);
            if coefficient > tolerance {
                let ratio = self.rhs(row) / coefficient;
                candidate = match candidate {
                    None => Some((row, ratio)),
                    Some((best_row, best_ratio)) => {
                        if ratio < best_ratio - tolerance {
                            Some((row, ratio))
                        } else if (ratio - best_ratio).abs() <= tolerance
                            && self.basis_indices[row] < self.basis_indices[best_row]
                        {
                            Some((row, best_ratio))
                        } else {
                            Some((best_row, best_ratio))
                        }
                    },
                };
            }
        }

        candidate.map(|(row, _)| row)
    }

    /// The objective row entry of column `j`.
    ///
    /// A negative value indicates that the objective can be improved by increasing the variable
    /// of this column; for basic columns the value is zero.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(0, j)
    }

    /// Coefficient of column `j` in constraint row `r`, with respect to the current basis.
    pub fn constraint_value(&self, r: usize, j: usize) -> F {
        debug_assert!(r < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.matrix.get_value(1 + r, j)
    }

    /// Right-hand side value of constraint row `r`: the value of the variable basic in that row.
    pub fn rhs(&self, r: usize) -> F {
        debug_assert!(r < self.nr_rows());

        self.matrix.get_value(1 + r, self.nr_structural + self.nr_artificial)
    }

    /// Get the cost of the current solution.
    ///
    /// For a first phase tableau this is the negated sum of the artificial variables, for a
    /// second phase tableau the value of the original objective function.
    pub fn objective_function_value(&self) -> F {
        self.matrix.get_value(0, self.nr_structural + self.nr_artificial)
    }

    /// Whether the column is in the current basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// The column basic in constraint row `r`.
    pub fn basis_column_in_row(&self, r: usize) -> usize {
        debug_assert!(r < self.nr_rows());

        self.basis_indices[r]
    }

    /// Whether any artificial variable is still in the basis.
    pub fn has_artificial_in_basis(&self) -> bool {
        self.basis_indices.iter().any(|&column| column >= self.nr_structural)
    }

    /// Whether the current basis is primal feasible: all right-hand side values nonnegative.
    pub fn is_primal_feasible(&self) -> bool {
        let tolerance = F::zero_tolerance();
        (0..self.nr_rows()).all(|r| self.rhs(r) >= -tolerance)
    }

    /// Get the current basic feasible solution.
    ///
    /// # Return value
    ///
    /// Solution values over the structural columns: zero for nonbasic variables, the right-hand
    /// side value of its row for basic ones.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut values = vec![F::zero(); self.nr_structural];
        for (r, &column) in self.basis_indices.iter().enumerate() {
            if column < self.nr_structural {
                values[column] = self.rhs(r);
            }
        }
        values
    }

    /// Remove constraint rows from the tableau.
    ///
    /// Used when the first phase proves rows redundant: their basic artificial variable is at
    /// zero level and no structural column can replace it. The artificial columns basic in the
    /// removed rows leave the basis with them; since those columns are zero in every other row,
    /// the basis invariant for the remaining rows is untouched.
    ///
    /// # Arguments
    ///
    /// * `rows`: Constraint row indices to remove, sorted and deduplicated.
    pub(crate) fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.is_sorted());

        for &r in rows.iter().rev() {
            let column = self.basis_indices.remove(r);
            let was_there = self.basis_columns.remove(&column);
            debug_assert!(was_there);
            self.matrix.remove_row(1 + r);
        }
    }

    /// Number of constraint rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.basis_indices.len()
    }

    /// Number of variable columns, the artificial ones included.
    pub fn nr_columns(&self) -> usize {
        self.nr_structural + self.nr_artificial
    }

    /// Number of columns the caller's problem provided.
    pub fn nr_structural_columns(&self) -> usize {
        self.nr_structural
    }

    /// Number of artificial variables in this tableau.
    pub fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial
    }

    /// Find a unit column for each constraint row, if the problem has one.
    ///
    /// A column seeds the basis for row `i` when it has coefficient one in row `i`, zero in every
    /// other row and zero cost; the latter keeps the objective row invariant (zero reduced cost
    /// for basic columns) without correcting the objective row. Each column seeds at most one
    /// row, lowest column index first.
    fn detect_initial_basis(problem: &StandardForm<F>) -> Vec<Option<usize>> {
        let tolerance = F::zero_tolerance();
        let mut basis = vec![None; problem.nr_constraints()];

        for j in 0..problem.nr_variables() {
            if !problem.cost(j).is_negligible() {
                continue;
            }

            let mut unit_row = None;
            let mut is_unit_column = true;
            for i in 0..problem.nr_constraints() {
                let value = problem.coefficient(i, j);
                if (value - F::one()).abs() <= tolerance {
                    if unit_row.is_some() {
                        is_unit_column = false;
                        break;
                    }
                    unit_row = Some(i);
                } else if !value.is_negligible() {
                    is_unit_column = false;
                    break;
                }
            }

            if is_unit_column {
                if let Some(i) = unit_row {
                    if basis[i].is_none() {
                        basis[i] = Some(j);
                    }
                }
            }
        }

        basis
    }

    fn column_label(&self, j: usize) -> String {
        if j < self.nr_structural {
            format!("x{}", j + 1)
        } else {
            format!("a{}", j - self.nr_structural + 1)
        }
    }
}

impl<F: RealField> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "{:>8}", "")?;
        for j in 0..self.nr_columns() {
            write!(f, "{:>12}", self.column_label(j))?;
        }
        writeln!(f, "{:>12}", "RHS")?;

        write!(f, "{:>8}", "z")?;
        for j in 0..self.nr_columns() {
            write!(f, "{:>12.5}", self.relative_cost(j))?;
        }
        writeln!(f, "{:>12.5}", self.objective_function_value())?;

        for r in 0..self.nr_rows() {
            write!(f, "{:>8}", self.column_label(self.basis_indices[r]))?;
            for j in 0..self.nr_columns() {
                write!(f, "{:>12.5}", self.constraint_value(r, j))?;
            }
            writeln!(f, "{:>12.5}", self.rhs(r))?;
        }

        Ok(())
    }
}

/// Whether the tableau is consistent, as used by debug assertions after every pivot.
///
/// Checks the defining invariants of a basic feasible solution state: the basis columns form a
/// permuted identity submatrix over the constraint rows, every basic column has zero reduced
/// cost, and all right-hand side values are nonnegative, all within the numerical tolerance.
pub(crate) fn is_in_basic_feasible_solution_state<F: RealField>(tableau: &Tableau<F>) -> bool {
    let tolerance = F::zero_tolerance();

    for (r, &column) in tableau.basis_indices.iter().enumerate() {
        if !tableau.relative_cost(column).is_negligible() {
            return false;
        }
        for i in 0..tableau.nr_rows() {
            let expected = if i == r { F::one() } else { F::zero() };
            if (tableau.constraint_value(i, column) - expected).abs() > tolerance {
                return false;
            }
        }
    }

    tableau.is_primal_feasible()
}
