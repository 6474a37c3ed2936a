//! # Matrix implementations
//!
//! A dense, row-major matrix. Dimensions are fixed at creation; the only shape changes are the
//! explicit row and column removals used when artificial variables are dropped from a tableau.
use std::slice::Iter;

use crate::data::number_types::RealField;

/// Uses a `Vec<Vec<F>>` as underlying data structure.
///
/// Row-major, since the simplex pivot reads and writes whole rows.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: RealField> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided data.
    ///
    /// All rows must have equal length.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { data, nr_rows, nr_columns }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Iterate over the values in row `i`.
    pub fn row(&self, i: usize) -> Iter<'_, F> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Multiply row `i` by a constant `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value *= factor;
        }
    }

    /// Add `factor` times row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read_value = self.data[read_row][j];
            self.data[write_row][j] += factor * read_value;
        }
    }

    /// Remove a contiguous range of columns from every row.
    pub fn remove_columns(&mut self, from: usize, until: usize) {
        debug_assert!(from <= until);
        debug_assert!(until <= self.nr_columns);

        for row in &mut self.data {
            row.drain(from..until);
        }
        self.nr_columns -= until - from;
    }

    /// Remove row `i` from the matrix.
    pub fn remove_row(&mut self, i: usize) {
        debug_assert!(i < self.nr_rows);

        self.data.remove(i);
        self.nr_rows -= 1;
    }

    /// Number of rows of this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns of this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::DenseMatrix;

    fn matrix() -> DenseMatrix<f64> {
        DenseMatrix::from_data(vec![
            vec![1_f64, 2_f64, 3_f64],
            vec![4_f64, 5_f64, 6_f64],
        ])
    }

    #[test]
    fn create_read() {
        let m = matrix();
        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.nr_columns(), 3);
        assert_eq!(m.get_value(0, 1), 2_f64);
        assert_eq!(m.column(2), vec![3_f64, 6_f64]);
        assert_eq!(m.row(1).copied().collect::<Vec<_>>(), vec![4_f64, 5_f64, 6_f64]);
    }

    #[test]
    fn multiply_row() {
        let mut m = matrix();
        m.multiply_row(0, 2_f64);
        assert_eq!(m.row(0).copied().collect::<Vec<_>>(), vec![2_f64, 4_f64, 6_f64]);
        assert_eq!(m.row(1).copied().collect::<Vec<_>>(), vec![4_f64, 5_f64, 6_f64]);
    }

    #[test]
    fn mul_add_rows() {
        let mut m = matrix();
        m.mul_add_rows(0, 1, -4_f64);
        assert_eq!(m.row(1).copied().collect::<Vec<_>>(), vec![0_f64, -3_f64, -6_f64]);
    }

    #[test]
    fn remove_columns() {
        let mut m = matrix();
        m.remove_columns(1, 2);
        assert_eq!(m.nr_columns(), 2);
        assert_eq!(m.row(0).copied().collect::<Vec<_>>(), vec![1_f64, 3_f64]);
        assert_eq!(m.row(1).copied().collect::<Vec<_>>(), vec![4_f64, 6_f64]);
    }

    #[test]
    fn remove_row() {
        let mut m = matrix();
        m.remove_row(0);
        assert_eq!(m.nr_rows(), 1);
        assert_eq!(m.row(0).copied().collect::<Vec<_>>(), vec![4_f64, 5_f64, 6_f64]);
    }
}
