//! Spreadsheet-style conditional sums over [`SparseMatrix`] entries.
//!
//! Only stored entries take part in a fold. Values are summed as `f64`.

use crate::sparse::{Coord, SparseMatrix};
use crate::utils::fold_value;
use crate::NumericOps;

pub trait MatrixSumIf {
    /// Sums the stored entries whose `(row, col)` satisfies `condition`.
    /// Every other stored entry contributes the matrix's default value.
    fn sum_if_by<F>(&self, condition: F) -> f64
    where
        F: Fn(usize, usize) -> bool;

    /// Sums the stored entries at coordinates where `condition_matrix` stores a
    /// value satisfying `condition`. Equivalent to Excel's `SUMIF`.
    fn sum_if<U, F>(&self, condition_matrix: &SparseMatrix<U>, condition: F) -> f64
    where
        U: NumericOps,
        F: Fn(f64) -> bool;
}

impl<T: NumericOps> MatrixSumIf for SparseMatrix<T> {
    fn sum_if_by<F>(&self, condition: F) -> f64
    where
        F: Fn(usize, usize) -> bool,
    {
        let zero = fold_value(self.zero());
        self.iter()
            .map(|((row, col), value)| {
                if condition(row, col) {
                    fold_value(value)
                } else {
                    zero
                }
            })
            .sum()
    }

    fn sum_if<U, F>(&self, condition_matrix: &SparseMatrix<U>, condition: F) -> f64
    where
        U: NumericOps,
        F: Fn(f64) -> bool,
    {
        self.iter()
            .filter(|&(coord, _)| matches(condition_matrix, coord, &condition))
            .map(|(_, value)| fold_value(value))
            .sum()
    }
}

fn matches<U, F>(condition_matrix: &SparseMatrix<U>, coord: Coord, condition: &F) -> bool
where
    U: NumericOps,
    F: Fn(f64) -> bool,
{
    condition_matrix
        .stored(coord)
        .is_some_and(|value| condition(fold_value(value)))
}

/// Sum of the elements of `sum_matrix` whose indices satisfy `condition`.
///
/// See [`MatrixSumIf::sum_if_by`].
pub fn sum_if_by<T, F>(sum_matrix: &SparseMatrix<T>, condition: F) -> f64
where
    T: NumericOps,
    F: Fn(usize, usize) -> bool,
{
    sum_matrix.sum_if_by(condition)
}

/// Sum of the elements of `sum_matrix` at the stored coordinates of
/// `condition_matrix` whose values satisfy `condition`.
///
/// See [`MatrixSumIf::sum_if`].
pub fn sum_if<T, U, F>(
    sum_matrix: &SparseMatrix<T>,
    condition_matrix: &SparseMatrix<U>,
    condition: F,
) -> f64
where
    T: NumericOps,
    U: NumericOps,
    F: Fn(f64) -> bool,
{
    sum_matrix.sum_if(condition_matrix, condition)
}
