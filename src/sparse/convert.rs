use anyhow::bail;
use nalgebra::Scalar;
use nalgebra_sparse::CooMatrix;
use ndarray::ArrayView2;

use super::{MatrixShape, SparseMatrix};

impl<T: Clone> SparseMatrix<T> {
    /// Seeds a matrix from a dense 2D range, storing only the cells `keep` accepts.
    ///
    /// The anchor sits at the bottom-right corner of the range, so the result keeps
    /// the range's shape even when its last cells are filtered out.
    pub fn from_dense<F>(view: ArrayView2<'_, T>, zero: T, keep: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        let mut matrix = SparseMatrix::new(view.nrows(), view.ncols(), zero);
        for ((row, col), value) in view.indexed_iter() {
            if keep(value) {
                matrix.set((row, col), value.clone());
            }
        }
        matrix
    }

    /// Builds a `num_rows` x `num_cols` matrix from coordinate triplets.
    ///
    /// Triplets outside the given shape grow the matrix. Repeated coordinates keep
    /// the last value.
    pub fn try_from_triplets(
        num_rows: usize,
        num_cols: usize,
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
        zero: T,
    ) -> anyhow::Result<Self> {
        if row_indices.len() != col_indices.len() || col_indices.len() != values.len() {
            bail!(
                "Triplet lengths do not match: {} row indices, {} column indices, {} values",
                row_indices.len(),
                col_indices.len(),
                values.len()
            );
        }

        let mut matrix = SparseMatrix::new(num_rows, num_cols, zero);
        for ((row, col), value) in row_indices.into_iter().zip(col_indices).zip(values) {
            matrix.set((row, col), value);
        }
        Ok(matrix)
    }
}

impl<T: Scalar> SparseMatrix<T> {
    /// Copies every stored entry, anchor included, into a COO matrix of the
    /// current shape.
    pub fn to_coo(&self) -> CooMatrix<T> {
        let mut coo = CooMatrix::new(self.num_rows(), self.num_cols());
        for ((row, col), value) in self.iter() {
            coo.push(row, col, value.clone());
        }
        coo
    }

    pub fn from_coo(coo: &CooMatrix<T>, zero: T) -> Self {
        let mut matrix = SparseMatrix::new(coo.nrows(), coo.ncols(), zero);
        for (row, col, value) in coo.triplet_iter() {
            matrix.set((row, col), value.clone());
        }
        matrix
    }
}
