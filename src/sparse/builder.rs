use super::SparseMatrix;

/// Configures the initial shape and default value of a [`SparseMatrix`].
///
/// Both dimensions default to 1.
pub struct SparseMatrixBuilder<T> {
    num_rows: usize,
    num_cols: usize,
    zero: T,
}

impl<T: Clone> SparseMatrixBuilder<T> {
    pub fn new(zero: T) -> Self {
        SparseMatrixBuilder {
            num_rows: 1,
            num_cols: 1,
            zero,
        }
    }

    pub fn rows(mut self, num_rows: usize) -> Self {
        self.num_rows = num_rows;
        self
    }

    pub fn cols(mut self, num_cols: usize) -> Self {
        self.num_cols = num_cols;
        self
    }

    pub fn build(self) -> SparseMatrix<T> {
        SparseMatrix::new(self.num_rows, self.num_cols, self.zero)
    }
}

impl<T: Clone + Default> Default for SparseMatrixBuilder<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
