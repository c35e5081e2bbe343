pub mod builder;
pub mod convert;
pub mod matrix;

pub use builder::SparseMatrixBuilder;
pub use matrix::SparseMatrix;

/// A `(row, column)` position in a matrix.
pub type Coord = (usize, usize);

pub trait MatrixShape {
    fn num_rows(&self) -> usize;

    fn num_cols(&self) -> usize;

    fn shape(&self) -> (usize, usize) {
        (self.num_rows(), self.num_cols())
    }
}

/// Mapping between ordinal indices and coordinates, evaluated against the
/// current shape of the matrix.
///
/// The forward mapping takes the row as `idx % num_cols` and the column as
/// `idx / num_rows`. For square matrices this walks the matrix column by
/// column:
///
/// ```text
///    0 1 2
///   ------
/// 0| 0 3 6
/// 1| 1 4 7
/// 2| 2 5 8
/// ```
///
/// For non-square matrices the two mappings are not inverses of each other,
/// and an index may land on a different cell once the matrix grows.
pub trait OrdinalIndex: MatrixShape {
    fn index_to_coord(&self, idx: usize) -> Coord {
        (idx % self.num_cols(), idx / self.num_rows())
    }

    /// Ordinal position of `coord`. Widened so that coordinates far outside the
    /// current shape cannot overflow.
    fn coord_to_index(&self, coord: Coord) -> u128 {
        coord.0 as u128 + self.num_cols() as u128 * coord.1 as u128
    }
}

impl<M: MatrixShape> OrdinalIndex for M {}
