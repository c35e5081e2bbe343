pub mod sparse;
pub mod sumif;
mod utils;

pub use sparse::{Coord, MatrixShape, OrdinalIndex, SparseMatrix, SparseMatrixBuilder};
pub use sumif::{sum_if, sum_if_by, MatrixSumIf};
pub use utils::NumericOps;
