use std::collections::BTreeMap;
use std::fmt;

use log::{debug, trace, warn};

use super::{Coord, MatrixShape, OrdinalIndex};

/// A 2D zero-based sparse matrix addressable by coordinates or by ordinal index.
///
/// Only explicitly stored cells are kept; every other cell reads as `zero`.
/// The shape is never stored: it is derived from the largest stored row and
/// column, so writing outside the current shape grows the matrix. Reading far
/// enough outside it grows the matrix as well, which is why [`get`] takes
/// `&mut self`.
///
/// The matrix always holds at least one entry, the anchor placed at the
/// bottom-right corner of the shape it was created with.
///
/// [`get`]: SparseMatrix::get
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T> {
    entries: BTreeMap<Coord, T>,
    zero: T,
}

impl<T: Clone> SparseMatrix<T> {
    /// Creates a `num_rows` x `num_cols` matrix whose only stored entry is `zero`
    /// at `(num_rows - 1, num_cols - 1)`.
    ///
    /// A zero dimension is raised to 1.
    pub fn new(num_rows: usize, num_cols: usize, zero: T) -> Self {
        if num_rows == 0 || num_cols == 0 {
            warn!(
                "Requested a {}x{} sparse matrix, using at least one row and one column",
                num_rows, num_cols
            );
        }
        let anchor = (num_rows.max(1) - 1, num_cols.max(1) - 1);

        let mut entries = BTreeMap::new();
        entries.insert(anchor, zero.clone());
        SparseMatrix { entries, zero }
    }

    /// Default value of every cell that is not stored.
    pub fn zero(&self) -> &T {
        &self.zero
    }

    /// Number of stored entries, anchor included.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Stored value at `coord`, without any growth side effect.
    pub fn stored(&self, coord: Coord) -> Option<&T> {
        self.entries.get(&coord)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.entries.contains_key(&coord)
    }

    /// Stored entries in row-major coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.entries.iter().map(|(&coord, value)| (coord, value))
    }

    /// Writes `value` at `coord`, replacing any stored value. A coordinate outside
    /// the current shape grows the matrix.
    pub fn set(&mut self, coord: Coord, value: T) {
        trace!("set {:?}", coord);
        self.entries.insert(coord, value);
    }

    pub fn set_at(&mut self, row: usize, col: usize, value: T) {
        self.set((row, col), value)
    }

    /// Writes `value` at the cell `idx` maps to under the current shape.
    pub fn set_index(&mut self, idx: usize, value: T) {
        let coord = self.index_to_coord(idx);
        self.set(coord, value)
    }

    /// Returns the value at `coord`, or `zero` when nothing is stored there.
    ///
    /// When `coord.0 > num_rows` or `coord.1 > num_cols`, `zero` is also stored at
    /// `coord`, so the read leaves the matrix grown exactly as `set(coord, zero)`
    /// would. A read at `num_rows` or `num_cols` itself does not grow the matrix.
    pub fn get(&mut self, coord: Coord) -> T {
        if let Some(value) = self.entries.get(&coord) {
            return value.clone();
        }
        if self.is_outside_bounds(coord) {
            debug!(
                "Read at {:?} outside {}x{}, expanding with the default value",
                coord,
                self.num_rows(),
                self.num_cols()
            );
            self.entries.insert(coord, self.zero.clone());
        }
        self.zero.clone()
    }

    pub fn get_at(&mut self, row: usize, col: usize) -> T {
        self.get((row, col))
    }

    /// Reads the cell `idx` maps to under the current shape.
    pub fn get_index(&mut self, idx: usize) -> T {
        let coord = self.index_to_coord(idx);
        self.get(coord)
    }

    fn is_outside_bounds(&self, coord: Coord) -> bool {
        coord.0 > self.num_rows() || coord.1 > self.num_cols()
    }
}

impl<T> MatrixShape for SparseMatrix<T> {
    fn num_rows(&self) -> usize {
        // Keys are ordered row first, so the last key holds the largest row.
        // Saturates at `usize::MAX` for a key in the last representable row.
        self.entries
            .keys()
            .next_back()
            .map_or(0, |&(row, _)| row)
            .saturating_add(1)
    }

    fn num_cols(&self) -> usize {
        self.entries
            .keys()
            .map(|&(_, col)| col)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }
}

impl<T: Clone + Default> Default for SparseMatrix<T> {
    fn default() -> Self {
        SparseMatrix::new(1, 1, T::default())
    }
}

impl<T: fmt::Debug> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sparse Matrix ({} rows and {} columns) with elements (default {:?}):",
            self.num_rows(),
            self.num_cols(),
            self.zero
        )?;

        let mut ordered: Vec<(&Coord, &T)> = self.entries.iter().collect();
        // Stable sort: cells sharing an ordinal index stay in key order.
        ordered.sort_by_key(|entry| self.coord_to_index(*entry.0));
        for ((row, col), value) in ordered {
            write!(f, "\n({}, {}) = {:?}", row, col, value)?;
        }
        Ok(())
    }
}
