//! The fixed-size [`Grid`] and the indexing contract shared by every
//! producer and consumer of field data.
//!
//! The format carries no dimension metadata. The only thing tying the
//! generator to the codec is the ordering defined here: record `k` holds
//! cell `(k / GRID_DIM, k % GRID_DIM)`, so the column index varies
//! fastest. Nothing else in the workspace computes that mapping itself.

use crate::error::FieldError;
use crate::vector::Vector3;

/// Cells along each side of the grid.
pub const GRID_DIM: usize = 128;

/// Total number of cells (and records in a file).
pub const CELL_COUNT: usize = GRID_DIM * GRID_DIM;

/// Bytes per record: three little-endian `f32`.
pub const RECORD_SIZE: usize = 12;

/// Exact size of an encoded field.
pub const FILE_SIZE: usize = CELL_COUNT * RECORD_SIZE;

/// Record index of cell `(row, col)`.
///
/// # Panics
///
/// Debug builds panic when either coordinate is `>= GRID_DIM`.
#[inline]
pub const fn cell_index(row: usize, col: usize) -> usize {
    debug_assert!(row < GRID_DIM && col < GRID_DIM);
    row * GRID_DIM + col
}

/// Cell `(row, col)` stored at record `index`. Inverse of [`cell_index`].
#[inline]
pub const fn cell_coords(index: usize) -> (usize, usize) {
    debug_assert!(index < CELL_COUNT);
    (index / GRID_DIM, index % GRID_DIM)
}

/// A 128×128 field of [`Vector3`] in row-major, column-fastest order.
///
/// Every constructor guarantees exactly [`CELL_COUNT`] vectors, so a
/// grid of the wrong size cannot exist. Grids are immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    vectors: Vec<Vector3>,
}

impl Grid {
    /// A grid with every cell set to `v`.
    pub fn filled(v: Vector3) -> Self {
        Self {
            vectors: vec![v; CELL_COUNT],
        }
    }

    /// Take ownership of a flat vector list already in record order.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::GridSize`] unless `vectors.len() == CELL_COUNT`.
    pub fn from_vectors(vectors: Vec<Vector3>) -> Result<Self, FieldError> {
        if vectors.len() != CELL_COUNT {
            return Err(FieldError::GridSize {
                found: vectors.len(),
            });
        }
        Ok(Self { vectors })
    }

    /// Build a grid by calling `f(row, col)` for every cell, row outer
    /// and column inner. The first error aborts construction.
    pub fn try_from_fn<E, F>(mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize, usize) -> Result<Vector3, E>,
    {
        let mut vectors = Vec::with_capacity(CELL_COUNT);
        for index in 0..CELL_COUNT {
            let (row, col) = cell_coords(index);
            vectors.push(f(row, col)?);
        }
        Ok(Self { vectors })
    }

    /// Infallible counterpart of [`try_from_fn`](Self::try_from_fn).
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Vector3,
    {
        let mut vectors = Vec::with_capacity(CELL_COUNT);
        for index in 0..CELL_COUNT {
            let (row, col) = cell_coords(index);
            vectors.push(f(row, col));
        }
        Self { vectors }
    }

    /// The vector at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Vector3> {
        if row >= GRID_DIM || col >= GRID_DIM {
            return None;
        }
        Some(self.vectors[cell_index(row, col)])
    }

    /// All vectors in record order.
    pub fn as_slice(&self) -> &[Vector3] {
        &self.vectors
    }

    /// Iterate vectors in record order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vector3> {
        self.vectors.iter()
    }

    /// Iterate `(row, col, vector)` in record order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Vector3)> + '_ {
        self.vectors.iter().enumerate().map(|(index, v)| {
            let (row, col) = cell_coords(index);
            (row, col, *v)
        })
    }

    /// Consume the grid, returning the flat vector list.
    pub fn into_vectors(self) -> Vec<Vector3> {
        self.vectors
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::filled(Vector3::ZERO)
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Vector3;
    type IntoIter = std::slice::Iter<'a, Vector3>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}
