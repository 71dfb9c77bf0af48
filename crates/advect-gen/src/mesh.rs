//! Normalized sampling coordinates.
//!
//! The mesh uses matrix (`ij`) indexing: the first coordinate follows
//! the row index and the second follows the column index, so the cell
//! stored at `(row, col)` was sampled at `(row / 127, col / 127)`.

use advect_core::{cell_coords, GRID_DIM};

/// `n` evenly spaced values from `0.0` to `1.0`, both endpoints included.
///
/// Value `i` is `i / (n - 1)`. `linspace(1)` is `[0.0]`; `linspace(0)`
/// is empty.
pub fn linspace(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (n - 1) as f64;
            (0..n).map(|i| i as f64 / last).collect()
        }
    }
}

/// The normalized coordinate mesh over the 128×128 field.
#[derive(Clone, Debug)]
pub struct MeshGrid {
    axis: Vec<f64>,
}

impl MeshGrid {
    /// Build the mesh for [`GRID_DIM`] points per axis.
    pub fn new() -> Self {
        Self {
            axis: linspace(GRID_DIM),
        }
    }

    /// First coordinate at `(row, col)`; varies along rows.
    ///
    /// # Panics
    ///
    /// Panics if `row >= GRID_DIM`.
    pub fn x(&self, row: usize, _col: usize) -> f64 {
        self.axis[row]
    }

    /// Second coordinate at `(row, col)`; varies along columns.
    ///
    /// # Panics
    ///
    /// Panics if `col >= GRID_DIM`.
    pub fn y(&self, _row: usize, col: usize) -> f64 {
        self.axis[col]
    }

    /// `(x, y)` of the cell stored at record `index`.
    pub fn position(&self, index: usize) -> (f64, f64) {
        let (row, col) = cell_coords(index);
        (self.x(row, col), self.y(row, col))
    }

    /// The shared per-axis values.
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }
}

impl Default for MeshGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advect_core::cell_index;

    #[test]
    fn linspace_endpoints_exact() {
        let v = linspace(GRID_DIM);
        assert_eq!(v.len(), GRID_DIM);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[GRID_DIM - 1], 1.0);
        assert_eq!(v[1], 1.0 / 127.0);
    }

    #[test]
    fn linspace_degenerate_sizes() {
        assert!(linspace(0).is_empty());
        assert_eq!(linspace(1), vec![0.0]);
        assert_eq!(linspace(2), vec![0.0, 1.0]);
        assert_eq!(linspace(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_is_strictly_increasing() {
        let v = linspace(GRID_DIM);
        assert!(v.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn x_follows_rows_y_follows_columns() {
        let mesh = MeshGrid::new();
        assert_eq!(mesh.x(127, 0), 1.0);
        assert_eq!(mesh.y(127, 0), 0.0);
        assert_eq!(mesh.x(0, 127), 0.0);
        assert_eq!(mesh.y(0, 127), 1.0);
    }

    #[test]
    fn position_agrees_with_cell_index() {
        let mesh = MeshGrid::new();
        let (x, y) = mesh.position(cell_index(10, 20));
        assert_eq!(x, 10.0 / 127.0);
        assert_eq!(y, 20.0 / 127.0);
    }
}
