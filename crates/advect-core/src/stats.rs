//! Summary statistics over a [`Grid`].
//!
//! Fields are never validated, so a consumer that wants to warn about
//! NaN or infinite vectors computes [`FieldStats`] and reports them.

use crate::grid::{cell_coords, Grid};

/// Magnitude statistics for one grid.
///
/// `min_magnitude`, `max_magnitude`, and `mean_magnitude` cover finite
/// vectors only and are `None` when no vector is finite.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStats {
    /// Smallest finite magnitude.
    pub min_magnitude: Option<f32>,
    /// Largest finite magnitude.
    pub max_magnitude: Option<f32>,
    /// Mean finite magnitude.
    pub mean_magnitude: Option<f64>,
    /// Number of vectors with a NaN or infinite component.
    pub non_finite: usize,
    /// `(row, col)` of the first non-finite vector in record order.
    pub first_non_finite: Option<(usize, usize)>,
    /// Number of exactly-zero vectors.
    pub zero: usize,
}

impl FieldStats {
    /// Scan `grid` once in record order.
    pub fn compute(grid: &Grid) -> Self {
        let mut min: Option<f32> = None;
        let mut max: Option<f32> = None;
        let mut sum = 0.0f64;
        let mut finite = 0usize;
        let mut non_finite = 0usize;
        let mut first_non_finite = None;
        let mut zero = 0usize;

        for (index, v) in grid.iter().enumerate() {
            if !v.is_finite() {
                non_finite += 1;
                first_non_finite.get_or_insert(cell_coords(index));
                continue;
            }
            let m = v.magnitude();
            // Finite components can still overflow the length.
            if !m.is_finite() {
                non_finite += 1;
                first_non_finite.get_or_insert(cell_coords(index));
                continue;
            }
            if m == 0.0 {
                zero += 1;
            }
            min = Some(min.map_or(m, |cur| cur.min(m)));
            max = Some(max.map_or(m, |cur| cur.max(m)));
            sum += f64::from(m);
            finite += 1;
        }

        Self {
            min_magnitude: min,
            max_magnitude: max,
            mean_magnitude: (finite > 0).then(|| sum / finite as f64),
            non_finite,
            first_non_finite,
            zero,
        }
    }

    /// `true` when every vector is finite.
    pub fn all_finite(&self) -> bool {
        self.non_finite == 0
    }
}
