//! Field generation.

use advect_core::{FieldError, Grid, Vector3};

use crate::mesh::MeshGrid;
use crate::sample::SampleFunction;

/// Sample `f` at every mesh point and collect the results into a grid.
///
/// Cells are visited row outer, column inner, which is the codec's
/// record order, so the result can be encoded without reordering. Values
/// are computed in `f64` and narrowed to `f32`; a 2-component sample gets
/// `z = 0.0`. Non-finite values are stored as-is.
///
/// # Errors
///
/// [`FieldError::Arity`] for the first sample that does not have 2 or 3
/// components. No further samples are evaluated.
pub fn generate<F>(f: &F) -> Result<Grid, FieldError>
where
    F: SampleFunction + ?Sized,
{
    let mesh = MeshGrid::new();
    Grid::try_from_fn(|row, col| {
        let sample = f.sample(mesh.x(row, col), mesh.y(row, col));
        to_vector(&sample).ok_or(FieldError::Arity {
            row,
            col,
            found: sample.len(),
        })
    })
}

fn to_vector(sample: &[f64]) -> Option<Vector3> {
    match *sample {
        [x, y] => Some(Vector3::from_xy(x as f32, y as f32)),
        [x, y, z] => Some(Vector3::new(x as f32, y as f32, z as f32)),
        _ => None,
    }
}
