//! The [`SampleFunction`] trait.

use smallvec::SmallVec;

/// Components returned by one evaluation of a sample function.
///
/// A valid sample has 2 or 3 components. Any other length is reported
/// by [`generate`](crate::generate) as an arity error; it is not an
/// error to construct one.
pub type Sample = SmallVec<[f64; 3]>;

/// A pure function from a normalized coordinate `(x, y) ∈ [0, 1]²` to a
/// force vector.
///
/// Implemented for every `Fn(f64, f64) -> Sample`:
///
/// ```
/// use advect_gen::{generate, Sample};
/// use smallvec::smallvec;
///
/// let grid = generate(&|x: f64, y: f64| -> Sample { smallvec![y, -x] }).unwrap();
/// assert_eq!(grid.get(127, 0).unwrap().y, -1.0);
/// ```
pub trait SampleFunction {
    /// Evaluate at one mesh point.
    fn sample(&self, x: f64, y: f64) -> Sample;
}

impl<F> SampleFunction for F
where
    F: Fn(f64, f64) -> Sample,
{
    fn sample(&self, x: f64, y: f64) -> Sample {
        self(x, y)
    }
}
