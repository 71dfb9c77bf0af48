//! Advect: fixed-grid 3D vector fields and the `.advect` file format.
//!
//! This is the facade crate that re-exports the public API of the
//! `advect-*` sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use advect::prelude::*;
//!
//! // A rotation about the centre of the unit square.
//! let grid = generate(&|x: f64, y: f64| -> Sample {
//!     Sample::from_slice(&[-(y - 0.5), x - 0.5])
//! })
//! .unwrap();
//!
//! let bytes = advect::codec::encode(&grid);
//! assert_eq!(bytes.len(), FILE_SIZE);
//! assert_eq!(advect::codec::decode(&bytes).unwrap(), grid);
//!
//! // The same field written as an expression.
//! let expr: Expression = "-(y - 0.5), x - 0.5".parse().unwrap();
//! assert_eq!(generate(&expr).unwrap(), grid);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `advect-core` | `Vector3`, `Grid`, layout constants, `FieldError`, `FieldStats` |
//! | [`codec`] | `advect-codec` | Byte encoding and atomic file load/save |
//! | [`gen`] | `advect-gen` | Sample functions, the coordinate mesh, presets |
//! | [`expr`] | `advect-expr` | The field expression language |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Vectors, the grid, and layout constants (`advect-core`).
pub use advect_core as types;

/// Encoding, decoding, and file I/O (`advect-codec`).
///
/// [`codec::save`] replaces the target atomically; [`codec::load`] rejects
/// files shorter than [`types::FILE_SIZE`].
pub use advect_codec as codec;

/// Field generation (`advect-gen`).
pub use advect_gen as gen;

/// Expression language (`advect-expr`).
///
/// Parse text such as `"np.sin(pi * x), y ** 2"` into an
/// [`expr::Expression`], which is a sample function.
pub use advect_expr as expr;

/// Common imports.
///
/// ```rust
/// use advect::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use advect_core::{FieldError, FieldStats, Grid, Vector3, CELL_COUNT, FILE_SIZE, GRID_DIM};

    // I/O
    pub use advect_codec::{load, save};

    // Generation
    pub use advect_gen::{generate, MeshGrid, Preset, Sample, SampleFunction};

    // Expressions
    pub use advect_expr::{ExprError, Expression};
}
