//! Core types for the `.advect` vector-field format.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data model shared by the codec and the generator: the fixed
//! 128×128 [`Grid`] of [`Vector3`] forces, the single row-major indexing
//! contract both sides agree on, and the [`FieldError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod stats;
pub mod vector;

pub use error::FieldError;
pub use grid::{cell_coords, cell_index, Grid, CELL_COUNT, FILE_SIZE, GRID_DIM, RECORD_SIZE};
pub use stats::FieldStats;
pub use vector::Vector3;
