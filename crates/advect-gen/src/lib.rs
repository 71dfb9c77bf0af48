//! Procedural generation of vector fields.
//!
//! [`generate`] samples a [`SampleFunction`] once per cell of a
//! normalized 128×128 [`MeshGrid`] and assembles the results into a
//! [`Grid`](advect_core::Grid) in codec record order.
//!
//! Sample functions are plain closures returning a [`Sample`], built-in
//! [`Preset`]s, or anything else implementing the trait (the
//! `advect-expr` crate compiles textual expressions into one).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generate;
pub mod mesh;
pub mod presets;
pub mod sample;

pub use generate::generate;
pub use mesh::{linspace, MeshGrid};
pub use presets::{ParsePresetError, Preset};
pub use sample::{Sample, SampleFunction};
