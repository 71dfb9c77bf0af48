//! Binary codec for `.advect` vector-field files.
//!
//! # Format
//!
//! ```text
//! [Record 0] [Record 1] ... [Record 16383]
//! Record = [x f32 LE] [y f32 LE] [z f32 LE]
//! ```
//!
//! There is no header, magic number, or length prefix: the layout is
//! implied by the fixed 128×128 grid. Record `k` holds cell
//! `(k / 128, k % 128)` (see [`advect_core::cell_coords`]).
//!
//! - [`encode`] / [`decode`] convert between a [`Grid`](advect_core::Grid)
//!   and an in-memory buffer
//! - [`write_grid`] / [`read_grid`] do the same over any `Write` / `Read`
//! - [`load`] / [`save`] wrap the filesystem; `save` replaces the target
//!   atomically

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod file;

pub use codec::{decode, encode, read_grid, write_grid};
pub use file::{load, save};
