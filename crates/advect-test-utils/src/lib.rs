//! Test fixtures for advect development.
//!
//! Provides deterministic grids ([`random_grid`], [`ramp_grid`]) and
//! misbehaving `Read` implementations ([`ChunkedReader`],
//! [`FailingReader`]) for exercising the codec's stream paths.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod readers;

pub use readers::{ChunkedReader, FailingReader};

use advect_core::{Grid, Vector3, GRID_DIM};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A grid of finite pseudo-random vectors in `[-10, 10)³`.
///
/// The same seed always yields the same grid.
pub fn random_grid(seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::from_fn(|_, _| {
        Vector3::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
        )
    })
}

/// A grid whose vector at `(row, col)` is `(row, col, row * GRID_DIM + col)`.
///
/// Makes transposition and off-by-one errors obvious in assertions.
pub fn ramp_grid() -> Grid {
    Grid::from_fn(|row, col| {
        Vector3::new(row as f32, col as f32, (row * GRID_DIM + col) as f32)
    })
}
