//! Shared fixtures for the advect benchmarks.
//!
//! - [`EXPRESSIONS`]: expression programs from cheap to transcendental-heavy
//! - [`fixture_grid`]: a deterministic non-trivial grid
//! - [`parse_all`]: [`EXPRESSIONS`] parsed, paired with their labels

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use advect_core::Grid;
use advect_expr::{ExprError, Expression};

/// Labelled expression programs used by the generation benchmarks.
pub const EXPRESSIONS: [(&str, &str); 3] = [
    ("linear", "-(y - 0.5), x - 0.5"),
    ("trig", "np.sin(2 * pi * x) * np.cos(2 * pi * y), -np.cos(2 * pi * x) * np.sin(2 * pi * y)"),
    (
        "mixed",
        "np.exp(-((x - 0.5) ** 2 + (y - 0.5) ** 2) * 8), np.tanh(x - y), np.hypot(x, y) % 0.25",
    ),
];

/// A seeded random grid, identical across runs.
pub fn fixture_grid() -> Grid {
    advect_test_utils::random_grid(0xADEC)
}

/// Parse every entry of [`EXPRESSIONS`].
pub fn parse_all() -> Result<Vec<(&'static str, Expression)>, ExprError> {
    EXPRESSIONS
        .iter()
        .map(|(label, src)| Ok((*label, Expression::parse(src)?)))
        .collect()
}
