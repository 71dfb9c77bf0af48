//! Error types for field encoding, decoding, and generation.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors raised by the codec, the generator, and the file layer.
///
/// Every variant is fatal for the operation that produced it; nothing
/// in the workspace retries or repairs.
#[derive(Debug)]
pub enum FieldError {
    /// The input holds fewer bytes than a complete field requires.
    Format {
        /// Byte count a complete field occupies.
        required: usize,
        /// Byte count actually available.
        found: usize,
    },
    /// A sample function returned a component count other than 2 or 3.
    Arity {
        /// Row of the offending sample.
        row: usize,
        /// Column of the offending sample.
        col: usize,
        /// Number of components returned.
        found: usize,
    },
    /// A grid was assembled from the wrong number of vectors.
    GridSize {
        /// Number of vectors supplied.
        found: usize,
    },
    /// An I/O error occurred while reading or writing a field.
    Io(io::Error),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format { required, found } => write!(
                f,
                "truncated field data: need {required} bytes, found {found}"
            ),
            Self::Arity { row, col, found } => write!(
                f,
                "sample at (row {row}, col {col}) has {found} components, expected 2 or 3"
            ),
            Self::GridSize { found } => write!(
                f,
                "grid needs exactly {} vectors, got {found}",
                crate::CELL_COUNT
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for FieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FieldError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
