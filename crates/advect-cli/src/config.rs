//! Plot configuration and validation.

use std::error::Error;
use std::fmt;

use advect_core::GRID_DIM;

/// Options for the SVG quiver plot.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Draw every `stride`-th row and column. Must be in `1..=GRID_DIM`.
    pub stride: usize,
    /// Multiplier on the arrow length. The longest arrow spans
    /// `arrow_scale` grid spacings. Must be finite and positive.
    pub arrow_scale: f64,
    /// Width and height of the plot in pixels. Must be at least
    /// [`MIN_SIZE`](Self::MIN_SIZE).
    pub size: u32,
}

impl RenderConfig {
    pub const DEFAULT_STRIDE: usize = 4;
    pub const DEFAULT_ARROW_SCALE: f64 = 1.0;
    pub const DEFAULT_SIZE: u32 = 800;
    pub const MIN_SIZE: u32 = 64;

    /// Check the options before any output is produced.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stride == 0 || self.stride > GRID_DIM {
            return Err(ConfigError::InvalidStride {
                value: self.stride,
            });
        }
        if !self.arrow_scale.is_finite() || self.arrow_scale <= 0.0 {
            return Err(ConfigError::InvalidArrowScale {
                value: self.arrow_scale,
            });
        }
        if self.size < Self::MIN_SIZE {
            return Err(ConfigError::SizeTooSmall {
                configured: self.size,
            });
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            stride: Self::DEFAULT_STRIDE,
            arrow_scale: Self::DEFAULT_ARROW_SCALE,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// Errors detected by [`RenderConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Stride is zero or larger than the grid.
    InvalidStride {
        /// The invalid value.
        value: usize,
    },
    /// Arrow scale is NaN, infinite, zero, or negative.
    InvalidArrowScale {
        /// The invalid value.
        value: f64,
    },
    /// Plot size is below the minimum.
    SizeTooSmall {
        /// The configured size that was too small.
        configured: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStride { value } => {
                write!(f, "stride must be between 1 and {GRID_DIM}, got {value}")
            }
            Self::InvalidArrowScale { value } => {
                write!(f, "arrow scale must be finite and > 0, got {value}")
            }
            Self::SizeTooSmall { configured } => write!(
                f,
                "plot size must be at least {} px, got {configured}",
                RenderConfig::MIN_SIZE
            ),
        }
    }
}

impl Error for ConfigError {}
