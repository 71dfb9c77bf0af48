//! Built-in sample functions.
//!
//! Radial presets are centred on the middle of the field, `(0.5, 0.5)`.
//! Let `cx = x - 0.5`, `cy = y - 0.5`:
//!
//! | Preset | Vector |
//! |--------|--------|
//! | `zero` | `(0, 0)` |
//! | `uniform` | `(1, 0)` |
//! | `vortex` | `(-cy, cx)` |
//! | `source` | `(cx, cy)` |
//! | `sink` | `(-cx, -cy)` |
//! | `shear` | `(cy, 0)` |
//! | `saddle` | `(cx, -cy)` |
//! | `fountain` | `(cx, cy, 1 - 2·√(cx² + cy²))` |

use std::fmt;
use std::str::FromStr;

use smallvec::smallvec;

use crate::sample::{Sample, SampleFunction};

/// A named built-in field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// No force anywhere.
    Zero,
    /// Constant unit push along `+x`.
    Uniform,
    /// Counter-clockwise rotation about the centre.
    Vortex,
    /// Outward flow from the centre.
    Source,
    /// Inward flow towards the centre.
    Sink,
    /// Flow along `x` whose strength grows with `y`.
    Shear,
    /// Hyperbolic point flow: out along `x`, in along `y`.
    Saddle,
    /// Outward flow with upward lift near the centre.
    Fountain,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Preset; 8] = [
        Preset::Zero,
        Preset::Uniform,
        Preset::Vortex,
        Preset::Source,
        Preset::Sink,
        Preset::Shear,
        Preset::Saddle,
        Preset::Fountain,
    ];

    /// Lower-case name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Uniform => "uniform",
            Self::Vortex => "vortex",
            Self::Source => "source",
            Self::Sink => "sink",
            Self::Shear => "shear",
            Self::Saddle => "saddle",
            Self::Fountain => "fountain",
        }
    }
}

impl SampleFunction for Preset {
    fn sample(&self, x: f64, y: f64) -> Sample {
        let cx = x - 0.5;
        let cy = y - 0.5;
        match self {
            Self::Zero => smallvec![0.0, 0.0],
            Self::Uniform => smallvec![1.0, 0.0],
            Self::Vortex => smallvec![-cy, cx],
            Self::Source => smallvec![cx, cy],
            Self::Sink => smallvec![-cx, -cy],
            Self::Shear => smallvec![cy, 0.0],
            Self::Saddle => smallvec![cx, -cy],
            Self::Fountain => smallvec![cx, cy, 1.0 - 2.0 * cx.hypot(cy)],
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`Preset::from_str`] for an unrecognized name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsePresetError {
    /// The name that was not recognized.
    pub name: String,
}

impl fmt::Display for ParsePresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown preset '{}' (expected one of: ", self.name)?;
        for (i, preset) in Preset::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(preset.name())?;
        }
        f.write_str(")")
    }
}

impl std::error::Error for ParsePresetError {}

impl FromStr for Preset {
    type Err = ParsePresetError;

    /// Case-insensitive lookup by [`name`](Preset::name).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParsePresetError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate;
    use advect_core::{Vector3, GRID_DIM};

    #[test]
    fn names_roundtrip_through_from_str() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
            assert_eq!(preset.to_string(), preset.name());
        }
    }

    #[test]
    fn from_str_ignores_case_and_padding() {
        assert_eq!(" Vortex ".parse::<Preset>(), Ok(Preset::Vortex));
        assert_eq!("SINK".parse::<Preset>(), Ok(Preset::Sink));
    }

    #[test]
    fn unknown_name_lists_choices() {
        let err = "tornado".parse::<Preset>().unwrap_err();
        assert_eq!(err.name, "tornado");
        let msg = err.to_string();
        assert!(msg.contains("'tornado'"), "{msg}");
        assert!(msg.contains("vortex"), "{msg}");
        assert!(msg.contains("fountain"), "{msg}");
    }

    #[test]
    fn every_preset_generates() {
        for preset in Preset::ALL {
            let grid = generate(&preset).unwrap();
            assert!(grid.iter().all(|v| v.is_finite()), "{preset} produced non-finite");
        }
    }

    #[test]
    fn zero_preset_is_all_zero() {
        let grid = generate(&Preset::Zero).unwrap();
        assert!(grid.iter().all(|v| *v == Vector3::ZERO));
    }

    #[test]
    fn vortex_is_perpendicular_to_radius() {
        for (x, y) in [(0.0, 0.0), (1.0, 0.25), (0.3, 0.9)] {
            let s = Preset::Vortex.sample(x, y);
            let (cx, cy) = (x - 0.5, y - 0.5);
            assert!((s[0] * cx + s[1] * cy).abs() < 1e-12);
        }
    }

    #[test]
    fn source_and_sink_are_opposite() {
        let source = generate(&Preset::Source).unwrap();
        let sink = generate(&Preset::Sink).unwrap();
        for (a, b) in source.iter().zip(sink.iter()) {
            assert_eq!(a.x, -b.x);
            assert_eq!(a.y, -b.y);
        }
    }

    #[test]
    fn fountain_lifts_at_centre_only() {
        let s = Preset::Fountain.sample(0.5, 0.5);
        assert_eq!(s.len(), 3);
        assert_eq!(s[2], 1.0);
        let corner = Preset::Fountain.sample(0.0, 0.0);
        assert!(corner[2] < 0.0);
    }

    #[test]
    fn shear_grows_along_columns() {
        let grid = generate(&Preset::Shear).unwrap();
        let left = grid.get(10, 0).unwrap().x;
        let right = grid.get(10, GRID_DIM - 1).unwrap().x;
        assert!(left < 0.0 && right > 0.0);
    }
}
