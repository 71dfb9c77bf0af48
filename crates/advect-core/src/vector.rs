//! The [`Vector3`] cell value.

/// A single force vector: three IEEE-754 single-precision components.
///
/// No validation is applied. NaN and infinite components are legal
/// values; consumers must tolerate them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from three components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a planar vector; `z` is `0.0`.
    pub const fn from_xy(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Create a vector from `[x, y, z]`.
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self {
            x: a[0],
            y: a[1],
            z: a[2],
        }
    }

    /// Components as `[x, y, z]`, in wire order.
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// `true` when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Bit patterns of the components, for exact comparisons that must
    /// also hold for NaN payloads.
    pub fn to_bits(self) -> [u32; 3] {
        [self.x.to_bits(), self.y.to_bits(), self.z.to_bits()]
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_xy_zero_extends() {
        let v = Vector3::from_xy(1.0, 2.0);
        assert_eq!(v, Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(v.z.to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn array_order_is_xyz() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn magnitude_of_3_4_0() {
        assert_eq!(Vector3::from_xy(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vector3::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn non_finite_components_detected() {
        assert!(Vector3::ZERO.is_finite());
        assert!(!Vector3::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Vector3::new(0.0, f32::INFINITY, 0.0).is_finite());
        assert!(!Vector3::new(0.0, 0.0, f32::NEG_INFINITY).is_finite());
    }
}
