use super::has_nan::{has_nan2, has_nan3, HasNan};
use super::length::Length;
use super::length_fns::{length2, length3, length_squared2, length_squared3};
use super::normalize::Normalize;
use super::tuple::{Tuple2, Tuple3};
use crate::float::Float;
use auto_ops::{impl_op_ex, impl_op_ex_commutative};

// ---------------------------------------------------------------------------
//        Vector2f
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2f {
    pub x: Float,
    pub y: Float,
}

impl Vector2f {
    /// All zeroes.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// A unit-length vector pointing along the positive X axis.
    pub const X: Self = Self { x: 1.0, y: 0.0 };

    /// A unit-length vector pointing along the positive Y axis.
    pub const Y: Self = Self { x: 0.0, y: 1.0 };
}

impl Tuple2<Float> for Vector2f {
    fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    fn x(&self) -> Float {
        self.x
    }

    fn y(&self) -> Float {
        self.y
    }
}

impl HasNan for Vector2f {
    fn has_nan(&self) -> bool {
        has_nan2(self)
    }
}

impl Length<Float> for Vector2f {
    fn length_squared(&self) -> Float {
        length_squared2(self)
    }

    fn length(&self) -> Float {
        length2(self)
    }
}

impl Normalize<Float> for Vector2f {}

impl Default for Vector2f {
    fn default() -> Self {
        Self::ZERO
    }
}

impl_op_ex!(-|v: &Vector2f| -> Vector2f { Vector2f::new(-v.x, -v.y) });
impl_op_ex!(+|v1: &Vector2f, v2: &Vector2f| -> Vector2f { Vector2f::new(v1.x + v2.x, v1.y + v2.y) });
impl_op_ex!(-|v1: &Vector2f, v2: &Vector2f| -> Vector2f { Vector2f::new(v1.x - v2.x, v1.y - v2.y) });
impl_op_ex_commutative!(*|v: &Vector2f, s: Float| -> Vector2f { Vector2f::new(v.x * s, v.y * s) });
impl_op_ex!(/|v: &Vector2f, s: Float| -> Vector2f { Vector2f::new(v.x / s, v.y / s) });

impl From<[Float; 2]> for Vector2f {
    fn from(value: [Float; 2]) -> Self {
        Vector2f::new(value[0], value[1])
    }
}

impl From<(Float, Float)> for Vector2f {
    fn from(value: (Float, Float)) -> Self {
        Vector2f::new(value.0, value.1)
    }
}

// ---------------------------------------------------------------------------
//        NamedVector2f
// ---------------------------------------------------------------------------

/// A planar vector carrying a display label.
///
/// The label plays no part in any numeric operation; the value is accepted
/// wherever a `Tuple2<Float>` is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NamedVector2f {
    pub name: String,
    pub x: Float,
    pub y: Float,
}

impl NamedVector2f {
    pub fn named(name: impl Into<String>, x: Float, y: Float) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

impl Tuple2<Float> for NamedVector2f {
    /// Builds an unlabelled value.
    fn new(x: Float, y: Float) -> Self {
        Self {
            name: String::new(),
            x,
            y,
        }
    }

    fn x(&self) -> Float {
        self.x
    }

    fn y(&self) -> Float {
        self.y
    }
}

impl HasNan for NamedVector2f {
    fn has_nan(&self) -> bool {
        has_nan2(self)
    }
}

impl Length<Float> for NamedVector2f {
    fn length_squared(&self) -> Float {
        length_squared2(self)
    }

    fn length(&self) -> Float {
        length2(self)
    }
}

impl From<&NamedVector2f> for Vector2f {
    fn from(value: &NamedVector2f) -> Self {
        Vector2f::new(value.x, value.y)
    }
}

// ---------------------------------------------------------------------------
//        Vector3f
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    /// All zeroes.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// A unit-length vector pointing along the positive X axis.
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    /// A unit-length vector pointing along the positive Y axis.
    pub const Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// A unit-length vector pointing along the positive Z axis.
    pub const Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };
}

impl Tuple3<Float> for Vector3f {
    fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    fn x(&self) -> Float {
        self.x
    }

    fn y(&self) -> Float {
        self.y
    }

    fn z(&self) -> Float {
        self.z
    }
}

// A spatial vector also has the planar shape; planar operations drop z.
impl Tuple2<Float> for Vector3f {
    fn new(x: Float, y: Float) -> Self {
        Self { x, y, z: 0.0 }
    }

    fn x(&self) -> Float {
        self.x
    }

    fn y(&self) -> Float {
        self.y
    }
}

impl HasNan for Vector3f {
    fn has_nan(&self) -> bool {
        has_nan3(self)
    }
}

impl Length<Float> for Vector3f {
    fn length_squared(&self) -> Float {
        length_squared3(self)
    }

    fn length(&self) -> Float {
        length3(self)
    }
}

impl Normalize<Float> for Vector3f {}

impl Default for Vector3f {
    fn default() -> Self {
        Self::ZERO
    }
}

impl_op_ex!(-|v: &Vector3f| -> Vector3f { Vector3f { x: -v.x, y: -v.y, z: -v.z } });
impl_op_ex!(+|v1: &Vector3f, v2: &Vector3f| -> Vector3f {
    Vector3f { x: v1.x + v2.x, y: v1.y + v2.y, z: v1.z + v2.z }
});
impl_op_ex!(-|v1: &Vector3f, v2: &Vector3f| -> Vector3f {
    Vector3f { x: v1.x - v2.x, y: v1.y - v2.y, z: v1.z - v2.z }
});
impl_op_ex_commutative!(*|v: &Vector3f, s: Float| -> Vector3f {
    Vector3f { x: v.x * s, y: v.y * s, z: v.z * s }
});
impl_op_ex!(/|v: &Vector3f, s: Float| -> Vector3f {
    Vector3f { x: v.x / s, y: v.y / s, z: v.z / s }
});

impl From<[Float; 3]> for Vector3f {
    fn from(value: [Float; 3]) -> Self {
        Vector3f {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl From<(Float, Float, Float)> for Vector3f {
    fn from(value: (Float, Float, Float)) -> Self {
        Vector3f {
            x: value.0,
            y: value.1,
            z: value.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        vecmath::{length2, normalized3, HasNan, Length, Normalize, Tuple2, Tuple3},
        Float,
    };

    use super::{NamedVector2f, Vector2f, Vector3f};

    use float_cmp::approx_eq;

    #[test]
    fn has_nan() {
        let v = Vector2f { x: Float::NAN, y: 0.0 };
        assert!(v.has_nan());

        let v = Vector3f::from([0.0, Float::NAN, 0.0]);
        assert!(v.has_nan());

        assert!(!Vector3f::X.has_nan());
    }

    #[test]
    fn vector_negation() {
        let vec = Vector2f { x: 1.0, y: 2.0 };
        assert_eq!(Vector2f { x: -1.0, y: -2.0 }, -vec);
        let vec = Vector3f::from([1.0, 2.0, 3.0]);
        assert_eq!(Vector3f::from([-1.0, -2.0, -3.0]), -vec);
    }

    #[test]
    fn planar_length() {
        let v = Vector2f { x: 3.0, y: 4.0 };
        assert_eq!(5.0, v.length());
        assert_eq!(25.0, v.length_squared());

        let v = Vector2f { x: -3.0, y: -4.0 };
        assert_eq!(5.0, length2(&v));
    }

    #[test]
    fn planar_length_of_zero_is_zero() {
        assert_eq!(0.0, length2(&Vector2f::ZERO));
    }

    #[test]
    fn planar_length_matches_formula() {
        for (x, y) in [(1.0, 1.0), (0.5, -2.0), (-7.0, 24.0), (1e3, 1e-3)] {
            let v = Vector2f { x, y };
            let expected = Float::sqrt(x * x + y * y);
            assert!(approx_eq!(Float, expected, length2(&v)));
            assert!(length2(&v) >= 0.0);
        }
    }

    #[test]
    fn planar_length_ignores_the_label() {
        let v = NamedVector2f::named("Zee", 3.0, 4.0);
        assert_eq!(5.0, length2(&v));
        assert_eq!(5.0, v.length());
        assert_eq!(Vector2f { x: 3.0, y: 4.0 }, Vector2f::from(&v));
    }

    #[test]
    fn planar_length_of_a_spatial_vector_drops_z() {
        let v = Vector3f::from([3.0, 4.0, 9.0]);
        assert_eq!(5.0, length2(&v));
        assert_eq!(<Vector3f as Tuple2<Float>>::new(3.0, 4.0).z, 0.0);
    }

    #[test]
    fn planar_length_propagates_nan() {
        let v = Vector2f { x: Float::NAN, y: 4.0 };
        assert!(length2(&v).is_nan());
    }

    #[test]
    fn spatial_length() {
        let v = Vector3f::from([2.0, 3.0, 6.0]);
        assert_eq!(7.0, v.length());
        assert_eq!(49.0, v.length_squared());
    }

    #[test]
    fn vector_normalize() {
        let v = Vector2f { x: 10.0, y: 0.0 };
        assert_eq!(Vector2f::X, v.normalize());

        let v = Vector3f::from([0.0, 10.0, 0.0]);
        assert_eq!(Vector3f::Y, v.normalize());
    }

    #[test]
    fn normalize_uses_all_three_axes() {
        let n = normalized3(&Vector3f::from([3.0, 4.0, 5.0]));
        let len = Float::sqrt(50.0);
        assert!(approx_eq!(Float, 3.0 / len, n.x, ulps = 4));
        assert!(approx_eq!(Float, 4.0 / len, n.y, ulps = 4));
        assert!(approx_eq!(Float, 5.0 / len, n.z, ulps = 4));
        assert!(approx_eq!(Float, 1.0, n.length(), epsilon = 1e-6));
    }

    #[test]
    fn normalize_trait_and_free_function_agree() {
        let v = Vector3f::from([1.0, -2.0, 2.0]);
        assert_eq!(normalized3(&v), v.normalize());
        assert_eq!(Vector3f::from([1.0 / 3.0, -2.0 / 3.0, 2.0 / 3.0]), v / 3.0);
    }

    #[test]
    fn normalize_returns_a_fresh_value() {
        let v = Vector3f::from([0.0, 0.0, 4.0]);
        let n = normalized3(&v);
        assert_eq!(Vector3f::Z, n);
        assert_eq!(Vector3f::from([0.0, 0.0, 4.0]), v);
    }

    #[test]
    fn normalize_zero_length_is_nan() {
        let n = normalized3(&Vector3f::ZERO);
        assert!(n.has_nan());
    }

    #[test]
    fn arithmetic() {
        let a = Vector3f::from([1.0, 2.0, 3.0]);
        let b = Vector3f::from([1.0, 1.0, 1.0]);
        assert_eq!(Vector3f::from([2.0, 3.0, 4.0]), a + b);
        assert_eq!(Vector3f::from([0.0, 1.0, 2.0]), a - b);
        assert_eq!(Vector3f::from([2.0, 4.0, 6.0]), 2.0 * a);
        assert_eq!(Vector2f { x: 2.0, y: 2.0 }, Vector2f::from((1.0, 1.0)) * 2.0);
        assert_eq!(Vector3f::from((1.0, 2.0, 3.0)), a);
        assert_eq!(1.0, <Vector3f as Tuple3<Float>>::z(&b));
    }
}
