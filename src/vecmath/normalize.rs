use std::ops::{Add, Div, Mul};

use crate::{float::Float, math::Sqrt};

use super::{has_nan::HasNan, length::Length, length_fns::length3, Tuple3, Vector3f};

pub trait Normalize<T>: HasNan + Length<T>
where
    Self: Sized + Div<T, Output = Self>,
    T: Mul<Output = T> + Add<Output = T> + Sqrt,
{
    fn normalize(self) -> Self {
        let len = self.length();
        debug_assert!(!self.has_nan());
        self / len
    }
}

/// Returns a fresh unit vector pointing the same way as `v`, measured on
/// all three axes.
///
/// A zero-length input is not guarded: the components come back NaN.
pub fn normalized3<V>(v: &V) -> Vector3f
where
    V: Tuple3<Float>,
{
    let len = length3(v);
    Vector3f {
        x: v.x() / len,
        y: v.y() / len,
        z: v.z() / len,
    }
}
