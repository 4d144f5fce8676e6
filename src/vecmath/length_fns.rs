//! Length helpers shared by the Length impls and the free functions
//! re-exported from vecmath.

use crate::float::Float;
use crate::math::sum_of_squares;

use super::length::norm;
use super::{Tuple2, Tuple3};

pub fn length_squared3<V>(v: &V) -> Float
where
    V: Tuple3<Float>,
{
    sum_of_squares(&[v.x(), v.y(), v.z()])
}

pub fn length3<V>(v: &V) -> Float
where
    V: Tuple3<Float>,
{
    norm(&[v.x(), v.y(), v.z()])
}

pub fn length_squared2<V>(v: &V) -> Float
where
    V: Tuple2<Float>,
{
    sum_of_squares(&[v.x(), v.y()])
}

/// Planar length `sqrt(x^2 + y^2)` of anything exposing `x` and `y`.
///
/// Any other field the value carries is ignored, including `z`.
pub fn length2<V>(v: &V) -> Float
where
    V: Tuple2<Float>,
{
    norm(&[v.x(), v.y()])
}
