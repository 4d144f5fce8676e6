use std::ops::{Add, Mul};

use crate::{
    float::Float,
    math::{sum_of_squares, Sqrt},
};

use super::has_nan::HasNan;

pub trait Length<T>: HasNan
where
    T: Mul<Output = T> + Add<Output = T> + Sqrt,
{
    fn length_squared(&self) -> T;
    fn length(&self) -> T;
}

/// Euclidean norm of an arbitrary number of coordinates.
///
/// Every fixed-arity length in this crate goes through here, so a 3D value
/// can never be measured with only two of its axes.
/// NaN in any coordinate makes the result NaN.
pub fn norm(coords: &[Float]) -> Float {
    sum_of_squares(coords).sqrt()
}
