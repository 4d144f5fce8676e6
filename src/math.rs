use crate::float::Float;

pub trait Sqrt {
    fn sqrt(self) -> Self;
}

impl Sqrt for Float {
    fn sqrt(self) -> Self {
        Float::sqrt(self)
    }
}

/// Sum of squares of an arbitrary number of coordinates.
pub fn sum_of_squares(coords: &[Float]) -> Float {
    coords.iter().map(|c| c * c).sum()
}
