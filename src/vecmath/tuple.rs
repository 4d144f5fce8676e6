/// Anything exposing an `x` and a `y` coordinate.
/// Extra fields on the implementing type are allowed and ignored by
/// every operation written against this trait.
pub trait Tuple2<T> {
    fn new(x: T, y: T) -> Self;

    fn x(&self) -> T;
    fn y(&self) -> T;
}

/// Anything exposing `x`, `y` and `z` coordinates.
/// Used for sharing logic across e.g. Vector3f and Record.
pub trait Tuple3<T> {
    fn new(x: T, y: T, z: T) -> Self;

    fn x(&self) -> T;
    fn y(&self) -> T;
    fn z(&self) -> T;
}
