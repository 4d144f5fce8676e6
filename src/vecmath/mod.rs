//! Lengths and normalization written against *shapes* rather than types.
//!
//! Every operation here asks only for the coordinates it needs, through
//! [Tuple2] or [Tuple3]. Any type exposing those coordinates is accepted,
//! whatever else it carries: a [NamedVector2f] with its label, a
//! [Vector3f] used as a planar value, or a dynamic
//! [Record](crate::record::Record) whose `x` and `y` happen to be numbers.
//!
//! Lengths of any arity are computed by the single [norm] function.

pub mod has_nan;
pub mod length;
mod length_fns;
pub mod normalize;
pub mod tuple;
pub mod vector;

pub use has_nan::HasNan;
pub use length::{norm, Length};
pub use length_fns::{length2, length3};
pub use normalize::{normalized3, Normalize};
pub use tuple::{Tuple2, Tuple3};
pub use vector::{NamedVector2f, Vector2f, Vector3f};
