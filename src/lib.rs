pub mod authors;
pub mod error;
pub mod float;
mod is_nan;
pub mod math;
pub mod nominal;
pub mod options;
pub mod record;
pub mod vecmath;

// For convenience, re-export.
pub use error::{Error, Result};
pub use float::Float;
