/// What an L1 length does when it meets a field that isn't a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonNumericPolicy {
    /// Leave the field out of the sum.
    #[default]
    Skip,
    /// Read numeric-looking text as a number. Anything else becomes NaN,
    /// and the sum stays NaN from there on.
    Coerce,
    /// Stop at the first such field with an error.
    Reject,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub non_numeric: NonNumericPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            non_numeric: NonNumericPolicy::Skip,
        }
    }
}

impl Options {
    pub fn with_non_numeric(non_numeric: NonNumericPolicy) -> Self {
        Self { non_numeric }
    }
}
