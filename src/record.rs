//! Records whose fields are only known at runtime.
//!
//! A [Record] keeps its fields in insertion order, and every walk over it
//! (the L1 length in particular) visits them in that order.

use indexmap::IndexMap;
use log::{debug, warn};

use crate::{
    error::{Error, Result},
    float::Float,
    options::{NonNumericPolicy, Options},
    vecmath::{has_nan::has_nan2, HasNan, Tuple2, Tuple3},
};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(Float),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<Float> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<Float> for FieldValue {
    fn from(value: Float) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, or replaces the value of an existing one in place.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn with_number(mut self, name: impl Into<String>, value: Float) -> Self {
        self.insert(name, FieldValue::Number(value));
        self
    }

    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, FieldValue::Text(value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// The field's value if it is present and numeric.
    pub fn number(&self, name: &str) -> Option<Float> {
        self.get(name).and_then(FieldValue::as_number)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All fields, in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// The numeric fields only, in insertion order.
    pub fn numbers(&self) -> impl Iterator<Item = (&str, Float)> {
        self.fields()
            .filter_map(|(name, value)| value.as_number().map(|n| (name, n)))
    }

    /// Reads a coordinate; absent or non-numeric fields read as NaN.
    fn coordinate(&self, name: &str) -> Float {
        self.number(name).unwrap_or(Float::NAN)
    }
}

impl<K> FromIterator<(K, FieldValue)> for Record
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl Tuple2<Float> for Record {
    fn new(x: Float, y: Float) -> Self {
        Record::new().with_number("x", x).with_number("y", y)
    }

    fn x(&self) -> Float {
        self.coordinate("x")
    }

    fn y(&self) -> Float {
        self.coordinate("y")
    }
}

impl Tuple3<Float> for Record {
    fn new(x: Float, y: Float, z: Float) -> Self {
        Record::new()
            .with_number("x", x)
            .with_number("y", y)
            .with_number("z", z)
    }

    fn x(&self) -> Float {
        self.coordinate("x")
    }

    fn y(&self) -> Float {
        self.coordinate("y")
    }

    fn z(&self) -> Float {
        self.coordinate("z")
    }
}

impl HasNan for Record {
    fn has_nan(&self) -> bool {
        has_nan2(self)
    }
}

/// Sum of the absolute values of the record's numeric fields.
/// Text fields are left out.
pub fn length_l1(record: &Record) -> Float {
    record.numbers().map(|(_, n)| n.abs()).sum()
}

/// Sum of the absolute values of the record's fields, visited in insertion
/// order, with text fields handled per `options.non_numeric`.
pub fn length_l1_with(record: &Record, options: &Options) -> Result<Float> {
    let mut length: Float = 0.0;
    for (name, value) in record.fields() {
        let coord = match value {
            FieldValue::Number(n) => *n,
            FieldValue::Text(text) => match options.non_numeric {
                NonNumericPolicy::Skip => {
                    debug!("Skipping non-numeric field `{name}`");
                    continue;
                }
                NonNumericPolicy::Coerce => {
                    let coord = coerce(text);
                    if coord.is_nan() && !length.is_nan() {
                        warn!("Field `{name}` is not numeric; length is now NaN");
                    }
                    coord
                }
                NonNumericPolicy::Reject => {
                    return Err(Error::NonNumericField {
                        name: name.to_string(),
                    })
                }
            },
        };
        length += coord.abs();
    }
    Ok(length)
}

/// Blank text reads as zero, numeric text as its value, anything else NaN.
fn coerce(text: &str) -> Float {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<Float>().unwrap_or(Float::NAN)
}
