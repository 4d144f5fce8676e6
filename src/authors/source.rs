use log::debug;

use crate::error::Result;

/// A single cell of a query result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// The cell as text. `Null` has no text; numbers are formatted and
    /// blobs decoded lossily.
    pub fn into_text(self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Integer(i) => Some(i.to_string()),
            Value::Real(r) => Some(r.to_string()),
            Value::Text(s) => Some(s),
            Value::Blob(b) => Some(String::from_utf8_lossy(&b).into_owned()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

pub type Row = Vec<Value>;

/// The one thing author lookup needs from a data source.
///
/// Anything that can turn a query string into rows qualifies, whether it
/// is a real database or a fixed set of rows.
pub trait RunQuery {
    fn run_query(&self, sql: &str) -> Result<Vec<Row>>;
}

impl<T: RunQuery + ?Sized> RunQuery for &T {
    fn run_query(&self, sql: &str) -> Result<Vec<Row>> {
        (**self).run_query(sql)
    }
}

/// A data source that answers every query with the same rows.
#[derive(Debug, Clone, Default)]
pub struct StaticRows {
    rows: Vec<Row>,
}

impl StaticRows {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl<R, V> FromIterator<R> for StaticRows
where
    R: IntoIterator<Item = V>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

impl RunQuery for StaticRows {
    fn run_query(&self, sql: &str) -> Result<Vec<Row>> {
        debug!("Answering `{sql}` with {} static rows", self.rows.len());
        Ok(self.rows.clone())
    }
}
