//! Mapping query rows to authors.
//!
//! [get_authors] only needs something that can run a query ([RunQuery]);
//! [get_authors_from_sqlite] names the concrete SQLite source. Both map
//! rows the same way.

pub mod source;
#[cfg(feature = "sqlite")]
pub mod sqlite;

use itertools::Itertools;
use log::{debug, warn};

use crate::error::Result;

pub use source::{Row, RunQuery, StaticRows, Value};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;

pub const AUTHORS_QUERY: &str = "SELECT FIRST, LAST FROM AUTHORS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub first: Option<String>,
    pub last: Option<String>,
}

impl Author {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: Some(first.into()),
            last: Some(last.into()),
        }
    }

    /// Column 0 is the given name, column 1 the family name. Missing
    /// columns leave the field empty; extra columns are ignored.
    pub fn from_row(row: Row) -> Self {
        if row.len() < 2 {
            warn!("Author row has {} of 2 columns", row.len());
        }
        let mut cells = row.into_iter();
        let first = cells.next().and_then(Value::into_text);
        let last = cells.next().and_then(Value::into_text);
        Self { first, last }
    }
}

/// Every author known to `database`, in the order the rows come back.
pub fn get_authors<D>(database: &D) -> Result<Vec<Author>>
where
    D: RunQuery + ?Sized,
{
    let author_rows = database.run_query(AUTHORS_QUERY)?;
    debug!("Mapping {} author rows", author_rows.len());
    Ok(author_rows.into_iter().map(Author::from_row).collect_vec())
}

#[cfg(feature = "sqlite")]
pub fn get_authors_from_sqlite(database: &SqliteDatabase) -> Result<Vec<Author>> {
    get_authors(database)
}
