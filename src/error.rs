use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A field that had to be numeric held something else.
    #[error("Field `{name}` is not numeric")]
    NonNumericField { name: String },

    /// A data source failed to run a query.
    #[error("Query failed: {0}")]
    Query(String),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error")]
    Sqlite(#[from] rusqlite::Error),
}

#[cfg(test)]
mod tests {
    use super::{Error, Result};

    #[test]
    fn non_numeric_field_display() {
        let err = Error::NonNumericField {
            name: "address".to_string(),
        };
        assert_eq!("Field `address` is not numeric", err.to_string());
    }

    #[test]
    fn query_display() {
        let err = Error::Query("connection reset".to_string());
        assert_eq!("Query failed: connection reset", err.to_string());
    }

    #[cfg(feature = "sqlite")]
    #[test]
    fn from_rusqlite() {
        fn inner() -> Result<()> {
            Err::<(), _>(rusqlite::Error::QueryReturnedNoRows)?;
            Ok(())
        }

        let err = inner().unwrap_err();
        assert!(matches!(err, Error::Sqlite(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
