pub mod attribute;
pub mod dictionary;
pub mod ip;
pub mod object;
pub mod port;

use thiserror::Error;

/// Failure of a single inventory-store operation. Callers branch on
/// `Duplicate` explicitly; everything else stays a generic database error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record already exists")]
    Duplicate,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub(crate) fn from_write(err: sqlx::Error) -> Self {
        let is_duplicate = err
            .as_database_error()
            .map(|db_err| matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation))
            .unwrap_or(false);

        if is_duplicate {
            Self::Duplicate
        } else {
            Self::Database(err)
        }
    }
}
