//! Content store errors.

use sqlx::Error;
use thiserror::Error;

/// Failure reading or writing the content store.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A single-record lookup matched no row.
    #[error("content not found")]
    NotFound,

    /// The store could not be reached.
    #[error("content store unavailable")]
    Unavailable(#[source] Error),

    /// A row did not match the expected shape.
    #[error("failed to decode content row")]
    Decode(#[source] Error),

    /// Any other store error.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl ContentError {
    /// Whether this is a missing-record error rather than a store failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<Error> for ContentError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            Error::Io(_)
            | Error::Tls(_)
            | Error::PoolTimedOut
            | Error::PoolClosed
            | Error::Protocol(_)
            | Error::WorkerCrashed => Self::Unavailable(error),
            Error::ColumnDecode { .. }
            | Error::ColumnNotFound(_)
            | Error::ColumnIndexOutOfBounds { .. }
            | Error::Decode(_)
            | Error::TypeNotFound { .. } => Self::Decode(error),
            _ => Self::Sql(error),
        }
    }
}
