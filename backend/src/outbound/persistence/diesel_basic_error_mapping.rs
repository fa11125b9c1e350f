//! Classification of Diesel and pool failures shared by the repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// What a failed Diesel operation means to a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// The connection dropped or could not be used.
    Connection(&'static str),
    /// A foreign key constraint rejected the write.
    ForeignKey,
    /// Any other query, conversion or constraint failure.
    Query(&'static str),
}

/// Classify a Diesel error, logging the database detail at debug level.
///
/// The returned messages are fixed strings so database internals never reach
/// the domain error message.
pub(crate) fn classify_diesel_error(error: &DieselError) -> DieselFailure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        DieselError::DeserializationError(_) => DieselFailure::Query("row decoding error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            DieselFailure::ForeignKey
        }
        _ => DieselFailure::Query("database error"),
    }
}
