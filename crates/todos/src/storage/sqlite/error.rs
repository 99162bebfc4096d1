//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `StorageError` from
//! `todos_core::storage`. Extended result codes are checked first; the
//! message-based classifier is only the fallback.

use todos_core::storage::{classify_error_message, StorageError};

/// Maps a rusqlite error to a StorageError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_UNIQUE` / `SQLITE_CONSTRAINT_PRIMARYKEY` → `StorageError::UniqueViolation`
/// - `SQLITE_CONSTRAINT_FOREIGNKEY` → `StorageError::ForeignKeyViolation`
/// - Connection errors → `StorageError::ConnectionFailed`
/// - All other errors → classified from their message
fn map_rusqlite_error(err: &rusqlite::Error) -> StorageError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            StorageError::UniqueViolation(err.to_string())
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            StorageError::ForeignKeyViolation(err.to_string())
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            StorageError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        _ => classify_error_message(&err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a StorageError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> StorageError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err),
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            StorageError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => classify_error_message(&err.to_string()),
    }
}
