use thiserror::Error;

/// Errors raised by a query executor or while decoding its results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Credential verification failed: {0}")]
    Verifier(String),
}

impl StorageError {
    /// Returns true for uniqueness constraint violations.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StorageError::UniqueViolation(_))
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

const UNIQUE_VIOLATION_MARKERS: &[&str] = &[
    "duplicate key value violates unique constraint",
    "UNIQUE constraint failed",
];

const FOREIGN_KEY_VIOLATION_MARKERS: &[&str] = &[
    "violates foreign key constraint",
    "FOREIGN KEY constraint failed",
];

/// Classifies a storage error from its description alone.
///
/// Backends map structured error codes first and only fall back to this
/// when the driver hands over nothing but a message. Recognises the
/// PostgreSQL and SQLite wordings; anything else is `QueryFailed`.
pub fn classify_error_message(message: &str) -> StorageError {
    if UNIQUE_VIOLATION_MARKERS.iter().any(|m| message.contains(m)) {
        return StorageError::UniqueViolation(message.to_string());
    }
    if FOREIGN_KEY_VIOLATION_MARKERS
        .iter()
        .any(|m| message.contains(m))
    {
        return StorageError::ForeignKeyViolation(message.to_string());
    }
    StorageError::QueryFailed(message.to_string())
}
