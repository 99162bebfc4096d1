use thiserror::Error;

/// Errors that can occur when validating a todo or list title.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title cannot be empty")]
    Empty,
    #[error("Title too long (max 100 characters)")]
    TooLong,
}
