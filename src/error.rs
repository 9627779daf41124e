//! Error types for the form and the binary.

use thiserror::Error;

use crate::form::{MAX_LENGTH, MIN_LENGTH};

/// Why a length input was rejected. The messages are shown verbatim next to
/// the length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Length is required")]
    Required,

    #[error("Should be min of {} characters", MIN_LENGTH)]
    TooShort,

    #[error("Should be max of {} characters", MAX_LENGTH)]
    TooLong,
}

/// No character category is selected, so there is nothing to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Select at least one character type")]
pub struct EmptyPoolError;

/// A rejected submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    EmptyPool(#[from] EmptyPoolError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl AppError {
    /// Process exit status: 2 for user-correctable form input, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Form(_) => 2,
            AppError::Io(_) | AppError::Clipboard(_) => 1,
        }
    }
}
