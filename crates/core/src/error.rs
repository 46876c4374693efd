use std::fmt;

/// Domain-level errors shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a validation error for a list index that is out of range.
    pub fn index_out_of_range(what: impl fmt::Display, index: usize, len: usize) -> Self {
        CoreError::Validation(format!("{what} index {index} out of range (length {len})"))
    }
}
