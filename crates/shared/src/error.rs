//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Validation *rejections* are not errors; they are ordinary values
/// returned by the rule chain. `AppError` covers genuine failures:
/// a ledger store that cannot answer, a resource that does not exist,
/// malformed input that never reached the rule chain.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input failed structural validation before reaching the rule chain.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict (e.g., duplicate entry at the store layer).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Ledger store failure (timeout, connectivity, corrupt row).
    ///
    /// Must propagate to the caller as-is; the core never converts a
    /// store failure into a zeroed snapshot or a validation verdict.
    #[error("Store error: {0}")]
    Store(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Store(_) => "STORE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
