//! Shared error types for the planner and its collaborators
//!
//! The engine itself is infallible on typed input. Errors arise only at the
//! boundaries: when raw intake data breaks the input contract, when a
//! configuration file is invalid, or when the plan repository rejects a write.

use thiserror::Error;
use uuid::Uuid;

/// Main error type for skinplan operations
#[derive(Debug, Error)]
pub enum Error {
    /// Caller passed data that breaks the input contract (wrong type, value
    /// out of range). These are never coerced into defaults.
    #[error("Contract violation in `{field}`: {message}")]
    ContractViolation { field: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Plan repository errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a contract violation for a named input field
    pub fn contract(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ContractViolation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// True when the error was caused by the caller's input rather than
    /// by configuration or storage.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation { .. })
    }
}

/// Failures reported by a [`crate::storage::PlanRepository`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Each assessment session owns at most one plan
    #[error("a plan already exists for session {0}")]
    DuplicateSession(Uuid),

    /// A routine step row failed validation; nothing was written
    #[error("invalid routine step {index} ({when}): {reason}")]
    InvalidStep {
        index: usize,
        when: String,
        reason: String,
    },

    #[error("plan {0} not found")]
    PlanNotFound(Uuid),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
