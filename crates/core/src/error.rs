//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// lookups, malformed input). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more business rules rejected the input.
    ///
    /// Carries every message, in the order the rules ran.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A value could not be interpreted at all (e.g. a parse failure).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation(messages.into_iter().map(Into::into).collect())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Individual messages carried by this error.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(msgs) => msgs.clone(),
            Self::InvalidInput(msg) | Self::NotFound(msg) => vec![msg.clone()],
        }
    }
}
