//! Domain-level error types.

use serde::Serialize;
use thiserror::Error;

/// A single violated input rule, reported back to the caller.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Domain errors - business logic failures.
///
/// Every core operation returns one of these on failure; the protocol
/// adapters map each kind to a fixed wire status and envelope.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Client input failed shape/length/format rules. Carries one entry
    /// per violated field so callers know exactly what to correct.
    #[error("Invalid input")]
    Validation(Vec<FieldError>),

    /// No valid identity where one is required.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Valid identity, but not the resource owner.
    #[error("Not authorized")]
    NotAuthorized,

    /// Unknown email or password mismatch on login. The two cases are
    /// logged distinctly but surface identically so callers cannot probe
    /// which field was wrong.
    #[error("Invalid credentials")]
    InvalidCredential,

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Conflict(String),

    /// Storage or infrastructure failure. The only class surfaced with a
    /// generic message; detail stays in the server logs.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }
}

/// Repository-level errors, translated into `DomainError` by the service.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => DomainError::Conflict(msg),
            other => DomainError::Internal(other.to_string()),
        }
    }
}

/// Asset-store errors. Never escalated past the Asset Lifecycle Manager.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset not found")]
    Missing,

    #[error("Invalid asset reference: {0}")]
    InvalidRef(String),

    #[error("I/O failure: {0}")]
    Io(String),
}
