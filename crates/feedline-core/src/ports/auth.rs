//! Authentication ports: credential hashing and session tokens.

use uuid::Uuid;

use crate::domain::Identity;

/// Session token service: issues and verifies signed, time-limited
/// identity tokens.
pub trait TokenService: Send + Sync {
    /// Produce a signed token embedding `{user_id, email}` with the
    /// service's fixed expiry.
    fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AuthError>;

    /// Check signature and expiry, yielding the embedded identity.
    ///
    /// A missing token is not this service's concern: callers represent
    /// absence as `None` before ever reaching `verify`.
    fn verify(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Credential store: one-way password hashing. Stateless.
pub trait PasswordService: Send + Sync {
    /// Salted, computationally expensive hash of a plaintext password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a stored hash via the algorithm's own
    /// verify routine.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Token- and hashing-level failures.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token: {0}")]
    InvalidSignature(String),

    #[error("Hashing error: {0}")]
    Hashing(String),
}
