use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The verified principal derived from a request's credential token.
///
/// Transient: lives only for the duration of one request and is passed
/// explicitly into every operation that needs it. Absence of an identity
/// is represented as `Option::None`, never as a flag on the request.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Identity {
    /// Ownership check: true iff this identity is the resource owner.
    pub fn owns(&self, resource_owner_id: Uuid) -> bool {
        self.user_id == resource_owner_id
    }
}
