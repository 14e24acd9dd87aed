use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default status assigned at registration.
pub const DEFAULT_STATUS: &str = "I am new!";

/// User entity - an account that owns posts.
///
/// `post_ids` is the back-reference side of the ownership relation: it must
/// always equal the set of posts whose `creator_id` is this user's `id`.
/// Both sides are updated by the [`crate::FeedService`] operations, never
/// independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub status: String,
    pub post_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID, default status and no posts.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            status: DEFAULT_STATUS.to_string(),
            post_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a post id to the back-reference set (no-op if present).
    pub fn attach_post(&mut self, post_id: Uuid) {
        if !self.post_ids.contains(&post_id) {
            self.post_ids.push(post_id);
        }
        self.updated_at = Utc::now();
    }

    /// Remove a post id from the back-reference set.
    pub fn detach_post(&mut self, post_id: Uuid) {
        self.post_ids.retain(|id| *id != post_id);
        self.updated_at = Utc::now();
    }
}
