use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a feed item with a mandatory image reference.
///
/// `creator_id` is immutable after creation and is the sole basis for
/// write authorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `creator_id`.
    pub fn new(creator_id: Uuid, title: String, content: String, image_url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            creator_id,
            title,
            content,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }
}
