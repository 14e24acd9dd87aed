use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// User persistence.
///
/// `save` is an upsert keyed on `id`; the store is expected to enforce
/// email uniqueness and report violations as [`RepoError::Constraint`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    async fn save(&self, user: User) -> Result<User, RepoError>;
}

/// Post persistence.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// One page of posts ordered by creation time descending.
    async fn list_page(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// All posts owned by one creator, newest first.
    async fn find_by_creator(&self, creator_id: Uuid) -> Result<Vec<Post>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    async fn save(&self, post: Post) -> Result<Post, RepoError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
