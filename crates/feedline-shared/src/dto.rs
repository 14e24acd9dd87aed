//! Data Transfer Objects - request/response types for the REST surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use feedline_core::domain::{Post, User};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request to replace the caller's status string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// Successful login: the session token and its subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
}

/// Successful signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user_id: String,
}

/// A post on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            image_url: post.image_url,
            creator: post.creator_id.to_string(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// The abbreviated creator reference returned on post creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl From<&User> for CreatorRef {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
        }
    }
}

/// One page of the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPageResponse {
    pub message: String,
    pub posts: Vec<PostDto>,
    pub total_items: u64,
}

/// A single post with a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub message: String,
    pub post: PostDto,
}

/// Post creation response, echoing the creator reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub message: String,
    pub post: PostDto,
    pub creator: CreatorRef,
}

/// Bare acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The caller's own status string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Standalone image upload result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePathResponse {
    pub message: String,
    pub file_path: String,
}
