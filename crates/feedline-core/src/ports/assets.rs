//! Asset storage port: uploaded image files.

use async_trait::async_trait;

use crate::error::AssetError;

/// Stores and removes uploaded image files.
///
/// References are opaque relative paths (e.g. `images/<id>.png`) suitable
/// for embedding in a post's `image_url`.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Persist raw image bytes under a fresh reference and return it.
    async fn save(&self, extension: &str, bytes: Vec<u8>) -> Result<String, AssetError>;

    /// Remove the file behind `asset_ref`. Removing an already-absent
    /// file reports [`AssetError::Missing`].
    async fn delete(&self, asset_ref: &str) -> Result<(), AssetError>;
}
