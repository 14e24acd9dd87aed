//! Local-filesystem asset store.
//!
//! Files live in a single flat directory; references are the public
//! relative paths (`images/<uuid>.<ext>`) that also serve as URLs.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use feedline_core::error::AssetError;
use feedline_core::ports::AssetStore;

/// Public path segment under which images are stored and served.
pub const PUBLIC_PREFIX: &str = "images";

pub struct LocalAssetStore {
    images_dir: PathBuf,
}

impl LocalAssetStore {
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }

    /// Resolve a public reference to the backing file, rejecting anything
    /// that is not a single plain file name under the images directory.
    fn resolve(&self, asset_ref: &str) -> Result<PathBuf, AssetError> {
        let name = asset_ref
            .strip_prefix(&format!("{PUBLIC_PREFIX}/"))
            .unwrap_or(asset_ref);

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Ok(self.images_dir.join(file)),
            _ => Err(AssetError::InvalidRef(asset_ref.to_string())),
        }
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn save(&self, extension: &str, bytes: Vec<u8>) -> Result<String, AssetError> {
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AssetError::InvalidRef(extension.to_string()));
        }

        tokio::fs::create_dir_all(&self.images_dir)
            .await
            .map_err(|e| AssetError::Io(e.to_string()))?;

        let name = format!("{}.{extension}", Uuid::new_v4());
        let path = self.images_dir.join(&name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AssetError::Io(e.to_string()))?;

        tracing::debug!(file = %path.display(), "stored uploaded image");
        Ok(format!("{PUBLIC_PREFIX}/{name}"))
    }

    async fn delete(&self, asset_ref: &str) -> Result<(), AssetError> {
        let path = self.resolve(asset_ref)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AssetError::Missing),
            Err(e) => Err(AssetError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalAssetStore::new(dir.path());

        let asset_ref = store.save("png", vec![1, 2, 3]).await.unwrap();
        assert!(asset_ref.starts_with("images/"));
        assert!(asset_ref.ends_with(".png"));

        store.delete(&asset_ref).await.unwrap();
        assert!(matches!(
            store.delete(&asset_ref).await,
            Err(AssetError::Missing)
        ));
    }

    #[tokio::test]
    async fn path_traversal_references_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalAssetStore::new(dir.path());

        for bad in ["images/../etc/passwd", "../secret", "images/a/b.png"] {
            assert!(
                matches!(store.delete(bad).await, Err(AssetError::InvalidRef(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn extension_is_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalAssetStore::new(dir.path());

        assert!(matches!(
            store.save("png/../../x", vec![0]).await,
            Err(AssetError::InvalidRef(_))
        ));
    }
}
