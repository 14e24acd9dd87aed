//! Asset lifecycle manager: keeps stored image files in sync with posts.

use std::sync::Arc;

use crate::error::AssetError;
use crate::ports::AssetStore;

/// Best-effort cleanup of image files no longer referenced by any post.
///
/// Deletion failures are a cleanliness concern, not a correctness
/// violation: they are logged and never escalated to the caller. Callers
/// must only schedule a deletion *after* the post state that stopped
/// referencing the asset has been durably saved.
#[derive(Clone)]
pub struct AssetLifecycle {
    store: Arc<dyn AssetStore>,
}

impl AssetLifecycle {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Remove the file behind `asset_ref`, swallowing failures.
    pub async fn schedule_deletion(&self, asset_ref: &str) {
        match self.store.delete(asset_ref).await {
            Ok(()) => tracing::debug!(asset = asset_ref, "deleted orphaned asset"),
            Err(AssetError::Missing) => {
                tracing::debug!(asset = asset_ref, "asset already absent, nothing to delete");
            }
            Err(err) => {
                tracing::warn!(asset = asset_ref, error = %err, "failed to delete orphaned asset");
            }
        }
    }
}
