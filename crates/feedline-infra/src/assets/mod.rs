//! Asset storage implementations.

mod local;

pub use local::LocalAssetStore;
