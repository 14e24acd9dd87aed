//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod assets;
mod auth;
mod repository;

pub use assets::AssetStore;
pub use auth::{AuthError, PasswordService, TokenService};
pub use repository::{PostRepository, UserRepository};
