//! # Feedline Infrastructure
//!
//! Concrete implementations of the ports defined in `feedline-core`:
//! Postgres repositories via SeaORM (with in-memory fallbacks), JWT
//! session tokens, Argon2 password hashing, and local-filesystem asset
//! storage.

pub mod assets;
pub mod auth;
pub mod database;

pub use assets::LocalAssetStore;
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{
    DatabaseConfig, InMemoryPostRepository, InMemoryUserRepository, PgPostRepository,
    PgUserRepository, connect,
};
