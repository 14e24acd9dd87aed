//! Persistence: SeaORM Postgres repositories and in-memory fallbacks.

mod connections;
pub mod entity;
mod memory;
mod pg_repo;

pub use connections::{DatabaseConfig, connect};
pub use memory::{InMemoryPostRepository, InMemoryUserRepository};
pub use pg_repo::{PgPostRepository, PgUserRepository};
