//! # Feedline Core
//!
//! The domain layer of the Feedline content-feed service.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the entities, the ownership rules binding users to their posts, the
//! authorization checks, pagination, and the image-asset lifecycle.

pub mod assets;
pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod service;
pub mod validate;

pub use error::{DomainError, FieldError};
pub use service::{FeedConfig, FeedService};
