//! # Feedline Shared
//!
//! Wire types shared by both protocol surfaces: request/response DTOs and
//! the error envelope. Field names follow the historical JSON contract
//! (`_id`, camelCase keys).

pub mod dto;
pub mod response;

pub use response::ErrorEnvelope;
