//! Request middleware: the authentication gate and error mapping.

pub mod auth;
pub mod error;
