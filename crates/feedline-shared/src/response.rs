//! The error envelope shared by both protocol surfaces.

use serde::Serialize;

use feedline_core::error::FieldError;

/// `{message, status, data}` - the fixed failure shape.
///
/// `data` carries structured per-field validation messages when
/// applicable and is omitted otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<FieldError>>,
}

impl ErrorEnvelope {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Vec<FieldError>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn not_authenticated() -> Self {
        Self::new(401, "Not authenticated")
    }

    pub fn not_authorized() -> Self {
        Self::new(403, "Not authorized")
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal server error")
    }
}
