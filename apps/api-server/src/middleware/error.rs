//! Error mapping: every `DomainError` kind has a fixed status and envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use feedline_core::DomainError;
use feedline_shared::ErrorEnvelope;

/// Wrapper giving `DomainError` an HTTP representation.
#[derive(Debug)]
pub struct AppError(pub DomainError);

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            DomainError::NotAuthorized => StatusCode::FORBIDDEN,
            DomainError::InvalidCredential => StatusCode::UNAUTHORIZED,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let envelope = match &self.0 {
            DomainError::Validation(fields) => {
                ErrorEnvelope::new(422, "Validation failed, entered data is incorrect")
                    .with_data(fields.clone())
            }
            DomainError::NotAuthenticated => ErrorEnvelope::not_authenticated(),
            DomainError::NotAuthorized => ErrorEnvelope::not_authorized(),
            DomainError::InvalidCredential => ErrorEnvelope::new(401, "Invalid credentials"),
            DomainError::NotFound { entity } => {
                ErrorEnvelope::new(404, format!("{entity} not found"))
            }
            DomainError::Conflict(msg) => ErrorEnvelope::new(409, msg.clone()),
            DomainError::Internal(detail) => {
                // Full detail stays in the logs; the caller gets a generic message.
                tracing::error!("Internal error: {detail}");
                ErrorEnvelope::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(envelope)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
