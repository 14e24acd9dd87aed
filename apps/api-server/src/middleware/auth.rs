//! The authentication gate: extractors turning a bearer token into an
//! explicit [`Identity`] value.
//!
//! The gate itself never blocks a request. A missing, malformed or
//! expired token all resolve to "no identity"; whether that is acceptable
//! is decided by the operation being invoked, not here.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use feedline_core::DomainError;
use feedline_core::domain::Identity;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Optional identity extractor - the gate's native shape.
///
/// ```ignore
/// async fn handler(identity: MaybeIdentity) -> ... {
///     service.create_post(identity.as_ref(), draft).await
/// }
/// ```
pub struct MaybeIdentity(pub Option<Identity>);

impl MaybeIdentity {
    pub fn as_ref(&self) -> Option<&Identity> {
        self.0.as_ref()
    }
}

impl FromRequest for MaybeIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(MaybeIdentity(identity_from_request(req))))
    }
}

/// Required identity extractor for routes that demand authentication
/// before the operation is even invoked.
pub struct Authenticated(pub Identity);

impl FromRequest for Authenticated {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            identity_from_request(req)
                .map(Authenticated)
                .ok_or(AppError(DomainError::NotAuthenticated)),
        )
    }
}

fn identity_from_request(req: &HttpRequest) -> Option<Identity> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        tracing::error!("AppState not found in app data");
        return None;
    };

    let header = req
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    let token = header.strip_prefix("Bearer ")?;

    match state.tokens.verify(token) {
        Ok(identity) => Some(identity),
        Err(err) => {
            tracing::debug!(error = %err, "discarding unusable bearer token");
            None
        }
    }
}
