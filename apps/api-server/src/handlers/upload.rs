//! Multipart image handling.
//!
//! The accepted MIME types are exactly `image/png`, `image/jpg` and
//! `image/jpeg`. Anything else is silently dropped - no file stored, no
//! error - matching the historical surface.

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, web};

use feedline_core::DomainError;
use feedline_core::ports::AssetStore;
use feedline_shared::dto::{FilePathResponse, MessageResponse};

use crate::middleware::auth::Authenticated;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart form for `PUT /feed/post-image`.
#[derive(Debug, MultipartForm)]
pub struct ImageOnlyForm {
    pub image: Option<TempFile>,
    #[multipart(rename = "oldPath")]
    pub old_path: Option<Text<String>>,
}

/// PUT /feed/post-image
///
/// Stores a standalone image (used by the GraphQL frontend, which uploads
/// the file before running the mutation). A request without a usable file
/// is acknowledged with 200, not an error.
pub async fn put_post_image(
    state: web::Data<AppState>,
    _auth: Authenticated,
    MultipartForm(form): MultipartForm<ImageOnlyForm>,
) -> AppResult<HttpResponse> {
    let Some(file) = form.image else {
        return Ok(HttpResponse::Ok().json(MessageResponse::new("No file provided!")));
    };

    match store_image(&state.assets, file).await? {
        Some(file_path) => {
            if let Some(old_path) = form.old_path {
                state.asset_lifecycle.schedule_deletion(&old_path).await;
            }
            Ok(HttpResponse::Created().json(FilePathResponse {
                message: "File stored.".to_string(),
                file_path,
            }))
        }
        None => Ok(HttpResponse::Ok().json(MessageResponse::new("No file provided!"))),
    }
}

fn accepted(mime: &mime::Mime) -> bool {
    matches!(mime.essence_str(), "image/png" | "image/jpg" | "image/jpeg")
}

/// Persist an uploaded file part into the asset store.
///
/// Returns `None` when the part carries an unsupported MIME type: the
/// upload is dropped without an error.
pub async fn store_image(
    assets: &std::sync::Arc<dyn AssetStore>,
    file: TempFile,
) -> AppResult<Option<String>> {
    let Some(content_type) = file.content_type.clone() else {
        return Ok(None);
    };
    if !accepted(&content_type) {
        tracing::debug!(mime = %content_type, "dropping upload with unsupported MIME type");
        return Ok(None);
    }

    let extension = match content_type.essence_str() {
        "image/png" => "png",
        _ => "jpg",
    };

    let bytes = tokio::fs::read(file.file.path())
        .await
        .map_err(|e| AppError(DomainError::Internal(e.to_string())))?;

    let asset_ref = assets
        .save(extension, bytes)
        .await
        .map_err(|e| AppError(DomainError::Internal(e.to_string())))?;

    Ok(Some(asset_ref))
}

/// Read a multipart part that carried no content type as plain text; the
/// edit form sends the already-stored image path this way when no new
/// file was picked.
pub async fn text_part(file: TempFile) -> AppResult<Option<String>> {
    let bytes = tokio::fs::read(file.file.path())
        .await
        .map_err(|e| AppError(DomainError::Internal(e.to_string())))?;
    let text = String::from_utf8_lossy(&bytes).trim().to_string();
    Ok((!text.is_empty()).then_some(text))
}
