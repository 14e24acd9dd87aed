//! Feed handlers: the REST surface over the core operations.
//!
//! Validation and authorization live in the core; these handlers only
//! shape requests and responses.

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use feedline_core::service::{PostDraft, PostUpdate};
use feedline_shared::dto::{
    CreatePostResponse, FeedPageResponse, MessageResponse, PostDto, PostResponse, StatusResponse,
    StatusUpdateRequest,
};

use crate::handlers::upload::{store_image, text_part};
use crate::middleware::auth::{Authenticated, MaybeIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

/// GET /feed/posts?page=N
pub async fn list_posts(
    state: web::Data<AppState>,
    identity: MaybeIdentity,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    // An unparsable page is treated as absent, which defaults to page 1.
    let page = query.page.as_deref().and_then(|s| s.parse::<i64>().ok());

    let feed = state.service.list_posts(identity.as_ref(), page).await?;

    Ok(HttpResponse::Ok().json(FeedPageResponse {
        message: "Fetched posts successfully".to_string(),
        posts: feed.posts.into_iter().map(PostDto::from).collect(),
        total_items: feed.total,
    }))
}

/// Multipart form for post creation and update.
#[derive(Debug, MultipartForm)]
pub struct PostForm {
    pub title: Option<Text<String>>,
    pub content: Option<Text<String>>,
    pub image: Option<TempFile>,
}

/// POST /feed/post (multipart: title, content, image)
pub async fn create_post(
    state: web::Data<AppState>,
    identity: MaybeIdentity,
    MultipartForm(form): MultipartForm<PostForm>,
) -> AppResult<HttpResponse> {
    let image_url = match form.image {
        Some(file) => store_image(&state.assets, file).await?,
        None => None,
    };

    let draft = PostDraft {
        title: form.title.map(|t| t.0).unwrap_or_default(),
        content: form.content.map(|t| t.0).unwrap_or_default(),
        image_url,
    };

    let post = state.service.create_post(identity.as_ref(), draft).await?;
    let creator = state.service.get_user(post.creator_id).await?;

    Ok(HttpResponse::Created().json(CreatePostResponse {
        message: "Post created successfully".to_string(),
        post: post.into(),
        creator: (&creator).into(),
    }))
}

/// GET /feed/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    _auth: Authenticated,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.service.get_post(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PostResponse {
        message: "Post fetched.".to_string(),
        post: post.into(),
    }))
}

/// PUT /feed/post/{id} (multipart: title, content, image?)
///
/// The `image` part is either a newly-uploaded file or, when the client
/// kept the existing picture, the stored path as plain text.
pub async fn update_post(
    state: web::Data<AppState>,
    identity: MaybeIdentity,
    path: web::Path<Uuid>,
    MultipartForm(form): MultipartForm<PostForm>,
) -> AppResult<HttpResponse> {
    let image_url = match form.image {
        Some(file) if file.content_type.is_some() => store_image(&state.assets, file).await?,
        Some(file) => text_part(file).await?,
        None => None,
    };

    let update = PostUpdate {
        title: form.title.map(|t| t.0).unwrap_or_default(),
        content: form.content.map(|t| t.0).unwrap_or_default(),
        image_url,
    };

    let post = state
        .service
        .update_post(identity.as_ref(), path.into_inner(), update)
        .await?;

    Ok(HttpResponse::Ok().json(PostResponse {
        message: "Post updated!".to_string(),
        post: post.into(),
    }))
}

/// DELETE /feed/post/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: MaybeIdentity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .service
        .delete_post(identity.as_ref(), path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Deleted post.")))
}

/// GET /feed/status
pub async fn get_status(
    state: web::Data<AppState>,
    identity: MaybeIdentity,
) -> AppResult<HttpResponse> {
    let status = state.service.get_status(identity.as_ref()).await?;

    Ok(HttpResponse::Ok().json(StatusResponse { status }))
}

/// PUT /feed/status
pub async fn put_status(
    state: web::Data<AppState>,
    identity: MaybeIdentity,
    body: web::Json<StatusUpdateRequest>,
) -> AppResult<HttpResponse> {
    state
        .service
        .set_status(identity.as_ref(), &body.status)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Status updated successfully")))
}
