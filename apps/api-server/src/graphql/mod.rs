//! The GraphQL surface.
//!
//! Thin resolvers over the same `FeedService` operations the REST surface
//! uses; no validation or authorization is re-implemented here. Failures
//! carry `{status, data}` extensions mirroring the REST error envelope.

use std::sync::Arc;

use actix_web::web;
use async_graphql::{
    Context, EmptySubscription, Error, ErrorExtensions, ID, InputObject, Object, Result, Schema,
    SimpleObject, Value,
};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use uuid::Uuid;

use feedline_core::domain::{Identity, Post, User};
use feedline_core::service::{FeedService, PostDraft, PostUpdate};
use feedline_core::{DomainError, FieldError};

use crate::middleware::auth::MaybeIdentity;

pub type FeedSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(service: Arc<FeedService>) -> FeedSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// POST /graphql
pub async fn graphql_handler(
    schema: web::Data<FeedSchema>,
    identity: MaybeIdentity,
    req: GraphQLRequest,
) -> GraphQLResponse {
    // The per-request identity rides in the execution context.
    schema.execute(req.into_inner().data(identity.0)).await.into()
}

/// Translate a domain failure into a GraphQL error with `{status, data}`
/// extensions.
fn gql_error(err: DomainError) -> Error {
    let status: i32 = match &err {
        DomainError::Validation(_) => 422,
        DomainError::NotAuthenticated | DomainError::InvalidCredential => 401,
        DomainError::NotAuthorized => 403,
        DomainError::NotFound { .. } => 404,
        DomainError::Conflict(_) => 409,
        DomainError::Internal(_) => 500,
    };

    let message = match &err {
        DomainError::Internal(detail) => {
            tracing::error!("Internal error: {detail}");
            "Internal server error".to_string()
        }
        other => other.to_string(),
    };

    let data = match &err {
        DomainError::Validation(fields) => Some(Value::List(
            fields.iter().map(field_message).collect(),
        )),
        _ => None,
    };

    Error::new(message).extend_with(move |_, e| {
        e.set("status", status);
        if let Some(data) = data {
            e.set("data", data);
        }
    })
}

fn field_message(field: &FieldError) -> Value {
    Value::String(format!("{} {}", field.field, field.message))
}

fn service<'a>(ctx: &Context<'a>) -> Result<&'a Arc<FeedService>> {
    ctx.data::<Arc<FeedService>>()
}

fn identity<'a>(ctx: &Context<'a>) -> Result<Option<&'a Identity>> {
    Ok(ctx.data::<Option<Identity>>()?.as_ref())
}

fn require_identity<'a>(ctx: &Context<'a>) -> Result<&'a Identity> {
    identity(ctx)?.ok_or_else(|| gql_error(DomainError::NotAuthenticated))
}

fn parse_id(entity: &'static str, id: &ID) -> Result<Uuid> {
    Uuid::parse_str(id.as_str()).map_err(|_| gql_error(DomainError::not_found(entity)))
}

pub struct GqlUser(User);

#[Object(name = "User")]
impl GqlUser {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn status(&self) -> &str {
        &self.0.status
    }

    /// The user's posts, newest first.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<GqlPost>> {
        let posts = service(ctx)?
            .posts_of(self.0.id)
            .await
            .map_err(gql_error)?;
        Ok(posts.into_iter().map(GqlPost).collect())
    }
}

pub struct GqlPost(Post);

#[Object(name = "Post")]
impl GqlPost {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    async fn image_url(&self) -> &str {
        &self.0.image_url
    }

    /// Resolves to the full owning user.
    async fn creator(&self, ctx: &Context<'_>) -> Result<GqlUser> {
        let user = service(ctx)?
            .get_user(self.0.creator_id)
            .await
            .map_err(gql_error)?;
        Ok(GqlUser(user))
    }

    async fn created_at(&self) -> String {
        self.0.created_at.to_rfc3339()
    }

    async fn updated_at(&self) -> String {
        self.0.updated_at.to_rfc3339()
    }
}

#[derive(SimpleObject)]
#[graphql(name = "AuthData")]
pub struct AuthData {
    token: String,
    user_id: String,
}

#[derive(SimpleObject)]
#[graphql(name = "PostData")]
pub struct PostData {
    posts: Vec<GqlPost>,
    total_posts: u64,
}

#[derive(InputObject)]
#[graphql(name = "UserInputData")]
pub struct UserInputData {
    email: String,
    name: String,
    password: String,
}

#[derive(InputObject)]
#[graphql(name = "PostInputData")]
pub struct PostInputData {
    title: String,
    content: String,
    image_url: String,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn login(&self, ctx: &Context<'_>, email: String, password: String) -> Result<AuthData> {
        let auth = service(ctx)?
            .login(&email, &password)
            .await
            .map_err(gql_error)?;
        Ok(AuthData {
            token: auth.token,
            user_id: auth.user_id.to_string(),
        })
    }

    async fn posts(&self, ctx: &Context<'_>, page: Option<i32>) -> Result<PostData> {
        let feed = service(ctx)?
            .list_posts(identity(ctx)?, page.map(i64::from))
            .await
            .map_err(gql_error)?;
        Ok(PostData {
            posts: feed.posts.into_iter().map(GqlPost).collect(),
            total_posts: feed.total,
        })
    }

    async fn post(&self, ctx: &Context<'_>, post_id: ID) -> Result<GqlPost> {
        require_identity(ctx)?;
        let id = parse_id("Post", &post_id)?;
        let post = service(ctx)?.get_post(id).await.map_err(gql_error)?;
        Ok(GqlPost(post))
    }

    async fn user(&self, ctx: &Context<'_>) -> Result<GqlUser> {
        let identity = require_identity(ctx)?;
        let user = service(ctx)?
            .get_user(identity.user_id)
            .await
            .map_err(gql_error)?;
        Ok(GqlUser(user))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, user_input: UserInputData) -> Result<GqlUser> {
        let user = service(ctx)?
            .register_user(&user_input.email, &user_input.name, &user_input.password)
            .await
            .map_err(gql_error)?;
        Ok(GqlUser(user))
    }

    async fn create_post(&self, ctx: &Context<'_>, post_input: PostInputData) -> Result<GqlPost> {
        let draft = PostDraft {
            title: post_input.title,
            content: post_input.content,
            image_url: Some(post_input.image_url),
        };
        let post = service(ctx)?
            .create_post(identity(ctx)?, draft)
            .await
            .map_err(gql_error)?;
        Ok(GqlPost(post))
    }

    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: ID,
        post_input: PostInputData,
    ) -> Result<GqlPost> {
        let post_id = parse_id("Post", &id)?;
        // The web client sends the literal string "undefined" when no new
        // file was uploaded; that means "keep the stored image".
        let image_url = match post_input.image_url {
            url if url == "undefined" || url.is_empty() => None,
            url => Some(url),
        };
        let update = PostUpdate {
            title: post_input.title,
            content: post_input.content,
            image_url,
        };
        let post = service(ctx)?
            .update_post(identity(ctx)?, post_id, update)
            .await
            .map_err(gql_error)?;
        Ok(GqlPost(post))
    }

    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let post_id = parse_id("Post", &id)?;
        service(ctx)?
            .delete_post(identity(ctx)?, post_id)
            .await
            .map_err(gql_error)?;
        Ok(true)
    }

    async fn update_status(&self, ctx: &Context<'_>, status: String) -> Result<GqlUser> {
        let identity = require_identity(ctx)?;
        let svc = service(ctx)?;
        svc.set_status(Some(identity), &status)
            .await
            .map_err(gql_error)?;
        let user = svc.get_user(identity.user_id).await.map_err(gql_error)?;
        Ok(GqlUser(user))
    }
}
