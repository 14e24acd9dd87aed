//! The content repository: every feed operation lives here, once.
//!
//! Both protocol adapters (REST and GraphQL) call these methods; any
//! intentional behavioral difference between the surfaces is expressed as
//! a [`FeedConfig`] flag, never as duplicated logic in an adapter.

use std::sync::Arc;

use uuid::Uuid;

use crate::assets::AssetLifecycle;
use crate::domain::{Identity, Post, User};
use crate::error::DomainError;
use crate::pagination;
use crate::ports::{AssetStore, PasswordService, PostRepository, TokenService, UserRepository};
use crate::validate::{MIN_TEXT_LEN, Validator};

/// Behavior switches for the feed operations.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Posts per page.
    pub page_size: u64,
    /// Whether `list_posts` demands an authenticated identity. The
    /// historical REST surface allowed anonymous listing; the current
    /// surfaces do not.
    pub require_auth_for_listing: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: 2,
            require_auth_for_listing: true,
        }
    }
}

/// A successful login: the session token plus the subject it names.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub token: String,
    pub user_id: Uuid,
}

/// One page of the feed.
#[derive(Debug, Clone)]
pub struct FeedPage {
    pub posts: Vec<Post>,
    pub total: u64,
}

/// Input for `create_post`. `image_url` is optional here only so the
/// adapter can report "image required" through the same validation path
/// as the text fields.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// Input for `update_post`. `image_url: None` keeps the stored reference.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// The one implementation of the feed operations.
pub struct FeedService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
    assets: AssetLifecycle,
    config: FeedConfig,
}

impl FeedService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
        assets: Arc<dyn AssetStore>,
        config: FeedConfig,
    ) -> Self {
        Self {
            users,
            posts,
            passwords,
            tokens,
            assets: AssetLifecycle::new(assets),
            config,
        }
    }

    /// Register a new user with a hashed password and default status.
    pub async fn register_user(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        Validator::new()
            .email("email", email)
            .min_len("name", name, 1)
            .min_len("password", password, MIN_TEXT_LEN)
            .finish()?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(DomainError::Conflict("Email already registered".into()));
        }

        let hash = self
            .passwords
            .hash(password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let user = self
            .users
            .save(User::new(email.to_string(), name.to_string(), hash))
            .await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Authenticate and issue a session token.
    ///
    /// Unknown email and wrong password are logged distinctly but surface
    /// as the same failure, so a caller cannot probe which was wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthToken, DomainError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            tracing::debug!("login rejected: unknown email");
            return Err(DomainError::InvalidCredential);
        };

        let valid = self
            .passwords
            .verify(password, &user.password_hash)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        if !valid {
            tracing::debug!(user_id = %user.id, "login rejected: password mismatch");
            return Err(DomainError::InvalidCredential);
        }

        let token = self
            .tokens
            .issue(user.id, &user.email)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(AuthToken {
            token,
            user_id: user.id,
        })
    }

    /// Create a post owned by the authenticated identity and record the
    /// back-reference in the owner's `post_ids`.
    ///
    /// The two writes are not atomic as a unit: a storage failure between
    /// them leaves a post without a matching back-reference. The store's
    /// per-record atomicity is all that is relied upon.
    pub async fn create_post(
        &self,
        identity: Option<&Identity>,
        draft: PostDraft,
    ) -> Result<Post, DomainError> {
        let identity = require_identity(identity)?;

        Validator::new()
            .min_len("title", &draft.title, MIN_TEXT_LEN)
            .min_len("content", &draft.content, MIN_TEXT_LEN)
            .required("image", draft.image_url.as_ref())
            .finish()?;
        let image_url = draft.image_url.unwrap_or_default();

        // The creator must exist at creation time.
        let Some(mut user) = self.users.find_by_id(identity.user_id).await? else {
            tracing::debug!(user_id = %identity.user_id, "post creation by unknown user");
            return Err(DomainError::NotAuthenticated);
        };

        let post = self
            .posts
            .save(Post::new(
                identity.user_id,
                draft.title.trim().to_string(),
                draft.content.trim().to_string(),
                image_url,
            ))
            .await?;

        user.attach_post(post.id);
        if let Err(err) = self.users.save(user).await {
            // The post record exists but the owner's back-reference does
            // not; surfaced as an internal failure, left for reconciliation.
            tracing::error!(post_id = %post.id, error = %err, "post saved but owner back-reference update failed");
            return Err(err.into());
        }

        tracing::info!(post_id = %post.id, creator_id = %post.creator_id, "post created");
        Ok(post)
    }

    /// One page of the feed, newest first.
    pub async fn list_posts(
        &self,
        identity: Option<&Identity>,
        page: Option<i64>,
    ) -> Result<FeedPage, DomainError> {
        if self.config.require_auth_for_listing {
            require_identity(identity)?;
        }

        let window = pagination::window(page, self.config.page_size);
        let total = self.posts.count().await?;
        let posts = self.posts.list_page(window.skip, window.limit).await?;

        Ok(FeedPage { posts, total })
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Post"))
    }

    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("User"))
    }

    /// All posts owned by one user, for creator resolution.
    pub async fn posts_of(&self, creator_id: Uuid) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_by_creator(creator_id).await?)
    }

    /// Update a post's text and optionally replace its image.
    ///
    /// The replaced image file is scheduled for deletion only after the
    /// new post state is durably saved, so the currently-referenced asset
    /// is never removed while still referenced.
    pub async fn update_post(
        &self,
        identity: Option<&Identity>,
        id: Uuid,
        update: PostUpdate,
    ) -> Result<Post, DomainError> {
        let mut post = self.get_post(id).await?;
        let identity = require_identity(identity)?;
        if !identity.owns(post.creator_id) {
            return Err(DomainError::NotAuthorized);
        }

        Validator::new()
            .min_len("title", &update.title, MIN_TEXT_LEN)
            .min_len("content", &update.content, MIN_TEXT_LEN)
            .finish()?;

        let old_image = post.image_url.clone();
        post.title = update.title.trim().to_string();
        post.content = update.content.trim().to_string();
        if let Some(image_url) = update.image_url {
            post.image_url = image_url;
        }
        post.updated_at = chrono::Utc::now();

        let post = self.posts.save(post).await?;

        if post.image_url != old_image {
            self.assets.schedule_deletion(&old_image).await;
        }

        Ok(post)
    }

    /// Delete a post, its image file, and the owner's back-reference.
    pub async fn delete_post(
        &self,
        identity: Option<&Identity>,
        id: Uuid,
    ) -> Result<(), DomainError> {
        let post = self.get_post(id).await?;
        let identity = require_identity(identity)?;
        if !identity.owns(post.creator_id) {
            return Err(DomainError::NotAuthorized);
        }

        self.assets.schedule_deletion(&post.image_url).await;
        self.posts.delete(id).await?;

        match self.users.find_by_id(post.creator_id).await? {
            Some(mut user) => {
                user.detach_post(id);
                self.users.save(user).await?;
            }
            None => {
                tracing::warn!(post_id = %id, creator_id = %post.creator_id, "deleted post whose owner no longer exists");
            }
        }

        tracing::info!(post_id = %id, "post deleted");
        Ok(())
    }

    /// The authenticated user's own status string.
    pub async fn get_status(&self, identity: Option<&Identity>) -> Result<String, DomainError> {
        let identity = require_identity(identity)?;
        Ok(self.get_user(identity.user_id).await?.status)
    }

    /// Replace the authenticated user's status string.
    pub async fn set_status(
        &self,
        identity: Option<&Identity>,
        status: &str,
    ) -> Result<(), DomainError> {
        let identity = require_identity(identity)?;
        let mut user = self.get_user(identity.user_id).await?;
        user.status = status.to_string();
        user.updated_at = chrono::Utc::now();
        self.users.save(user).await?;
        Ok(())
    }
}

fn require_identity(identity: Option<&Identity>) -> Result<&Identity, DomainError> {
    identity.ok_or(DomainError::NotAuthenticated)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{Duration, Utc};

    use super::*;
    use crate::error::{AssetError, RepoError};
    use crate::ports::AuthError;

    #[derive(Default)]
    struct MemUsers {
        map: Mutex<HashMap<Uuid, User>>,
    }

    #[async_trait]
    impl UserRepository for MemUsers {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
            Ok(self.map.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
            Ok(self
                .map
                .lock()
                .unwrap()
                .values()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn save(&self, user: User) -> Result<User, RepoError> {
            self.map.lock().unwrap().insert(user.id, user.clone());
            Ok(user)
        }
    }

    #[derive(Default)]
    struct MemPosts {
        map: Mutex<HashMap<Uuid, Post>>,
    }

    #[async_trait]
    impl PostRepository for MemPosts {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
            Ok(self.map.lock().unwrap().get(&id).cloned())
        }

        async fn list_page(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
            let mut all: Vec<Post> = self.map.lock().unwrap().values().cloned().collect();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(all
                .into_iter()
                .skip(skip as usize)
                .take(limit as usize)
                .collect())
        }

        async fn find_by_creator(&self, creator_id: Uuid) -> Result<Vec<Post>, RepoError> {
            let mut owned: Vec<Post> = self
                .map
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.creator_id == creator_id)
                .cloned()
                .collect();
            owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(owned)
        }

        async fn count(&self) -> Result<u64, RepoError> {
            Ok(self.map.lock().unwrap().len() as u64)
        }

        async fn save(&self, post: Post) -> Result<Post, RepoError> {
            self.map.lock().unwrap().insert(post.id, post.clone());
            Ok(post)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            self.map
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        }
    }

    struct PlainHasher;

    impl PasswordService for PlainHasher {
        fn hash(&self, password: &str) -> Result<String, AuthError> {
            Ok(format!("hashed:{password}"))
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
            Ok(hash == format!("hashed:{password}"))
        }
    }

    struct StubTokens;

    impl TokenService for StubTokens {
        fn issue(&self, user_id: Uuid, _email: &str) -> Result<String, AuthError> {
            Ok(format!("tok-{user_id}"))
        }

        fn verify(&self, _token: &str) -> Result<Identity, AuthError> {
            Err(AuthError::InvalidSignature("stub".into()))
        }
    }

    #[derive(Default)]
    struct RecordingAssets {
        deleted: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AssetStore for RecordingAssets {
        async fn save(&self, extension: &str, _bytes: Vec<u8>) -> Result<String, AssetError> {
            Ok(format!("images/{}.{extension}", Uuid::new_v4()))
        }

        async fn delete(&self, asset_ref: &str) -> Result<(), AssetError> {
            self.deleted.lock().unwrap().push(asset_ref.to_string());
            Ok(())
        }
    }

    struct Fixture {
        service: FeedService,
        users: Arc<MemUsers>,
        posts: Arc<MemPosts>,
        assets: Arc<RecordingAssets>,
    }

    fn fixture_with(config: FeedConfig) -> Fixture {
        let users = Arc::new(MemUsers::default());
        let posts = Arc::new(MemPosts::default());
        let assets = Arc::new(RecordingAssets::default());
        let service = FeedService::new(
            users.clone(),
            posts.clone(),
            Arc::new(PlainHasher),
            Arc::new(StubTokens),
            assets.clone(),
            config,
        );
        Fixture {
            service,
            users,
            posts,
            assets,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(FeedConfig::default())
    }

    fn identity_for(user: &User) -> Identity {
        let now = Utc::now();
        Identity {
            user_id: user.id,
            email: user.email.clone(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
        }
    }

    fn draft(image: Option<&str>) -> PostDraft {
        PostDraft {
            title: "Hi there".into(),
            content: "Hello world".into(),
            image_url: image.map(String::from),
        }
    }

    #[tokio::test]
    async fn registration_yields_default_status_and_no_posts() {
        let fx = fixture();
        let user = fx
            .service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();

        assert_eq!(user.status, "I am new!");
        assert!(user.post_ids.is_empty());
        assert_ne!(user.password_hash, "hunter2x");
    }

    #[tokio::test]
    async fn registration_rejects_duplicate_email() {
        let fx = fixture();
        fx.service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();

        let err = fx
            .service
            .register_user("alice@example.com", "Other", "hunter2x")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn registration_lists_every_violated_field() {
        let fx = fixture();
        let err = fx
            .service
            .register_user("not-an-email", "", "abc")
            .await
            .unwrap_err();

        match err {
            DomainError::Validation(fields) => {
                let names: Vec<_> = fields.iter().map(|f| f.field).collect();
                assert_eq!(names, vec!["email", "name", "password"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_rejects_wrong_password_and_unknown_email_alike() {
        let fx = fixture();
        fx.service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();

        let wrong_password = fx
            .service
            .login("alice@example.com", "wrong")
            .await
            .unwrap_err();
        let unknown_email = fx
            .service
            .login("nobody@example.com", "hunter2x")
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, DomainError::InvalidCredential));
        assert!(matches!(unknown_email, DomainError::InvalidCredential));
    }

    #[tokio::test]
    async fn login_returns_token_for_correct_credentials() {
        let fx = fixture();
        let user = fx
            .service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();

        let auth = fx.service.login("alice@example.com", "hunter2x").await.unwrap();
        assert_eq!(auth.user_id, user.id);
        assert!(!auth.token.is_empty());
    }

    #[tokio::test]
    async fn create_post_requires_authentication() {
        let fx = fixture();
        let err = fx
            .service
            .create_post(None, draft(Some("images/a.png")))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotAuthenticated));
    }

    #[tokio::test]
    async fn create_post_without_image_fails_and_stores_nothing() {
        let fx = fixture();
        let user = fx
            .service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();

        let err = fx
            .service
            .create_post(Some(&identity_for(&user)), draft(None))
            .await
            .unwrap_err();

        match err {
            DomainError::Validation(fields) => assert_eq!(fields[0].field, "image"),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(fx.posts.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn create_post_links_both_sides_of_the_ownership_relation() {
        let fx = fixture();
        let user = fx
            .service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();

        let post = fx
            .service
            .create_post(Some(&identity_for(&user)), draft(Some("images/a.png")))
            .await
            .unwrap();

        assert_eq!(post.creator_id, user.id);
        let owner = fx.users.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(owner.post_ids, vec![post.id]);
    }

    #[tokio::test]
    async fn only_the_owner_may_update_or_delete() {
        let fx = fixture();
        let alice = fx
            .service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();
        let bob = fx
            .service
            .register_user("bob@example.com", "Bob", "hunter2x")
            .await
            .unwrap();

        let post = fx
            .service
            .create_post(Some(&identity_for(&alice)), draft(Some("images/a.png")))
            .await
            .unwrap();

        let update = PostUpdate {
            title: "Hijacked!".into(),
            content: "By bob here".into(),
            image_url: None,
        };
        let err = fx
            .service
            .update_post(Some(&identity_for(&bob)), post.id, update)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotAuthorized));

        let err = fx
            .service
            .delete_post(Some(&identity_for(&bob)), post.id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotAuthorized));

        // Unauthenticated callers get the distinct "not authenticated" kind.
        let err = fx.service.delete_post(None, post.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotAuthenticated));

        let unchanged = fx.service.get_post(post.id).await.unwrap();
        assert_eq!(unchanged.title, post.title);
    }

    #[tokio::test]
    async fn delete_removes_post_back_reference_and_image() {
        let fx = fixture();
        let alice = fx
            .service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();
        let identity = identity_for(&alice);

        let post = fx
            .service
            .create_post(Some(&identity), draft(Some("images/a.png")))
            .await
            .unwrap();

        fx.service.delete_post(Some(&identity), post.id).await.unwrap();

        let err = fx.service.get_post(post.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        let owner = fx.users.find_by_id(alice.id).await.unwrap().unwrap();
        assert!(owner.post_ids.is_empty());
        assert_eq!(*fx.assets.deleted.lock().unwrap(), vec!["images/a.png"]);
    }

    #[tokio::test]
    async fn replacing_an_image_deletes_the_old_one_after_the_update() {
        let fx = fixture();
        let alice = fx
            .service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();
        let identity = identity_for(&alice);

        let post = fx
            .service
            .create_post(Some(&identity), draft(Some("images/a.png")))
            .await
            .unwrap();

        let updated = fx
            .service
            .update_post(
                Some(&identity),
                post.id,
                PostUpdate {
                    title: "Hi there".into(),
                    content: "Hello world".into(),
                    image_url: Some("images/b.png".into()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.image_url, "images/b.png");
        assert_eq!(*fx.assets.deleted.lock().unwrap(), vec!["images/a.png"]);
    }

    #[tokio::test]
    async fn failed_validation_never_schedules_asset_deletion() {
        let fx = fixture();
        let alice = fx
            .service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();
        let identity = identity_for(&alice);

        let post = fx
            .service
            .create_post(Some(&identity), draft(Some("images/a.png")))
            .await
            .unwrap();

        let err = fx
            .service
            .update_post(
                Some(&identity),
                post.id,
                PostUpdate {
                    title: "x".into(),
                    content: "y".into(),
                    image_url: Some("images/b.png".into()),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(fx.assets.deleted.lock().unwrap().is_empty());
        let unchanged = fx.service.get_post(post.id).await.unwrap();
        assert_eq!(unchanged.image_url, "images/a.png");
    }

    #[tokio::test]
    async fn update_without_image_keeps_the_stored_reference() {
        let fx = fixture();
        let alice = fx
            .service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();
        let identity = identity_for(&alice);

        let post = fx
            .service
            .create_post(Some(&identity), draft(Some("images/a.png")))
            .await
            .unwrap();

        let updated = fx
            .service
            .update_post(
                Some(&identity),
                post.id,
                PostUpdate {
                    title: "New title".into(),
                    content: "New content".into(),
                    image_url: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.image_url, "images/a.png");
        assert!(fx.assets.deleted.lock().unwrap().is_empty());
    }

    async fn seed_posts(fx: &Fixture, creator: Uuid, count: usize) {
        let base = Utc::now();
        for i in 0..count {
            let mut post = Post::new(
                creator,
                format!("post-{}", i + 1),
                "Some content here".into(),
                format!("images/{}.png", i + 1),
            );
            post.created_at = base + Duration::seconds(i as i64);
            post.updated_at = post.created_at;
            fx.posts.save(post).await.unwrap();
        }
    }

    #[tokio::test]
    async fn pagination_is_deterministic_over_five_posts() {
        let fx = fixture();
        let alice = fx
            .service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();
        let identity = identity_for(&alice);
        seed_posts(&fx, alice.id, 5).await;

        // Newest first: page 2 of size 2 holds the 3rd and 4th ranked posts.
        let page2 = fx.service.list_posts(Some(&identity), Some(2)).await.unwrap();
        assert_eq!(page2.total, 5);
        let titles: Vec<_> = page2.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["post-3", "post-2"]);

        let page3 = fx.service.list_posts(Some(&identity), Some(3)).await.unwrap();
        let titles: Vec<_> = page3.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["post-1"]);

        let page10 = fx
            .service
            .list_posts(Some(&identity), Some(10))
            .await
            .unwrap();
        assert!(page10.posts.is_empty());
        assert_eq!(page10.total, 5);
    }

    #[tokio::test]
    async fn listing_auth_requirement_follows_the_config_flag() {
        let strict = fixture();
        let err = strict.service.list_posts(None, None).await.unwrap_err();
        assert!(matches!(err, DomainError::NotAuthenticated));

        let relaxed = fixture_with(FeedConfig {
            require_auth_for_listing: false,
            ..FeedConfig::default()
        });
        assert!(relaxed.service.list_posts(None, None).await.is_ok());
    }

    #[tokio::test]
    async fn status_round_trip() {
        let fx = fixture();
        let alice = fx
            .service
            .register_user("alice@example.com", "Alice", "hunter2x")
            .await
            .unwrap();
        let identity = identity_for(&alice);

        assert_eq!(
            fx.service.get_status(Some(&identity)).await.unwrap(),
            "I am new!"
        );

        fx.service
            .set_status(Some(&identity), "Shipping it")
            .await
            .unwrap();
        assert_eq!(
            fx.service.get_status(Some(&identity)).await.unwrap(),
            "Shipping it"
        );

        let err = fx.service.get_status(None).await.unwrap_err();
        assert!(matches!(err, DomainError::NotAuthenticated));
    }
}
