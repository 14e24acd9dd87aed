//! Application state - shared across all handlers.

use std::sync::Arc;

use feedline_core::assets::AssetLifecycle;
use feedline_core::ports::{
    AssetStore, PasswordService, PostRepository, TokenService, UserRepository,
};
use feedline_core::service::FeedService;
use feedline_infra::{
    Argon2PasswordService, InMemoryPostRepository, InMemoryUserRepository, JwtTokenService,
    LocalAssetStore, PgPostRepository, PgUserRepository,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FeedService>,
    pub tokens: Arc<dyn TokenService>,
    pub assets: Arc<dyn AssetStore>,
    pub asset_lifecycle: AssetLifecycle,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let assets: Arc<dyn AssetStore> = Arc::new(LocalAssetStore::new(&config.images_dir));

        let (users, posts) = Self::repositories(config).await;

        let service = Arc::new(FeedService::new(
            users,
            posts,
            passwords,
            tokens.clone(),
            assets.clone(),
            config.feed.clone(),
        ));

        tracing::info!("Application state initialized");

        Self {
            service,
            tokens,
            asset_lifecycle: AssetLifecycle::new(assets.clone()),
            assets,
        }
    }

    async fn repositories(
        config: &AppConfig,
    ) -> (Arc<dyn UserRepository>, Arc<dyn PostRepository>) {
        match &config.database {
            Some(db_config) => match feedline_infra::connect(db_config).await {
                Ok(conn) => (
                    Arc::new(PgUserRepository::new(conn.clone())),
                    Arc::new(PgPostRepository::new(conn)),
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {e}. Using in-memory fallback."
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        }
    }

    fn in_memory() -> (Arc<dyn UserRepository>, Arc<dyn PostRepository>) {
        (
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }
}
