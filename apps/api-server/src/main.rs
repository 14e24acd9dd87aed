//! # Feedline API Server
//!
//! Hosts both protocol surfaces - the REST feed API and the GraphQL
//! endpoint - over the single `FeedService` implementation.

use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod graphql;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Feedline API server on {}:{}",
        config.host,
        config.port
    );

    // The static file service refuses to start on a missing directory.
    std::fs::create_dir_all(&config.images_dir)?;

    let state = AppState::new(&config).await;
    let schema = graphql::build_schema(state.service.clone());
    let images_dir = config.images_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add((
                        "Access-Control-Allow-Methods",
                        "GET, POST, PUT, PATCH, DELETE",
                    ))
                    .add(("Access-Control-Allow-Headers", "Content-Type, Authorization")),
            )
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .service(Files::new("/images", images_dir.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,feedline_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
