//! HTTP handlers and route configuration.

mod auth;
mod feed;
mod health;
mod upload;

use actix_web::web;

use crate::graphql;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/auth")
                .route("/signup", web::put().to(auth::signup))
                .route("/login", web::post().to(auth::login)),
        )
        .service(
            web::scope("/feed")
                .route("/posts", web::get().to(feed::list_posts))
                .route("/post", web::post().to(feed::create_post))
                .route("/posts/{id}", web::get().to(feed::get_post))
                .route("/post/{id}", web::put().to(feed::update_post))
                .route("/post/{id}", web::delete().to(feed::delete_post))
                .route("/status", web::get().to(feed::get_status))
                .route("/status", web::put().to(feed::put_status))
                .route("/post-image", web::put().to(upload::put_post_image)),
        )
        .route("/graphql", web::post().to(graphql::graphql_handler));
}
