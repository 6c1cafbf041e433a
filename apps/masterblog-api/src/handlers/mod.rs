//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                // Register /search ahead of /{id} so it is never captured
                // as an id.
                .service(web::resource("/search").route(web::get().to(posts::search_posts)))
                .service(
                    web::resource("")
                        .route(web::get().to(posts::list_posts))
                        .route(web::post().to(posts::create_post)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::put().to(posts::update_post))
                        .route(web::delete().to(posts::delete_post)),
                ),
        );
}
