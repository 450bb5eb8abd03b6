//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::{invalid_data_body, invalid_id_body, invalid_list_query};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .service(
                        web::resource(vec!["", "/"])
                            .app_data(web::JsonConfig::default().error_handler(invalid_data_body))
                            .app_data(web::QueryConfig::default().error_handler(invalid_list_query))
                            .route(web::get().to(posts::list_posts))
                            .route(web::post().to(posts::create_post)),
                    )
                    .service(
                        web::resource("/{id}")
                            .app_data(web::JsonConfig::default().error_handler(invalid_id_body))
                            .route(web::get().to(posts::get_post))
                            .route(web::put().to(posts::update_post))
                            .route(web::delete().to(posts::delete_post)),
                    ),
            ),
    );
}
