// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .route("/models", web::get().to(handlers::get_models))
            .service(
                web::scope("/quiz")
                    .route("", web::post().to(handlers::generate_quiz))
                    .route("/{id}", web::get().to(handlers::get_quiz))
                    .route("/{id}/score", web::post().to(handlers::score_quiz))
            )
    );
}
