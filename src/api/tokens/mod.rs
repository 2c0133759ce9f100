use actix_web::{web, HttpResponse};

mod delete;
mod get;
mod patch;
mod post;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/tokens")
            .route(web::get().to(get::tokens))
            .route(web::post().to(post::token))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/tokens/{address}")
            .route(web::get().to(get::token))
            .route(web::patch().to(patch::token))
            .route(web::delete().to(delete::token))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/tokens/{address}/stats")
            .route(web::get().to(get::token_stats))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
