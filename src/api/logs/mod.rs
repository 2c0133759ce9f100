use actix_web::{web, HttpResponse};

mod get;
mod patch;
mod post;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/logs")
            .route(web::get().to(get::logs))
            .route(web::post().to(post::log))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/logs/{id}")
            .route(web::get().to(get::log))
            .route(web::patch().to(patch::log))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
