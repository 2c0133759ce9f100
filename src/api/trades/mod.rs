use actix_web::{web, HttpResponse};

mod get;
mod patch;
mod post;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/trades")
            .route(web::get().to(get::trades))
            .route(web::post().to(post::trade))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/trades/{id}")
            .route(web::get().to(get::trade))
            .route(web::patch().to(patch::trade))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
