use actix_web::{web, HttpResponse};

mod delete;
mod get;
mod patch;
mod post;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/achievements")
            .route(web::get().to(get::achievements))
            .route(web::post().to(post::achievement))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/achievements/{id}")
            .route(web::get().to(get::achievement))
            .route(web::patch().to(patch::achievement))
            .route(web::delete().to(delete::achievement))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/achievements/{id}/unlock")
            .route(web::post().to(post::unlock))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
