use actix_web::{web, HttpResponse};

mod delete;
mod get;
mod patch;
mod post;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/quests")
            .route(web::get().to(get::quests))
            .route(web::post().to(post::quest))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/quests/{id}")
            .route(web::get().to(get::quest))
            .route(web::patch().to(patch::quest))
            .route(web::delete().to(delete::quest))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/quests/{id}/progress")
            .route(web::post().to(post::progress))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
