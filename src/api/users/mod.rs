use actix_web::{web, HttpResponse};

mod delete;
mod get;
mod patch;
mod post;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(get::users))
            .route(web::post().to(post::user))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/users/{address}")
            .route(web::get().to(get::user))
            .route(web::patch().to(patch::user))
            .route(web::delete().to(delete::user))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/users/{address}/quests")
            .route(web::get().to(get::user_quests))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/users/{address}/achievements")
            .route(web::get().to(get::user_achievements))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/users/{address}/stats")
            .route(web::get().to(get::user_stats))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
