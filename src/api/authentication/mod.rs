use actix_web::{web, HttpResponse};

mod delete;
mod get;
mod post;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/auth/login")
            .route(web::post().to(post::login))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/auth/logout")
            .route(web::delete().to(delete::logout))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/auth/me")
            .route(web::get().to(get::me))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/sessions")
            .route(web::get().to(get::sessions))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/sessions/expired")
            .route(web::delete().to(delete::purge_expired_sessions))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
