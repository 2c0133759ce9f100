use actix_web::{web, HttpResponse};

mod get;

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/stats/platform")
            .route(web::get().to(get::platform))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/stats/tokens")
            .route(web::get().to(get::tokens))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
    cfg.service(
        web::resource("/stats/traders")
            .route(web::get().to(get::traders))
            .route(web::head().to(|| HttpResponse::MethodNotAllowed())),
    );
}
