use actix_cors::Cors;
use actix_session::CookieSession;
use actix_web::{middleware, web, App, HttpServer, Responder};

#[macro_use]
extern crate diesel;
extern crate dotenv;
#[macro_use]
extern crate diesel_migrations;
#[macro_use]
extern crate lazy_static;

use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use diesel_migrations::embed_migrations;
use dotenv::dotenv;
use log::info;

mod api;
mod auth;
mod db;
mod settings;

type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

embed_migrations!("./migrations");

lazy_static! {
    static ref CONFIG: settings::Settings =
        settings::Settings::new().expect("config can be loaded");
}

fn database_url() -> String {
    dotenv().ok();
    let user = &CONFIG.database.user;
    let password = &CONFIG.database.password;
    let host = &CONFIG.database.host;
    let port = &CONFIG.database.port;
    let name = &CONFIG.database.name;

    format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
}

async fn index() -> impl Responder {
    "launchpad-backend"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let database_url = database_url();
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool.");

    let _result = embedded_migrations::run_with_output(
        &pool
            .get()
            .expect("Failed to get a connection from the pool"),
        &mut std::io::stdout(),
    );

    db::sync_catalogs(&pool, &CONFIG)
        .await
        .map_err(|error| std::io::Error::new(std::io::ErrorKind::Other, error))?;

    info!("starting server on {} ({})", CONFIG.server.address, CONFIG.env);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
        App::new()
            .data(pool.clone())
            .wrap(cors)
            .wrap(middleware::Compress::default())
            .wrap(
                CookieSession::signed(CONFIG.server.session_secret.as_bytes())
                    .name("launchpad_session")
                    .secure(false),
            )
            .service(web::scope("/app").route("/index.html", web::get().to(index)))
            .service(
                web::scope("/api/v1")
                    .data(CONFIG.server.clone())
                    .configure(api::users::api_config)
                    .configure(api::tokens::api_config)
                    .configure(api::trades::api_config)
                    .configure(api::quests::api_config)
                    .configure(api::achievements::api_config)
                    .configure(api::logs::api_config)
                    .configure(api::authentication::api_config)
                    .configure(api::stats::api_config),
            )
    })
    .bind(&CONFIG.server.address)?
    .run()
    .await
}
