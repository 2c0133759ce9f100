use actix_session::Session;
use actix_web::{web, HttpResponse};
use log::info;

use crate::api::models::error::APIError;
use crate::auth::{get_current_user, remove_current_user};
use crate::db::models::session::Session as DBSession;
use crate::{settings, DbPool};

pub async fn logout(
    pool: web::Data<DbPool>,
    server_settings: web::Data<settings::Server>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session, server_settings.inactivity_timeout_seconds)?;

    info!("user {} logged out", current_user.wallet_address);

    let conn = pool.get()?;
    web::block::<_, _, APIError>(move || {
        let _deactivated = DBSession::deactivate(&conn, &current_user.session_token)?;
        Ok(())
    })
    .await?;

    remove_current_user(&session);

    Ok(HttpResponse::NoContent().finish())
}

pub async fn purge_expired_sessions(pool: web::Data<DbPool>) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let purged = web::block::<_, _, APIError>(move || Ok(DBSession::delete_expired(&conn)?)).await?;

    info!("purged {} expired sessions", purged);

    Ok(HttpResponse::NoContent().finish())
}
