use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::api::models::{authentication::SessionInfo, error::APIError};
use crate::auth::get_current_user;
use crate::db::models::session::Session as DBSession;
use crate::{settings, DbPool};

pub async fn me(
    pool: web::Data<DbPool>,
    server_settings: web::Data<settings::Server>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session, server_settings.inactivity_timeout_seconds)?;

    // the cookie alone is not enough: the backing session row may have been
    // deactivated or expired since it was issued
    let conn = pool.get()?;
    let session_token = current_user.session_token.clone();
    let stored = web::block::<_, _, APIError>(move || {
        Ok(DBSession::get_by_token(&conn, &session_token)?)
    })
    .await
    .map_err(|_error| {
        session.clear();
        APIError::Unauthorized
    })?;

    Ok(HttpResponse::Ok().json(SessionInfo::from(stored)))
}

pub async fn sessions(
    pool: web::Data<DbPool>,
    server_settings: web::Data<settings::Server>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session, server_settings.inactivity_timeout_seconds)?;

    let conn = pool.get()?;
    let sessions = web::block::<_, _, APIError>(move || {
        Ok(DBSession::get_all_for_user(
            &conn,
            &current_user.wallet_address,
        )?)
    })
    .await?;

    let results: Vec<SessionInfo> = sessions.into_iter().map(SessionInfo::from).collect();

    Ok(HttpResponse::Ok().json(results))
}
