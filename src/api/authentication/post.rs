use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use log::info;
use uuid::Uuid;

use crate::api::models::{
    authentication::{LoginRequest, LoginResponse},
    error::APIError,
};
use crate::auth::{set_current_user, SessionUser};
use crate::db::models::{
    session::{NewSession, Session as DBSession},
    user::User as DBUser,
};
use crate::{settings, DbPool};

/// Opens a session for a registered wallet: a session row is recorded in the
/// database and the wallet is bound to the cookie session.
pub async fn login(
    pool: web::Data<DbPool>,
    request: web::Json<LoginRequest>,
    server_settings: web::Data<settings::Server>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let request = request.into_inner();

    if request.wallet_address.is_empty() {
        return Err(APIError::InvalidValue {
            description: "wallet address must not be empty".to_owned(),
        });
    }

    let expires_at =
        (Utc::now() + Duration::hours(server_settings.session_lifetime_hours)).naive_utc();
    let session_token = Uuid::new_v4().to_string();

    let conn = pool.get()?;
    let wallet_address = request.wallet_address.clone();
    let token = session_token.clone();
    let stored = web::block::<_, _, APIError>(move || {
        let user = DBUser::get(&conn, &wallet_address)?;
        if user.is_banned {
            return Err(APIError::Forbidden);
        }

        let new_session = NewSession {
            user_address: user.wallet_address,
            session_token: token,
            expires_at,
        };

        Ok(DBSession::insert(&conn, &new_session)?)
    })
    .await?;

    info!("user {} logged in", stored.user_address);

    set_current_user(
        &session,
        &SessionUser {
            wallet_address: stored.user_address.clone(),
            session_token: stored.session_token.clone(),
        },
    )
    .map_err(|_error| APIError::Internal {
        description: "failed to persist cookie session".to_owned(),
    })?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        wallet_address: stored.user_address,
        session_token: stored.session_token,
        expires_at: stored.expires_at,
    }))
}
