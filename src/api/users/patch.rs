use std::convert::TryFrom;

use actix_web::{
    web,
    web::{Json, Path},
    HttpResponse,
};
use log::info;
use serde::Deserialize;

use crate::api::models::{
    error::APIError,
    token::parse_amount,
    user::{PatchUser, User},
};
use crate::db::models::user::{UpdateUser, User as DBUser};
use crate::DbPool;

#[derive(Deserialize)]
pub struct PathInfo {
    address: String,
}

pub async fn user(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
    patch: Json<PatchUser>,
) -> Result<HttpResponse, APIError> {
    let patch = patch.into_inner();
    let address = path.address.clone();

    if patch.is_empty() {
        return Err(APIError::InvalidValue {
            description: "at least one field must be provided".to_owned(),
        });
    }

    let allocation_cap = patch
        .allocation_cap
        .as_ref()
        .map(|cap| parse_amount(cap, "allocation_cap"))
        .map_or(Ok(None), |r| r.map(Some))?;
    let market_cap = patch
        .market_cap
        .as_ref()
        .map(|cap| parse_amount(cap, "market_cap"))
        .map_or(Ok(None), |r| r.map(Some))?;

    info!("updating user {}", address);

    let conn = pool.get()?;
    let user = web::block::<_, _, APIError>(move || {
        let update = UpdateUser {
            world_id_hash: patch.world_id_hash,
            verification_level: patch.verification_level.map(|level| level.into()),
            reputation_score: patch.reputation_score,
            reputation_level: patch.reputation_level.map(|level| level.into()),
            risk_score: patch.risk_score,
            allocation_cap,
            market_cap,
            is_banned: patch.is_banned,
        };

        Ok(User::try_from(DBUser::update(&conn, &address, &update)?)?)
    })
    .await?;

    Ok(HttpResponse::Ok().json(user))
}
