use std::convert::TryFrom;

use actix_web::{
    web,
    web::{Json, Path},
    HttpResponse,
};
use log::info;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::models::{
    error::APIError,
    trade::{PatchTrade, Trade},
};
use crate::db::models::trade::{Trade as DBTrade, UpdateTrade};
use crate::DbPool;

#[derive(Deserialize)]
pub struct PathInfo {
    id: Uuid,
}

// Settlement and review metadata only; the economic fields of a recorded
// trade are immutable.
pub async fn trade(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
    patch: Json<PatchTrade>,
) -> Result<HttpResponse, APIError> {
    let patch = patch.into_inner();
    let id = path.id;

    if patch.is_empty() {
        return Err(APIError::InvalidValue {
            description: "at least one field must be provided".to_owned(),
        });
    }

    info!("updating trade {}", id);

    let conn = pool.get()?;
    let trade = web::block::<_, _, APIError>(move || {
        let update = UpdateTrade {
            block_number: patch.block_number,
            transaction_hash: patch.transaction_hash,
            risk_score: patch.risk_score,
            is_suspicious: patch.is_suspicious,
            manipulation_flags: patch.manipulation_flags,
        };

        Ok(Trade::try_from(DBTrade::update(&conn, &id, &update)?)?)
    })
    .await?;

    Ok(HttpResponse::Ok().json(trade))
}
