use actix_web::{web, web::Path, HttpResponse};
use log::info;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::models::error::APIError;
use crate::db::models::reputation_quest::ReputationQuest as DBReputationQuest;
use crate::DbPool;

#[derive(Deserialize)]
pub struct PathInfo {
    id: Uuid,
}

// Deleting a quest cascades to all per-user progress rows.
pub async fn quest(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let id = path.id;

    info!("deleting quest {}", id);

    web::block::<_, _, APIError>(move || Ok(DBReputationQuest::delete(&conn, &id)?)).await?;

    Ok(HttpResponse::NoContent().finish())
}
