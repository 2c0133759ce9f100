use actix_web::{web, web::Path, HttpResponse};
use log::info;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::models::error::APIError;
use crate::db::models::achievement::Achievement as DBAchievement;
use crate::DbPool;

#[derive(Deserialize)]
pub struct PathInfo {
    id: Uuid,
}

// Deleting an achievement cascades to all per-user unlock rows.
pub async fn achievement(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let id = path.id;

    info!("deleting achievement {}", id);

    web::block::<_, _, APIError>(move || Ok(DBAchievement::delete(&conn, &id)?)).await?;

    Ok(HttpResponse::NoContent().finish())
}
