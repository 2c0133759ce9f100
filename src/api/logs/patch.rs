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
    anti_manipulation_log::{AntiManipulationLog, ResolveLog},
    error::APIError,
};
use crate::db::models::anti_manipulation_log::AntiManipulationLog as DBAntiManipulationLog;
use crate::DbPool;

#[derive(Deserialize)]
pub struct PathInfo {
    id: Uuid,
}

pub async fn log(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
    resolve: Json<ResolveLog>,
) -> Result<HttpResponse, APIError> {
    let resolve = resolve.into_inner();
    let id = path.id;

    if resolve.resolved_by.is_empty() {
        return Err(APIError::InvalidValue {
            description: "resolved_by must not be empty".to_owned(),
        });
    }

    info!("resolving log {} by {}", id, resolve.resolved_by);

    let conn = pool.get()?;
    let log = web::block::<_, _, APIError>(move || {
        Ok(AntiManipulationLog::try_from(
            DBAntiManipulationLog::mark_resolved(&conn, &id, &resolve.resolved_by)?,
        )?)
    })
    .await?;

    Ok(HttpResponse::Ok().json(log))
}
