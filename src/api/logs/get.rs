use std::convert::TryFrom;

use actix_web::{
    web,
    web::{Path, Query},
    HttpResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::models::{
    anti_manipulation_log::{ActivityType, AntiManipulationLog},
    common::{pagination, ListResponse},
    error::APIError,
};
use crate::db::models::anti_manipulation_log::AntiManipulationLog as DBAntiManipulationLog;
use crate::DbPool;

#[derive(Deserialize)]
pub struct Info {
    page: Option<i64>,
    limit: Option<i64>,
    user: Option<String>,
    activity_type: Option<ActivityType>,
    resolved: Option<bool>,
}

pub async fn logs(pool: web::Data<DbPool>, query: Query<Info>) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;

    let (page, limit) = pagination(query.page, query.limit)?;
    let user = query.user.clone();
    let activity_type = query.activity_type.map(|activity_type| activity_type.into());
    let resolved = query.resolved;

    let result = web::block::<_, _, APIError>(move || {
        let (logs, total_pages) = DBAntiManipulationLog::get_list(
            &conn,
            user.as_ref(),
            activity_type,
            resolved,
            page,
            limit,
        )?;
        let results = logs
            .into_iter()
            .map(AntiManipulationLog::try_from)
            .collect::<Result<Vec<AntiManipulationLog>, APIError>>()?;

        Ok(ListResponse {
            page,
            total_pages,
            results,
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(result))
}

#[derive(Deserialize)]
pub struct PathInfo {
    id: Uuid,
}

pub async fn log(pool: web::Data<DbPool>, path: Path<PathInfo>) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let id = path.id;

    let log = web::block::<_, _, APIError>(move || {
        Ok(AntiManipulationLog::try_from(DBAntiManipulationLog::get(
            &conn, &id,
        )?)?)
    })
    .await?;

    Ok(HttpResponse::Ok().json(log))
}
