use std::convert::TryFrom;

use actix_web::{
    web,
    web::{Path, Query},
    HttpResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::models::{error::APIError, reputation_quest::ReputationQuest};
use crate::db::models::reputation_quest::ReputationQuest as DBReputationQuest;
use crate::DbPool;

#[derive(Deserialize)]
pub struct Info {
    active: Option<bool>,
}

pub async fn quests(pool: web::Data<DbPool>, query: Query<Info>) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let active = query.active;

    let quests = web::block::<_, _, APIError>(move || {
        let quests = DBReputationQuest::get_all(&conn, active)?;
        quests
            .into_iter()
            .map(ReputationQuest::try_from)
            .collect::<Result<Vec<ReputationQuest>, APIError>>()
    })
    .await?;

    Ok(HttpResponse::Ok().json(quests))
}

#[derive(Deserialize)]
pub struct PathInfo {
    id: Uuid,
}

pub async fn quest(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let id = path.id;

    let quest = web::block::<_, _, APIError>(move || {
        Ok(ReputationQuest::try_from(DBReputationQuest::get(
            &conn, &id,
        )?)?)
    })
    .await?;

    Ok(HttpResponse::Ok().json(quest))
}
