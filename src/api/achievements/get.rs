use std::convert::TryFrom;

use actix_web::{
    web,
    web::{Path, Query},
    HttpResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::models::{
    achievement::{Achievement, AchievementRarity},
    error::APIError,
};
use crate::db::models::achievement::Achievement as DBAchievement;
use crate::DbPool;

#[derive(Deserialize)]
pub struct Info {
    active: Option<bool>,
    rarity: Option<AchievementRarity>,
}

pub async fn achievements(
    pool: web::Data<DbPool>,
    query: Query<Info>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let active = query.active;
    let rarity = query.rarity.map(|rarity| rarity.into());

    let achievements = web::block::<_, _, APIError>(move || {
        let achievements = DBAchievement::get_all(&conn, active, rarity)?;
        achievements
            .into_iter()
            .map(Achievement::try_from)
            .collect::<Result<Vec<Achievement>, APIError>>()
    })
    .await?;

    Ok(HttpResponse::Ok().json(achievements))
}

#[derive(Deserialize)]
pub struct PathInfo {
    id: Uuid,
}

pub async fn achievement(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let id = path.id;

    let achievement = web::block::<_, _, APIError>(move || {
        Ok(Achievement::try_from(DBAchievement::get(&conn, &id)?)?)
    })
    .await?;

    Ok(HttpResponse::Ok().json(achievement))
}
