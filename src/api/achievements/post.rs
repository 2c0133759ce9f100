use std::convert::TryFrom;

use actix_session::Session;
use actix_web::{
    web,
    web::{Json, Path},
    HttpResponse,
};
use log::info;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::models::{
    achievement::{Achievement, NewAchievement, UnlockedAchievement},
    error::APIError,
};
use crate::auth::get_current_user;
use crate::db::models::{
    achievement::{Achievement as DBAchievement, NewAchievement as DBNewAchievement},
    user_achievement::UserAchievement as DBUserAchievement,
};
use crate::{settings, DbPool};

pub async fn achievement(
    pool: web::Data<DbPool>,
    new_achievement: Json<NewAchievement>,
) -> Result<HttpResponse, APIError> {
    let new_achievement = new_achievement.into_inner();
    new_achievement.validate()?;

    info!("creating achievement {}", new_achievement.title);

    let conn = pool.get()?;
    let achievement = web::block::<_, _, APIError>(move || {
        let new_achievement = DBNewAchievement {
            title: new_achievement.title,
            description: new_achievement.description.unwrap_or_default(),
            rarity: new_achievement.rarity.into(),
            requirements: new_achievement.requirements,
            reward: new_achievement.reward,
            is_active: true,
        };

        Ok(Achievement::try_from(DBAchievement::insert(
            &conn,
            &new_achievement,
        )?)?)
    })
    .await?;

    Ok(HttpResponse::Created().json(achievement))
}

#[derive(Deserialize)]
pub struct PathInfo {
    id: Uuid,
}

/// Unlocks the achievement for the authenticated wallet. Unlocking twice is
/// a no-op returning the original unlock record.
pub async fn unlock(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
    server_settings: web::Data<settings::Server>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session, server_settings.inactivity_timeout_seconds)?;
    let achievement_id = path.id;

    info!(
        "unlocking achievement {} for {}",
        achievement_id, current_user.wallet_address
    );

    let conn = pool.get()?;
    let unlocked = web::block::<_, _, APIError>(move || {
        let achievement = DBAchievement::get(&conn, &achievement_id)?;
        if !achievement.is_active {
            return Err(APIError::InvalidValue {
                description: "achievement is not active".to_owned(),
            });
        }

        let unlock =
            DBUserAchievement::unlock(&conn, &current_user.wallet_address, &achievement_id)?;

        Ok(UnlockedAchievement::from(unlock, achievement)?)
    })
    .await?;

    Ok(HttpResponse::Ok().json(unlocked))
}
