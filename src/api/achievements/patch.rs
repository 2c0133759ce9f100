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
    achievement::{Achievement, PatchAchievement},
    error::APIError,
};
use crate::db::models::achievement::{Achievement as DBAchievement, UpdateAchievement};
use crate::DbPool;

#[derive(Deserialize)]
pub struct PathInfo {
    id: Uuid,
}

pub async fn achievement(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
    patch: Json<PatchAchievement>,
) -> Result<HttpResponse, APIError> {
    let patch = patch.into_inner();
    let id = path.id;

    if patch.is_empty() {
        return Err(APIError::InvalidValue {
            description: "at least one field must be provided".to_owned(),
        });
    }

    if let Some(reward) = patch.reward {
        if reward < 0 {
            return Err(APIError::InvalidValue {
                description: "achievement reward must not be negative".to_owned(),
            });
        }
    }

    info!("updating achievement {}", id);

    let conn = pool.get()?;
    let achievement = web::block::<_, _, APIError>(move || {
        let update = UpdateAchievement {
            title: patch.title,
            description: patch.description,
            requirements: patch.requirements,
            reward: patch.reward,
            is_active: patch.is_active,
        };

        Ok(Achievement::try_from(DBAchievement::update(
            &conn, &id, &update,
        )?)?)
    })
    .await?;

    Ok(HttpResponse::Ok().json(achievement))
}
