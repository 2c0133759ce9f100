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
    reputation_quest::{PatchReputationQuest, ReputationQuest},
};
use crate::db::models::reputation_quest::{
    ReputationQuest as DBReputationQuest, UpdateReputationQuest,
};
use crate::DbPool;

#[derive(Deserialize)]
pub struct PathInfo {
    id: Uuid,
}

pub async fn quest(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
    patch: Json<PatchReputationQuest>,
) -> Result<HttpResponse, APIError> {
    let patch = patch.into_inner();
    let id = path.id;

    if patch.is_empty() {
        return Err(APIError::InvalidValue {
            description: "at least one field must be provided".to_owned(),
        });
    }

    if let Some(target_value) = patch.target_value {
        if target_value <= 0 {
            return Err(APIError::InvalidValue {
                description: "quest target value must be positive".to_owned(),
            });
        }
    }

    info!("updating quest {}", id);

    let conn = pool.get()?;
    let quest = web::block::<_, _, APIError>(move || {
        let update = UpdateReputationQuest {
            title: patch.title,
            description: patch.description,
            target_value: patch.target_value,
            reward: patch.reward,
            is_active: patch.is_active,
        };

        Ok(ReputationQuest::try_from(DBReputationQuest::update(
            &conn, &id, &update,
        )?)?)
    })
    .await?;

    Ok(HttpResponse::Ok().json(quest))
}
