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
    error::APIError,
    reputation_quest::{NewReputationQuest, ProgressReport, QuestProgress, ReputationQuest},
};
use crate::auth::get_current_user;
use crate::db::models::{
    reputation_quest::{
        NewReputationQuest as DBNewReputationQuest, ReputationQuest as DBReputationQuest,
    },
    user_reputation_quest::UserReputationQuest as DBUserReputationQuest,
};
use crate::{settings, DbPool};

pub async fn quest(
    pool: web::Data<DbPool>,
    new_quest: web::Json<NewReputationQuest>,
) -> Result<HttpResponse, APIError> {
    let new_quest = new_quest.into_inner();
    new_quest.validate()?;

    info!("creating quest {}", new_quest.title);

    let conn = pool.get()?;
    let quest = web::block::<_, _, APIError>(move || {
        let new_quest = DBNewReputationQuest {
            title: new_quest.title,
            description: new_quest.description.unwrap_or_default(),
            kind: new_quest.kind.into(),
            target_value: new_quest.target_value,
            reward: new_quest.reward,
            is_active: true,
        };

        Ok(ReputationQuest::try_from(DBReputationQuest::insert(
            &conn, &new_quest,
        )?)?)
    })
    .await?;

    Ok(HttpResponse::Created().json(quest))
}

#[derive(Deserialize)]
pub struct PathInfo {
    id: Uuid,
}

/// Progress reports are recorded for the authenticated wallet. The upsert
/// keeps progress monotonic and never reverts a completion.
pub async fn progress(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
    report: Json<ProgressReport>,
    server_settings: web::Data<settings::Server>,
    session: Session,
) -> Result<HttpResponse, APIError> {
    let current_user = get_current_user(&session, server_settings.inactivity_timeout_seconds)?;
    let quest_id = path.id;
    let report = report.into_inner();

    if report.progress < 0 {
        return Err(APIError::InvalidValue {
            description: "progress must not be negative".to_owned(),
        });
    }

    let conn = pool.get()?;
    let progress = web::block::<_, _, APIError>(move || {
        let quest = DBReputationQuest::get(&conn, &quest_id)?;
        if !quest.is_active {
            return Err(APIError::InvalidValue {
                description: "quest is not active".to_owned(),
            });
        }

        let record = DBUserReputationQuest::upsert_progress(
            &conn,
            &current_user.wallet_address,
            &quest,
            report.progress,
        )?;

        Ok(QuestProgress::from(record, quest)?)
    })
    .await?;

    Ok(HttpResponse::Ok().json(progress))
}
