use std::convert::TryFrom;

use actix_web::{
    web,
    web::{Path, Query},
    HttpResponse,
};
use serde::{Deserialize, Serialize};

use crate::api::models::{
    achievement::UnlockedAchievement,
    common::{pagination, ListResponse},
    error::APIError,
    reputation_quest::QuestProgress,
    trade::TradeAggregate,
    user::{ReputationLevel, User, VerificationLevel},
};
use crate::db::models::{
    trade::Trade as DBTrade, user::User as DBUser,
    user_achievement::UserAchievement as DBUserAchievement,
    user_reputation_quest::UserReputationQuest as DBUserReputationQuest,
};
use crate::DbPool;

#[derive(Deserialize)]
pub struct Info {
    page: Option<i64>,
    limit: Option<i64>,
    reputation_level: Option<ReputationLevel>,
    verification_level: Option<VerificationLevel>,
    banned: Option<bool>,
    min_reputation: Option<i32>,
}

pub async fn users(pool: web::Data<DbPool>, query: Query<Info>) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;

    let (page, limit) = pagination(query.page, query.limit)?;
    let reputation_level = query.reputation_level.map(|level| level.into());
    let verification_level = query.verification_level.map(|level| level.into());
    let banned = query.banned;
    let min_reputation = query.min_reputation;

    let result = web::block::<_, _, APIError>(move || {
        let (users, total_pages) = DBUser::get_list(
            &conn,
            reputation_level,
            verification_level,
            banned,
            min_reputation,
            page,
            limit,
        )?;
        let results = users
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<User>, APIError>>()?;

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
    address: String,
}

pub async fn user(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let address = path.address.clone();

    let user =
        web::block::<_, _, APIError>(move || Ok(User::try_from(DBUser::get(&conn, &address)?)?))
            .await?;

    Ok(HttpResponse::Ok().json(user))
}

pub async fn user_quests(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let address = path.address.clone();

    let progress = web::block::<_, _, APIError>(move || {
        let records = DBUserReputationQuest::get_all_for_user(&conn, &address)?;
        records
            .into_iter()
            .map(|(progress, quest)| QuestProgress::from(progress, quest))
            .collect::<Result<Vec<QuestProgress>, APIError>>()
    })
    .await?;

    Ok(HttpResponse::Ok().json(progress))
}

pub async fn user_achievements(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let address = path.address.clone();

    let unlocks = web::block::<_, _, APIError>(move || {
        let records = DBUserAchievement::get_all_for_user(&conn, &address)?;
        records
            .into_iter()
            .map(|(unlock, achievement)| UnlockedAchievement::from(unlock, achievement))
            .collect::<Result<Vec<UnlockedAchievement>, APIError>>()
    })
    .await?;

    Ok(HttpResponse::Ok().json(unlocks))
}

#[derive(Serialize)]
pub struct UserStats {
    pub trades: TradeAggregate,
    pub completed_quests: i64,
    pub unlocked_achievements: i64,
}

pub async fn user_stats(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let address = path.address.clone();

    let stats = web::block::<_, _, APIError>(move || {
        let aggregate = DBTrade::aggregate_for_user(&conn, &address)?;
        let completed_quests = DBUserReputationQuest::count_completed_for_user(&conn, &address)?;
        let unlocked_achievements = DBUserAchievement::count_for_user(&conn, &address)?;

        Ok(UserStats {
            trades: TradeAggregate::from(aggregate),
            completed_quests,
            unlocked_achievements,
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(stats))
}
