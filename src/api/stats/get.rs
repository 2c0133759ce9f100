use actix_web::{web, web::Query, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::api::models::{common::pagination, error::APIError};
use crate::db::models::{
    anti_manipulation_log::AntiManipulationLog as DBAntiManipulationLog, stats,
    token::Token as DBToken, trade::Trade as DBTrade, user::User as DBUser,
};
use crate::DbPool;

#[derive(Serialize)]
pub struct PlatformStats {
    pub user_count: i64,
    pub token_count: i64,
    pub trade_count: i64,
    pub unresolved_log_count: i64,
}

pub async fn platform(pool: web::Data<DbPool>) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;

    let result = web::block::<_, _, APIError>(move || {
        Ok(PlatformStats {
            user_count: DBUser::count(&conn)?,
            token_count: DBToken::count(&conn)?,
            trade_count: DBTrade::count(&conn)?,
            unresolved_log_count: DBAntiManipulationLog::count_unresolved(&conn)?,
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(result))
}

#[derive(Deserialize)]
pub struct Info {
    limit: Option<i64>,
}

#[derive(Serialize)]
pub struct TokenStats {
    pub token_address: String,
    pub trade_count: i64,
    pub total_volume: String,
    pub trader_count: i64,
}

pub async fn tokens(pool: web::Data<DbPool>, query: Query<Info>) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let (_page, limit) = pagination(None, query.limit)?;

    let rows =
        web::block::<_, _, APIError>(move || Ok(stats::trades_by_token(&conn, limit)?)).await?;

    let results: Vec<TokenStats> = rows
        .into_iter()
        .map(|row| TokenStats {
            token_address: row.token_address,
            trade_count: row.trade_count,
            total_volume: row.total_volume.to_string(),
            trader_count: row.trader_count,
        })
        .collect();

    Ok(HttpResponse::Ok().json(results))
}

#[derive(Serialize)]
pub struct TraderStats {
    pub user_address: String,
    pub trade_count: i64,
    pub total_volume: String,
    pub token_count: i64,
}

pub async fn traders(
    pool: web::Data<DbPool>,
    query: Query<Info>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let (_page, limit) = pagination(None, query.limit)?;

    let rows =
        web::block::<_, _, APIError>(move || Ok(stats::trades_by_user(&conn, limit)?)).await?;

    let results: Vec<TraderStats> = rows
        .into_iter()
        .map(|row| TraderStats {
            user_address: row.user_address,
            trade_count: row.trade_count,
            total_volume: row.total_volume.to_string(),
            token_count: row.token_count,
        })
        .collect();

    Ok(HttpResponse::Ok().json(results))
}
