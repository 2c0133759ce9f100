use std::convert::TryFrom;

use actix_web::{
    web,
    web::{Path, Query},
    HttpResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::models::{
    common::{pagination, ListResponse},
    error::APIError,
    trade::{Trade, TradeKind},
};
use crate::db::models::trade::Trade as DBTrade;
use crate::DbPool;

#[derive(Deserialize)]
pub struct Info {
    page: Option<i64>,
    limit: Option<i64>,
    user: Option<String>,
    token: Option<String>,
    kind: Option<TradeKind>,
    suspicious: Option<bool>,
}

pub async fn trades(pool: web::Data<DbPool>, query: Query<Info>) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;

    let (page, limit) = pagination(query.page, query.limit)?;
    let user = query.user.clone();
    let token = query.token.clone();
    let kind = query.kind.map(|kind| kind.into());
    let suspicious = query.suspicious;

    let result = web::block::<_, _, APIError>(move || {
        let (trades, total_pages) = DBTrade::get_list(
            &conn,
            user.as_ref(),
            token.as_ref(),
            kind,
            suspicious,
            page,
            limit,
        )?;
        let results = trades
            .into_iter()
            .map(Trade::try_from)
            .collect::<Result<Vec<Trade>, APIError>>()?;

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

pub async fn trade(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let id = path.id;

    let trade =
        web::block::<_, _, APIError>(move || Ok(Trade::try_from(DBTrade::get(&conn, &id)?)?))
            .await?;

    Ok(HttpResponse::Ok().json(trade))
}
