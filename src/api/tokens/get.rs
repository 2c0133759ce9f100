use std::convert::TryFrom;

use actix_web::{
    web,
    web::{Path, Query},
    HttpResponse,
};
use serde::Deserialize;

use crate::api::models::{
    common::{pagination, ListResponse},
    error::APIError,
    token::{Token, TokenOrder, TokenStatus},
    trade::TradeAggregate,
};
use crate::db::models::{token::Token as DBToken, trade::Trade as DBTrade};
use crate::DbPool;

#[derive(Deserialize)]
pub struct Info {
    page: Option<i64>,
    limit: Option<i64>,
    status: Option<TokenStatus>,
    creator: Option<String>,
    order: Option<TokenOrder>,
    symbol: Option<String>,
}

pub async fn tokens(pool: web::Data<DbPool>, query: Query<Info>) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;

    // symbol is a unique column; a symbol query is a lookup, not a listing
    if let Some(symbol) = query.symbol.clone() {
        let token = web::block::<_, _, APIError>(move || {
            Ok(Token::try_from(DBToken::get_by_symbol(&conn, &symbol)?)?)
        })
        .await?;

        return Ok(HttpResponse::Ok().json(token));
    }

    let (page, limit) = pagination(query.page, query.limit)?;
    let status = query.status.map(|status| status.into());
    let creator = query.creator.clone();
    let order = query.order.unwrap_or_default();

    let result = web::block::<_, _, APIError>(move || {
        let (tokens, total_pages) =
            DBToken::get_list(&conn, status, creator.as_ref(), order, page, limit)?;
        let results = tokens
            .into_iter()
            .map(Token::try_from)
            .collect::<Result<Vec<Token>, APIError>>()?;

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

pub async fn token(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let address = path.address.clone();

    let token =
        web::block::<_, _, APIError>(move || Ok(Token::try_from(DBToken::get(&conn, &address)?)?))
            .await?;

    Ok(HttpResponse::Ok().json(token))
}

pub async fn token_stats(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let address = path.address.clone();

    let aggregate = web::block::<_, _, APIError>(move || {
        Ok(DBTrade::aggregate_for_token(&conn, &address)?)
    })
    .await?;

    Ok(HttpResponse::Ok().json(TradeAggregate::from(aggregate)))
}
