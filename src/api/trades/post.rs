use std::convert::{TryFrom, TryInto};

use actix_web::{web, HttpResponse};
use log::info;

use crate::api::models::{
    error::APIError,
    trade::{NewTradeRequest, Trade},
};
use crate::db::models::trade::{NewTrade as DBNewTrade, Trade as DBTrade};
use crate::DbPool;

pub async fn trade(
    pool: web::Data<DbPool>,
    new_trade: web::Json<NewTradeRequest>,
) -> Result<HttpResponse, APIError> {
    let new_trade: DBNewTrade = new_trade.into_inner().try_into()?;

    info!(
        "recording {} trade of {} on {} by {}",
        if new_trade.kind == 0 { "buy" } else { "sell" },
        new_trade.amount,
        new_trade.token_address,
        new_trade.user_address
    );

    let conn = pool.get()?;
    let trade = web::block::<_, _, APIError>(move || {
        Ok(Trade::try_from(DBTrade::insert_with_rollups(
            &conn, &new_trade,
        )?)?)
    })
    .await?;

    Ok(HttpResponse::Created().json(trade))
}
