use std::convert::{TryFrom, TryInto};

use actix_web::{web, HttpResponse};
use log::info;

use crate::api::models::{
    error::APIError,
    token::{NewTokenRequest, Token},
};
use crate::db::models::token::{NewToken as DBNewToken, Token as DBToken};
use crate::DbPool;

pub async fn token(
    pool: web::Data<DbPool>,
    new_token: web::Json<NewTokenRequest>,
) -> Result<HttpResponse, APIError> {
    let new_token: DBNewToken = new_token.into_inner().try_into()?;

    info!(
        "launching token {} ({}) by {}",
        new_token.address, new_token.symbol, new_token.creator_address
    );

    let conn = pool.get()?;
    let token = web::block::<_, _, APIError>(move || {
        Ok(Token::try_from(DBToken::insert(&conn, &new_token)?)?)
    })
    .await?;

    Ok(HttpResponse::Created().json(token))
}
