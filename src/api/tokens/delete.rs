use actix_web::{web, web::Path, HttpResponse};
use log::info;
use serde::Deserialize;

use crate::api::models::error::APIError;
use crate::db::models::token::Token as DBToken;
use crate::DbPool;

#[derive(Deserialize)]
pub struct PathInfo {
    address: String,
}

// Tokens with recorded trades cannot be deleted; the foreign key RESTRICT
// rule surfaces as a 409.
pub async fn token(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let address = path.address.clone();

    info!("deleting token {}", address);

    web::block::<_, _, APIError>(move || Ok(DBToken::delete(&conn, &address)?)).await?;

    Ok(HttpResponse::NoContent().finish())
}
