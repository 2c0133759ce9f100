use actix_web::{web, web::Path, HttpResponse};
use log::info;
use serde::Deserialize;

use crate::api::models::error::APIError;
use crate::db::models::user::User as DBUser;
use crate::DbPool;

#[derive(Deserialize)]
pub struct PathInfo {
    address: String,
}

// Users with trades or created tokens cannot be deleted; the foreign key
// RESTRICT rules surface as a 409.
pub async fn user(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
) -> Result<HttpResponse, APIError> {
    let conn = pool.get()?;
    let address = path.address.clone();

    info!("deleting user {}", address);

    web::block::<_, _, APIError>(move || Ok(DBUser::delete(&conn, &address)?)).await?;

    Ok(HttpResponse::NoContent().finish())
}
