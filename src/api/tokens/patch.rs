use std::convert::TryFrom;

use actix_web::{
    web,
    web::{Json, Path},
    HttpResponse,
};
use log::info;
use serde::Deserialize;

use crate::api::models::{
    error::APIError,
    token::{PatchToken, Token},
};
use crate::db::models::token::{Token as DBToken, UpdateToken};
use crate::DbPool;

#[derive(Deserialize)]
pub struct PathInfo {
    address: String,
}

pub async fn token(
    pool: web::Data<DbPool>,
    path: Path<PathInfo>,
    patch: Json<PatchToken>,
) -> Result<HttpResponse, APIError> {
    let patch = patch.into_inner();
    let address = path.address.clone();

    if patch.is_empty() {
        return Err(APIError::InvalidValue {
            description: "at least one field must be provided".to_owned(),
        });
    }

    info!("updating token {}", address);

    let conn = pool.get()?;
    let token = web::block::<_, _, APIError>(move || {
        let update = UpdateToken {
            name: patch.name,
            description: patch.description,
            image_url: patch.image_url,
            status: patch.status.map(|status| status.into()),
        };

        Ok(Token::try_from(DBToken::update(&conn, &address, &update)?)?)
    })
    .await?;

    Ok(HttpResponse::Ok().json(token))
}
