use std::convert::TryFrom;

use actix_web::{web, HttpResponse};
use log::info;

use crate::api::models::{
    error::APIError,
    token::parse_amount,
    user::{NewUser, User},
};
use crate::db::models::user::{NewUser as DBNewUser, User as DBUser};
use crate::DbPool;

pub async fn user(
    pool: web::Data<DbPool>,
    new_user: web::Json<NewUser>,
) -> Result<HttpResponse, APIError> {
    let new_user = new_user.into_inner();

    if new_user.wallet_address.is_empty() {
        return Err(APIError::InvalidValue {
            description: "wallet address must not be empty".to_owned(),
        });
    }
    let allocation_cap = parse_amount(&new_user.allocation_cap, "allocation_cap")?;

    info!("registering user {}", new_user.wallet_address);

    let conn = pool.get()?;
    let user = web::block::<_, _, APIError>(move || {
        let new_user = DBNewUser {
            wallet_address: new_user.wallet_address,
            world_id_hash: new_user.world_id_hash,
            verification_level: new_user.verification_level.into(),
            allocation_cap,
        };

        Ok(User::try_from(DBUser::insert(&conn, &new_user)?)?)
    })
    .await?;

    Ok(HttpResponse::Created().json(user))
}
