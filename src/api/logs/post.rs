use std::convert::TryFrom;

use actix_web::{web, HttpResponse};
use log::info;

use crate::api::models::{
    anti_manipulation_log::{AntiManipulationLog, NewAntiManipulationLog},
    error::APIError,
};
use crate::db::models::anti_manipulation_log::{
    AntiManipulationLog as DBAntiManipulationLog,
    NewAntiManipulationLog as DBNewAntiManipulationLog,
};
use crate::DbPool;

// Flagged-activity entries come from external review tooling; the server
// stores them verbatim and never derives its own flags.
pub async fn log(
    pool: web::Data<DbPool>,
    new_log: web::Json<NewAntiManipulationLog>,
) -> Result<HttpResponse, APIError> {
    let new_log = new_log.into_inner();

    if new_log.user_address.is_empty() {
        return Err(APIError::InvalidValue {
            description: "user address must not be empty".to_owned(),
        });
    }

    info!(
        "flagging activity for user {}: {:?}",
        new_log.user_address, new_log.activity_type
    );

    let conn = pool.get()?;
    let log = web::block::<_, _, APIError>(move || {
        let new_log = DBNewAntiManipulationLog {
            user_address: new_log.user_address,
            activity_type: new_log.activity_type.into(),
            risk_score: new_log.risk_score,
            flags: new_log.flags,
        };

        Ok(AntiManipulationLog::try_from(DBAntiManipulationLog::insert(
            &conn, &new_log,
        )?)?)
    })
    .await?;

    Ok(HttpResponse::Created().json(log))
}
