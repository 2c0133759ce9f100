use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::models::session::Session as DBSession;

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub wallet_address: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub wallet_address: String,
    pub session_token: String,
    pub expires_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub user_address: String,
    pub expires_at: NaiveDateTime,
    pub is_active: bool,
}

impl From<DBSession> for SessionInfo {
    fn from(value: DBSession) -> Self {
        SessionInfo {
            id: value.id,
            created_at: value.created_at,
            user_address: value.user_address,
            expires_at: value.expires_at,
            is_active: value.is_active,
        }
    }
}
