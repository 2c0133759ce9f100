use std::convert::{TryFrom, TryInto};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::error::APIError;
use crate::db::models::user::User as DBUser;

#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    pub wallet_address: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub world_id_hash: Option<String>,
    pub verification_level: VerificationLevel,
    pub reputation_score: i32,
    pub reputation_level: ReputationLevel,
    pub total_trades: i32,
    pub total_volume: String,
    pub risk_score: i32,
    pub allocation_cap: String,
    pub used_allocation: String,
    pub market_cap: Option<String>,
    pub is_banned: bool,
}

impl TryFrom<DBUser> for User {
    type Error = APIError;

    fn try_from(value: DBUser) -> Result<Self, Self::Error> {
        Ok(User {
            wallet_address: value.wallet_address,
            created_at: value.created_at,
            updated_at: value.updated_at,
            world_id_hash: value.world_id_hash,
            verification_level: value.verification_level.try_into()?,
            reputation_score: value.reputation_score,
            reputation_level: value.reputation_level.try_into()?,
            total_trades: value.total_trades,
            total_volume: value.total_volume.to_string(),
            risk_score: value.risk_score,
            allocation_cap: value.allocation_cap.to_string(),
            used_allocation: value.used_allocation.to_string(),
            market_cap: value.market_cap.map(|market_cap| market_cap.to_string()),
            is_banned: value.is_banned,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewUser {
    pub wallet_address: String,
    pub world_id_hash: Option<String>,
    pub verification_level: VerificationLevel,
    pub allocation_cap: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PatchUser {
    pub world_id_hash: Option<String>,
    pub verification_level: Option<VerificationLevel>,
    pub reputation_score: Option<i32>,
    pub reputation_level: Option<ReputationLevel>,
    pub risk_score: Option<i32>,
    pub allocation_cap: Option<String>,
    pub market_cap: Option<String>,
    pub is_banned: Option<bool>,
}

impl PatchUser {
    // Diesel refuses to build an UPDATE with an all-None changeset, so an
    // empty patch has to be caught before it reaches the database.
    pub fn is_empty(&self) -> bool {
        self.world_id_hash.is_none()
            && self.verification_level.is_none()
            && self.reputation_score.is_none()
            && self.reputation_level.is_none()
            && self.risk_score.is_none()
            && self.allocation_cap.is_none()
            && self.market_cap.is_none()
            && self.is_banned.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum VerificationLevel {
    Unverified = 0,
    Device = 1,
    Orb = 2,
}

const UNVERIFIED: &'static str = "unverified";
const DEVICE: &'static str = "device";
const ORB: &'static str = "orb";

impl TryFrom<&str> for VerificationLevel {
    type Error = APIError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            UNVERIFIED => Ok(VerificationLevel::Unverified),
            DEVICE => Ok(VerificationLevel::Device),
            ORB => Ok(VerificationLevel::Orb),
            _ => Err(APIError::InvalidValue {
                description: format!("verification level cannot be {}", value),
            }),
        }
    }
}

impl TryFrom<i16> for VerificationLevel {
    type Error = APIError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(VerificationLevel::Unverified),
            1 => Ok(VerificationLevel::Device),
            2 => Ok(VerificationLevel::Orb),
            _ => Err(APIError::InvalidValue {
                description: format!("verification level cannot be {}", value),
            }),
        }
    }
}

impl Into<&'static str> for VerificationLevel {
    fn into(self) -> &'static str {
        match self {
            VerificationLevel::Unverified => UNVERIFIED,
            VerificationLevel::Device => DEVICE,
            VerificationLevel::Orb => ORB,
        }
    }
}

impl Into<i16> for VerificationLevel {
    fn into(self) -> i16 {
        match self {
            VerificationLevel::Unverified => 0,
            VerificationLevel::Device => 1,
            VerificationLevel::Orb => 2,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum ReputationLevel {
    Bronze = 0,
    Silver = 1,
    Gold = 2,
    Diamond = 3,
}

const BRONZE: &'static str = "bronze";
const SILVER: &'static str = "silver";
const GOLD: &'static str = "gold";
const DIAMOND: &'static str = "diamond";

impl TryFrom<&str> for ReputationLevel {
    type Error = APIError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            BRONZE => Ok(ReputationLevel::Bronze),
            SILVER => Ok(ReputationLevel::Silver),
            GOLD => Ok(ReputationLevel::Gold),
            DIAMOND => Ok(ReputationLevel::Diamond),
            _ => Err(APIError::InvalidValue {
                description: format!("reputation level cannot be {}", value),
            }),
        }
    }
}

impl TryFrom<i16> for ReputationLevel {
    type Error = APIError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ReputationLevel::Bronze),
            1 => Ok(ReputationLevel::Silver),
            2 => Ok(ReputationLevel::Gold),
            3 => Ok(ReputationLevel::Diamond),
            _ => Err(APIError::InvalidValue {
                description: format!("reputation level cannot be {}", value),
            }),
        }
    }
}

impl Into<&'static str> for ReputationLevel {
    fn into(self) -> &'static str {
        match self {
            ReputationLevel::Bronze => BRONZE,
            ReputationLevel::Silver => SILVER,
            ReputationLevel::Gold => GOLD,
            ReputationLevel::Diamond => DIAMOND,
        }
    }
}

impl Into<i16> for ReputationLevel {
    fn into(self) -> i16 {
        match self {
            ReputationLevel::Bronze => 0,
            ReputationLevel::Silver => 1,
            ReputationLevel::Gold => 2,
            ReputationLevel::Diamond => 3,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_verification_level_roundtrip() -> () {
        for level in vec![
            VerificationLevel::Unverified,
            VerificationLevel::Device,
            VerificationLevel::Orb,
        ] {
            let discriminant: i16 = level.into();
            let parsed: VerificationLevel = discriminant.try_into().unwrap();
            assert_eq!(parsed, level);

            let name: &'static str = level.into();
            let parsed: VerificationLevel = name.try_into().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_verification_level_rejects_unknown() -> () {
        let result: Result<VerificationLevel, _> = 7i16.try_into();
        assert!(result.is_err());

        let result: Result<VerificationLevel, _> = "partial".try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_reputation_level_roundtrip() -> () {
        for level in vec![
            ReputationLevel::Bronze,
            ReputationLevel::Silver,
            ReputationLevel::Gold,
            ReputationLevel::Diamond,
        ] {
            let discriminant: i16 = level.into();
            let parsed: ReputationLevel = discriminant.try_into().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_reputation_level_rejects_unknown() -> () {
        let result: Result<ReputationLevel, _> = 4i16.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_user_is_empty() -> () {
        let patch: PatchUser = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: PatchUser = serde_json::from_str(r#"{"is_banned": true}"#).unwrap();
        assert!(!patch.is_empty());
    }
}
