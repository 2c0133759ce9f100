use std::convert::{TryFrom, TryInto};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::APIError;
use crate::db::models::anti_manipulation_log::AntiManipulationLog as DBAntiManipulationLog;

#[derive(Debug, Serialize, Deserialize)]
pub struct AntiManipulationLog {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub user_address: String,
    pub activity_type: ActivityType,
    pub risk_score: i32,
    pub flags: String,
    pub is_resolved: bool,
    pub resolved_at: Option<NaiveDateTime>,
    pub resolved_by: Option<String>,
}

impl TryFrom<DBAntiManipulationLog> for AntiManipulationLog {
    type Error = APIError;

    fn try_from(value: DBAntiManipulationLog) -> Result<Self, Self::Error> {
        Ok(AntiManipulationLog {
            id: value.id,
            created_at: value.created_at,
            updated_at: value.updated_at,
            user_address: value.user_address,
            activity_type: value.activity_type.try_into()?,
            risk_score: value.risk_score,
            flags: value.flags,
            is_resolved: value.is_resolved,
            resolved_at: value.resolved_at,
            resolved_by: value.resolved_by,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewAntiManipulationLog {
    pub user_address: String,
    pub activity_type: ActivityType,
    pub risk_score: i32,
    pub flags: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveLog {
    pub resolved_by: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    WashTrading = 0,
    RapidTrading = 1,
    SelfTrading = 2,
    VolumeSpike = 3,
}

const WASH_TRADING: &'static str = "wash_trading";
const RAPID_TRADING: &'static str = "rapid_trading";
const SELF_TRADING: &'static str = "self_trading";
const VOLUME_SPIKE: &'static str = "volume_spike";

impl TryFrom<&str> for ActivityType {
    type Error = APIError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            WASH_TRADING => Ok(ActivityType::WashTrading),
            RAPID_TRADING => Ok(ActivityType::RapidTrading),
            SELF_TRADING => Ok(ActivityType::SelfTrading),
            VOLUME_SPIKE => Ok(ActivityType::VolumeSpike),
            _ => Err(APIError::InvalidValue {
                description: format!("activity type cannot be {}", value),
            }),
        }
    }
}

impl TryFrom<i16> for ActivityType {
    type Error = APIError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ActivityType::WashTrading),
            1 => Ok(ActivityType::RapidTrading),
            2 => Ok(ActivityType::SelfTrading),
            3 => Ok(ActivityType::VolumeSpike),
            _ => Err(APIError::InvalidValue {
                description: format!("activity type cannot be {}", value),
            }),
        }
    }
}

impl Into<&'static str> for ActivityType {
    fn into(self) -> &'static str {
        match self {
            ActivityType::WashTrading => WASH_TRADING,
            ActivityType::RapidTrading => RAPID_TRADING,
            ActivityType::SelfTrading => SELF_TRADING,
            ActivityType::VolumeSpike => VOLUME_SPIKE,
        }
    }
}

impl Into<i16> for ActivityType {
    fn into(self) -> i16 {
        match self {
            ActivityType::WashTrading => 0,
            ActivityType::RapidTrading => 1,
            ActivityType::SelfTrading => 2,
            ActivityType::VolumeSpike => 3,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_activity_type_roundtrip() -> () {
        for activity_type in vec![
            ActivityType::WashTrading,
            ActivityType::RapidTrading,
            ActivityType::SelfTrading,
            ActivityType::VolumeSpike,
        ] {
            let discriminant: i16 = activity_type.into();
            let parsed: ActivityType = discriminant.try_into().unwrap();
            assert_eq!(parsed, activity_type);

            let name: &'static str = activity_type.into();
            let parsed: ActivityType = name.try_into().unwrap();
            assert_eq!(parsed, activity_type);
        }
    }

    #[test]
    fn test_activity_type_rejects_unknown() -> () {
        let result: Result<ActivityType, _> = 9i16.try_into();
        assert!(result.is_err());

        let result: Result<ActivityType, _> = "front_running".try_into();
        assert!(result.is_err());
    }
}
