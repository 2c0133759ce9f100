use std::convert::{TryFrom, TryInto};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::APIError;
use crate::db::models::{
    reputation_quest::ReputationQuest as DBReputationQuest,
    user_reputation_quest::UserReputationQuest as DBUserReputationQuest,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ReputationQuest {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub title: String,
    pub description: String,
    pub kind: QuestKind,
    pub target_value: i64,
    pub reward: i32,
    pub is_active: bool,
}

impl TryFrom<DBReputationQuest> for ReputationQuest {
    type Error = APIError;

    fn try_from(value: DBReputationQuest) -> Result<Self, Self::Error> {
        Ok(ReputationQuest {
            id: value.id,
            created_at: value.created_at,
            updated_at: value.updated_at,
            title: value.title,
            description: value.description,
            kind: value.kind.try_into()?,
            target_value: value.target_value,
            reward: value.reward,
            is_active: value.is_active,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewReputationQuest {
    pub title: String,
    pub description: Option<String>,
    pub kind: QuestKind,
    pub target_value: i64,
    pub reward: i32,
}

impl NewReputationQuest {
    pub fn validate(&self) -> Result<(), APIError> {
        if self.title.is_empty() {
            return Err(APIError::InvalidValue {
                description: "quest title must not be empty".to_owned(),
            });
        }
        if self.target_value <= 0 {
            return Err(APIError::InvalidValue {
                description: "quest target value must be positive".to_owned(),
            });
        }
        if self.reward < 0 {
            return Err(APIError::InvalidValue {
                description: "quest reward must not be negative".to_owned(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PatchReputationQuest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_value: Option<i64>,
    pub reward: Option<i32>,
    pub is_active: Option<bool>,
}

impl PatchReputationQuest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.target_value.is_none()
            && self.reward.is_none()
            && self.is_active.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestProgress {
    pub id: Uuid,
    pub quest: ReputationQuest,
    pub progress: i64,
    pub is_completed: bool,
    pub completed_at: Option<NaiveDateTime>,
}

impl QuestProgress {
    pub fn from(
        progress: DBUserReputationQuest,
        quest: DBReputationQuest,
    ) -> Result<QuestProgress, APIError> {
        Ok(QuestProgress {
            id: progress.id,
            quest: quest.try_into()?,
            progress: progress.progress,
            is_completed: progress.is_completed,
            completed_at: progress.completed_at,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressReport {
    pub progress: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub enum QuestKind {
    TradeCount = 0,
    Volume = 1,
    HoldDuration = 2,
    Referral = 3,
}

const TRADE_COUNT: &'static str = "trade_count";
const VOLUME: &'static str = "volume";
const HOLD_DURATION: &'static str = "hold_duration";
const REFERRAL: &'static str = "referral";

impl TryFrom<&str> for QuestKind {
    type Error = APIError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            TRADE_COUNT => Ok(QuestKind::TradeCount),
            VOLUME => Ok(QuestKind::Volume),
            HOLD_DURATION => Ok(QuestKind::HoldDuration),
            REFERRAL => Ok(QuestKind::Referral),
            _ => Err(APIError::InvalidValue {
                description: format!("quest kind cannot be {}", value),
            }),
        }
    }
}

impl TryFrom<i16> for QuestKind {
    type Error = APIError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(QuestKind::TradeCount),
            1 => Ok(QuestKind::Volume),
            2 => Ok(QuestKind::HoldDuration),
            3 => Ok(QuestKind::Referral),
            _ => Err(APIError::InvalidValue {
                description: format!("quest kind cannot be {}", value),
            }),
        }
    }
}

impl Into<&'static str> for QuestKind {
    fn into(self) -> &'static str {
        match self {
            QuestKind::TradeCount => TRADE_COUNT,
            QuestKind::Volume => VOLUME,
            QuestKind::HoldDuration => HOLD_DURATION,
            QuestKind::Referral => REFERRAL,
        }
    }
}

impl Into<i16> for QuestKind {
    fn into(self) -> i16 {
        match self {
            QuestKind::TradeCount => 0,
            QuestKind::Volume => 1,
            QuestKind::HoldDuration => 2,
            QuestKind::Referral => 3,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_quest_kind_roundtrip() -> () {
        for kind in vec![
            QuestKind::TradeCount,
            QuestKind::Volume,
            QuestKind::HoldDuration,
            QuestKind::Referral,
        ] {
            let discriminant: i16 = kind.into();
            let parsed: QuestKind = discriminant.try_into().unwrap();
            assert_eq!(parsed, kind);

            let name: &'static str = kind.into();
            let parsed: QuestKind = name.try_into().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_new_quest_validation() -> () {
        let mut quest = NewReputationQuest {
            title: "First Trades".to_owned(),
            description: None,
            kind: QuestKind::TradeCount,
            target_value: 10,
            reward: 50,
        };
        assert!(quest.validate().is_ok());

        quest.target_value = 0;
        assert!(quest.validate().is_err());

        quest.target_value = 10;
        quest.title = "".to_owned();
        assert!(quest.validate().is_err());
    }

    #[test]
    fn test_patch_quest_is_empty() -> () {
        let patch: PatchReputationQuest = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: PatchReputationQuest = serde_json::from_str(r#"{"reward": 75}"#).unwrap();
        assert!(!patch.is_empty());
    }
}
