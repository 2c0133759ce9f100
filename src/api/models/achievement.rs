use std::convert::{TryFrom, TryInto};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::APIError;
use crate::db::models::{
    achievement::Achievement as DBAchievement,
    user_achievement::UserAchievement as DBUserAchievement,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct Achievement {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub title: String,
    pub description: String,
    pub rarity: AchievementRarity,
    pub requirements: String,
    pub reward: i32,
    pub is_active: bool,
}

impl TryFrom<DBAchievement> for Achievement {
    type Error = APIError;

    fn try_from(value: DBAchievement) -> Result<Self, Self::Error> {
        Ok(Achievement {
            id: value.id,
            created_at: value.created_at,
            updated_at: value.updated_at,
            title: value.title,
            description: value.description,
            rarity: value.rarity.try_into()?,
            requirements: value.requirements,
            reward: value.reward,
            is_active: value.is_active,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewAchievement {
    pub title: String,
    pub description: Option<String>,
    pub rarity: AchievementRarity,
    pub requirements: String,
    pub reward: i32,
}

impl NewAchievement {
    pub fn validate(&self) -> Result<(), APIError> {
        if self.title.is_empty() {
            return Err(APIError::InvalidValue {
                description: "achievement title must not be empty".to_owned(),
            });
        }
        if self.reward < 0 {
            return Err(APIError::InvalidValue {
                description: "achievement reward must not be negative".to_owned(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PatchAchievement {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub reward: Option<i32>,
    pub is_active: Option<bool>,
}

impl PatchAchievement {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.requirements.is_none()
            && self.reward.is_none()
            && self.is_active.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub id: Uuid,
    pub achievement: Achievement,
    pub unlocked_at: NaiveDateTime,
}

impl UnlockedAchievement {
    pub fn from(
        unlock: DBUserAchievement,
        achievement: DBAchievement,
    ) -> Result<UnlockedAchievement, APIError> {
        Ok(UnlockedAchievement {
            id: unlock.id,
            achievement: achievement.try_into()?,
            unlocked_at: unlock.unlocked_at,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum AchievementRarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

const COMMON: &'static str = "common";
const RARE: &'static str = "rare";
const EPIC: &'static str = "epic";
const LEGENDARY: &'static str = "legendary";

impl TryFrom<&str> for AchievementRarity {
    type Error = APIError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            COMMON => Ok(AchievementRarity::Common),
            RARE => Ok(AchievementRarity::Rare),
            EPIC => Ok(AchievementRarity::Epic),
            LEGENDARY => Ok(AchievementRarity::Legendary),
            _ => Err(APIError::InvalidValue {
                description: format!("achievement rarity cannot be {}", value),
            }),
        }
    }
}

impl TryFrom<i16> for AchievementRarity {
    type Error = APIError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AchievementRarity::Common),
            1 => Ok(AchievementRarity::Rare),
            2 => Ok(AchievementRarity::Epic),
            3 => Ok(AchievementRarity::Legendary),
            _ => Err(APIError::InvalidValue {
                description: format!("achievement rarity cannot be {}", value),
            }),
        }
    }
}

impl Into<&'static str> for AchievementRarity {
    fn into(self) -> &'static str {
        match self {
            AchievementRarity::Common => COMMON,
            AchievementRarity::Rare => RARE,
            AchievementRarity::Epic => EPIC,
            AchievementRarity::Legendary => LEGENDARY,
        }
    }
}

impl Into<i16> for AchievementRarity {
    fn into(self) -> i16 {
        match self {
            AchievementRarity::Common => 0,
            AchievementRarity::Rare => 1,
            AchievementRarity::Epic => 2,
            AchievementRarity::Legendary => 3,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rarity_roundtrip() -> () {
        for rarity in vec![
            AchievementRarity::Common,
            AchievementRarity::Rare,
            AchievementRarity::Epic,
            AchievementRarity::Legendary,
        ] {
            let discriminant: i16 = rarity.into();
            let parsed: AchievementRarity = discriminant.try_into().unwrap();
            assert_eq!(parsed, rarity);
        }

        let result: Result<AchievementRarity, _> = 4i16.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_achievement_is_empty() -> () {
        let patch: PatchAchievement = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: PatchAchievement = serde_json::from_str(r#"{"is_active": false}"#).unwrap();
        assert!(!patch.is_empty());
    }
}
