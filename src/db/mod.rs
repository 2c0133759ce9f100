use std::convert::TryInto;

use actix_web::web;
use log::info;

use crate::{
    api::models::{achievement::AchievementRarity, error::APIError, reputation_quest::QuestKind},
    settings,
    DbPool,
};

use self::models::{
    achievement::{Achievement, NewAchievement},
    reputation_quest::{NewReputationQuest, ReputationQuest},
    session::Session,
};

pub mod models;
pub mod schema;

// Startup sync: the quest and achievement catalogs are declared in the
// settings files and reconciled into the database, so a redeploy with new
// catalog entries needs no manual migration.
pub async fn sync_catalogs(pool: &DbPool, settings: &settings::Settings) -> Result<(), APIError> {
    let quests = settings
        .quests
        .iter()
        .map(|quest| {
            let kind: QuestKind = quest.kind.as_str().try_into()?;
            Ok(NewReputationQuest {
                title: quest.title.clone(),
                description: quest.description.clone(),
                kind: kind.into(),
                target_value: quest.target_value,
                reward: quest.reward,
                is_active: true,
            })
        })
        .collect::<Result<Vec<NewReputationQuest>, APIError>>()?;

    let achievements = settings
        .achievements
        .iter()
        .map(|achievement| {
            let rarity: AchievementRarity = achievement.rarity.as_str().try_into()?;
            Ok(NewAchievement {
                title: achievement.title.clone(),
                description: achievement.description.clone(),
                rarity: rarity.into(),
                requirements: achievement.requirements.clone(),
                reward: achievement.reward,
                is_active: true,
            })
        })
        .collect::<Result<Vec<NewAchievement>, APIError>>()?;

    let conn = pool.get()?;
    web::block::<_, _, APIError>(move || {
        let added_quests = ReputationQuest::sync_catalog(&conn, &quests)?;
        let added_achievements = Achievement::sync_catalog(&conn, &achievements)?;
        let expired_sessions = Session::deactivate_expired(&conn)?;

        info!(
            "catalog sync: {} quests added, {} achievements added, {} sessions expired",
            added_quests, added_achievements, expired_sessions
        );

        Ok(())
    })
    .await?;

    Ok(())
}
