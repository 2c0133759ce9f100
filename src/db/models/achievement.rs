use chrono::NaiveDateTime;
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};
use uuid::Uuid;

use crate::db::schema::*;

#[derive(Queryable, Identifiable, Debug, Clone)]
pub struct Achievement {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub title: String,
    pub description: String,
    pub rarity: i16,
    pub requirements: String,
    pub reward: i32,
    pub is_active: bool,
}

impl Achievement {
    pub fn get(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
    ) -> Result<Achievement, diesel::result::Error> {
        achievements::table.find(id).first(conn)
    }

    pub fn get_all(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        is_active: Option<bool>,
        rarity: Option<i16>,
    ) -> Result<Vec<Achievement>, diesel::result::Error> {
        let mut query = achievements::table
            .order_by(achievements::dsl::rarity)
            .then_order_by(achievements::dsl::created_at)
            .into_boxed();

        if let Some(is_active) = is_active {
            query = query.filter(achievements::dsl::is_active.eq(is_active));
        }
        if let Some(rarity) = rarity {
            query = query.filter(achievements::dsl::rarity.eq(rarity));
        }

        query.load(conn)
    }

    pub fn insert(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        new_achievement: &NewAchievement,
    ) -> Result<Achievement, diesel::result::Error> {
        diesel::insert_into(achievements::table)
            .values(new_achievement)
            .get_result(conn)
    }

    pub fn insert_many(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        new_achievements: &Vec<NewAchievement>,
    ) -> Result<usize, diesel::result::Error> {
        diesel::insert_into(achievements::table)
            .values(new_achievements)
            .execute(conn)
    }

    pub fn update(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
        update: &UpdateAchievement,
    ) -> Result<Achievement, diesel::result::Error> {
        diesel::update(achievements::table.find(id))
            .set(update)
            .get_result(conn)
    }

    pub fn delete(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
    ) -> Result<(), diesel::result::Error> {
        diesel::delete(achievements::table.find(id)).execute(conn)?;
        Ok(())
    }

    // Same catalog sync as ReputationQuest::sync_catalog, matched by title.
    pub fn sync_catalog(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        catalog: &Vec<NewAchievement>,
    ) -> Result<usize, diesel::result::Error> {
        let stored: Vec<Achievement> = achievements::table.load(conn)?;

        let to_add: Vec<NewAchievement> = catalog
            .iter()
            .filter(|achievement| !stored.iter().any(|s| s.title == achievement.title))
            .cloned()
            .collect();

        if to_add.is_empty() {
            return Ok(0);
        }

        Self::insert_many(conn, &to_add)
    }
}

#[derive(Insertable, Debug, Clone)]
#[table_name = "achievements"]
pub struct NewAchievement {
    pub title: String,
    pub description: String,
    pub rarity: i16,
    pub requirements: String,
    pub reward: i32,
    pub is_active: bool,
}

#[derive(AsChangeset, Debug, Default)]
#[table_name = "achievements"]
pub struct UpdateAchievement {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub reward: Option<i32>,
    pub is_active: Option<bool>,
}
