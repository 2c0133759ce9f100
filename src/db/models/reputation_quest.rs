use chrono::NaiveDateTime;
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};
use uuid::Uuid;

use crate::db::schema::*;

#[derive(Queryable, Identifiable, Debug, Clone)]
pub struct ReputationQuest {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub title: String,
    pub description: String,
    pub kind: i16,
    pub target_value: i64,
    pub reward: i32,
    pub is_active: bool,
}

impl ReputationQuest {
    pub fn get(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
    ) -> Result<ReputationQuest, diesel::result::Error> {
        reputation_quests::table.find(id).first(conn)
    }

    pub fn get_all(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        is_active: Option<bool>,
    ) -> Result<Vec<ReputationQuest>, diesel::result::Error> {
        let mut query = reputation_quests::table
            .order_by(reputation_quests::dsl::created_at)
            .into_boxed();

        if let Some(is_active) = is_active {
            query = query.filter(reputation_quests::dsl::is_active.eq(is_active));
        }

        query.load(conn)
    }

    pub fn insert(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        new_quest: &NewReputationQuest,
    ) -> Result<ReputationQuest, diesel::result::Error> {
        diesel::insert_into(reputation_quests::table)
            .values(new_quest)
            .get_result(conn)
    }

    pub fn insert_many(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        new_quests: &Vec<NewReputationQuest>,
    ) -> Result<usize, diesel::result::Error> {
        diesel::insert_into(reputation_quests::table)
            .values(new_quests)
            .execute(conn)
    }

    pub fn update(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
        update: &UpdateReputationQuest,
    ) -> Result<ReputationQuest, diesel::result::Error> {
        diesel::update(reputation_quests::table.find(id))
            .set(update)
            .get_result(conn)
    }

    pub fn delete(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
    ) -> Result<(), diesel::result::Error> {
        diesel::delete(reputation_quests::table.find(id)).execute(conn)?;
        Ok(())
    }

    // Settings-driven catalog sync run at startup: quests are matched by
    // title, missing ones are inserted, existing ones keep their id so user
    // progress survives redeploys.
    pub fn sync_catalog(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        quests: &Vec<NewReputationQuest>,
    ) -> Result<usize, diesel::result::Error> {
        let stored: Vec<ReputationQuest> = reputation_quests::table.load(conn)?;

        let to_add: Vec<NewReputationQuest> = quests
            .iter()
            .filter(|quest| !stored.iter().any(|s| s.title == quest.title))
            .cloned()
            .collect();

        if to_add.is_empty() {
            return Ok(0);
        }

        Self::insert_many(conn, &to_add)
    }
}

#[derive(Insertable, Debug, Clone)]
#[table_name = "reputation_quests"]
pub struct NewReputationQuest {
    pub title: String,
    pub description: String,
    pub kind: i16,
    pub target_value: i64,
    pub reward: i32,
    pub is_active: bool,
}

#[derive(AsChangeset, Debug, Default)]
#[table_name = "reputation_quests"]
pub struct UpdateReputationQuest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_value: Option<i64>,
    pub reward: Option<i32>,
    pub is_active: Option<bool>,
}
