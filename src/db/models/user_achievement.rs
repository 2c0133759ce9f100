use chrono::NaiveDateTime;
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};
use uuid::Uuid;

use crate::db::models::{achievement::Achievement, user::User};
use crate::db::schema::*;

#[derive(Queryable, Identifiable, Associations, Debug)]
#[belongs_to(User, foreign_key = "user_address")]
#[belongs_to(Achievement, foreign_key = "achievement_id")]
pub struct UserAchievement {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub user_address: String,
    pub achievement_id: Uuid,
    pub unlocked_at: NaiveDateTime,
}

impl UserAchievement {
    pub fn get_all_for_user(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        user_address: &str,
    ) -> Result<Vec<(UserAchievement, Achievement)>, diesel::result::Error> {
        user_achievements::table
            .filter(user_achievements::dsl::user_address.eq(user_address))
            .inner_join(achievements::table)
            .order_by(user_achievements::dsl::unlocked_at.desc())
            .load(conn)
    }

    /// Records an unlock. The (user, achievement) pair is unique; unlocking
    /// twice is a no-op that returns the existing record.
    pub fn unlock(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        user_address: &str,
        achievement_id: &Uuid,
    ) -> Result<UserAchievement, diesel::result::Error> {
        let new_unlock = NewUserAchievement {
            user_address: user_address.to_owned(),
            achievement_id: *achievement_id,
        };

        diesel::insert_into(user_achievements::table)
            .values(&new_unlock)
            .on_conflict((
                user_achievements::dsl::user_address,
                user_achievements::dsl::achievement_id,
            ))
            .do_nothing()
            .execute(conn)?;

        user_achievements::table
            .filter(user_achievements::dsl::user_address.eq(user_address))
            .filter(user_achievements::dsl::achievement_id.eq(achievement_id))
            .first(conn)
    }

    pub fn count_for_user(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        user_address: &str,
    ) -> Result<i64, diesel::result::Error> {
        user_achievements::table
            .filter(user_achievements::dsl::user_address.eq(user_address))
            .count()
            .get_result(conn)
    }
}

#[derive(Insertable, Debug)]
#[table_name = "user_achievements"]
pub struct NewUserAchievement {
    pub user_address: String,
    pub achievement_id: Uuid,
}
