use chrono::NaiveDateTime;
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};
use uuid::Uuid;

use crate::db::models::user::User;
use crate::db::schema::*;

use super::pagination::Paginate;

#[derive(Queryable, Identifiable, Associations, Debug)]
#[belongs_to(User, foreign_key = "user_address")]
pub struct AntiManipulationLog {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub user_address: String,
    pub activity_type: i16,
    pub risk_score: i32,
    pub flags: String,
    pub is_resolved: bool,
    pub resolved_at: Option<NaiveDateTime>,
    pub resolved_by: Option<String>,
}

impl AntiManipulationLog {
    pub fn get(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
    ) -> Result<AntiManipulationLog, diesel::result::Error> {
        anti_manipulation_logs::table.find(id).first(conn)
    }

    pub fn get_list(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        user_address: Option<&String>,
        activity_type: Option<i16>,
        is_resolved: Option<bool>,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<AntiManipulationLog>, i64), diesel::result::Error> {
        let mut query = anti_manipulation_logs::table
            .order_by(anti_manipulation_logs::dsl::created_at.desc())
            .into_boxed();

        if let Some(user_address) = user_address {
            query = query.filter(anti_manipulation_logs::dsl::user_address.eq(user_address));
        }
        if let Some(activity_type) = activity_type {
            query = query.filter(anti_manipulation_logs::dsl::activity_type.eq(activity_type));
        }
        if let Some(is_resolved) = is_resolved {
            query = query.filter(anti_manipulation_logs::dsl::is_resolved.eq(is_resolved));
        }

        query
            .paginate(page)
            .per_page(limit)
            .load_and_count_pages::<AntiManipulationLog>(conn)
    }

    pub fn insert(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        new_log: &NewAntiManipulationLog,
    ) -> Result<AntiManipulationLog, diesel::result::Error> {
        diesel::insert_into(anti_manipulation_logs::table)
            .values(new_log)
            .get_result(conn)
    }

    pub fn mark_resolved(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
        resolved_by: &str,
    ) -> Result<AntiManipulationLog, diesel::result::Error> {
        diesel::update(anti_manipulation_logs::table.find(id))
            .set((
                anti_manipulation_logs::dsl::is_resolved.eq(true),
                anti_manipulation_logs::dsl::resolved_at.eq(diesel::dsl::now.nullable()),
                anti_manipulation_logs::dsl::resolved_by.eq(resolved_by),
            ))
            .get_result(conn)
    }

    pub fn count_unresolved(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
    ) -> Result<i64, diesel::result::Error> {
        anti_manipulation_logs::table
            .filter(anti_manipulation_logs::dsl::is_resolved.eq(false))
            .count()
            .get_result(conn)
    }
}

#[derive(Insertable, Debug)]
#[table_name = "anti_manipulation_logs"]
pub struct NewAntiManipulationLog {
    pub user_address: String,
    pub activity_type: i16,
    pub risk_score: i32,
    pub flags: String,
}
