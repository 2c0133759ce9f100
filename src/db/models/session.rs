use chrono::NaiveDateTime;
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};
use uuid::Uuid;

use crate::db::schema::*;

#[derive(Queryable, Identifiable, Debug)]
pub struct Session {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub user_address: String,
    pub session_token: String,
    pub expires_at: NaiveDateTime,
    pub is_active: bool,
}

impl Session {
    pub fn get_by_token(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        session_token: &str,
    ) -> Result<Session, diesel::result::Error> {
        sessions::table
            .filter(sessions::dsl::session_token.eq(session_token))
            .filter(sessions::dsl::is_active.eq(true))
            .filter(sessions::dsl::expires_at.gt(diesel::dsl::now))
            .first(conn)
    }

    pub fn get_all_for_user(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        user_address: &str,
    ) -> Result<Vec<Session>, diesel::result::Error> {
        sessions::table
            .filter(sessions::dsl::user_address.eq(user_address))
            .order_by(sessions::dsl::created_at.desc())
            .load(conn)
    }

    pub fn insert(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        new_session: &NewSession,
    ) -> Result<Session, diesel::result::Error> {
        diesel::insert_into(sessions::table)
            .values(new_session)
            .get_result(conn)
    }

    pub fn deactivate(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        session_token: &str,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(
            sessions::table.filter(sessions::dsl::session_token.eq(session_token)),
        )
        .set(sessions::dsl::is_active.eq(false))
        .execute(conn)
    }

    pub fn deactivate_expired(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(
            sessions::table
                .filter(sessions::dsl::is_active.eq(true))
                .filter(sessions::dsl::expires_at.lt(diesel::dsl::now)),
        )
        .set(sessions::dsl::is_active.eq(false))
        .execute(conn)
    }

    pub fn delete_expired(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
    ) -> Result<usize, diesel::result::Error> {
        diesel::delete(sessions::table.filter(sessions::dsl::expires_at.lt(diesel::dsl::now)))
            .execute(conn)
    }
}

#[derive(Insertable, Debug)]
#[table_name = "sessions"]
pub struct NewSession {
    pub user_address: String,
    pub session_token: String,
    pub expires_at: NaiveDateTime,
}
