use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};

use crate::db::schema::*;

use super::pagination::Paginate;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[primary_key(wallet_address)]
pub struct User {
    pub wallet_address: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub world_id_hash: Option<String>,
    pub verification_level: i16,
    pub reputation_score: i32,
    pub reputation_level: i16,
    pub total_trades: i32,
    pub total_volume: BigDecimal,
    pub risk_score: i32,
    pub allocation_cap: BigDecimal,
    pub used_allocation: BigDecimal,
    pub market_cap: Option<BigDecimal>,
    pub is_banned: bool,
}

impl User {
    pub fn get(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        wallet_address: &str,
    ) -> Result<User, diesel::result::Error> {
        users::table.find(wallet_address).first(conn)
    }

    pub fn get_list(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        reputation_level: Option<i16>,
        verification_level: Option<i16>,
        is_banned: Option<bool>,
        min_reputation: Option<i32>,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<User>, i64), diesel::result::Error> {
        let mut query = users::table
            .order_by(users::dsl::reputation_score.desc())
            .into_boxed();

        if let Some(reputation_level) = reputation_level {
            query = query.filter(users::dsl::reputation_level.eq(reputation_level));
        }
        if let Some(verification_level) = verification_level {
            query = query.filter(users::dsl::verification_level.eq(verification_level));
        }
        if let Some(is_banned) = is_banned {
            query = query.filter(users::dsl::is_banned.eq(is_banned));
        }
        if let Some(min_reputation) = min_reputation {
            query = query.filter(users::dsl::reputation_score.ge(min_reputation));
        }

        query
            .paginate(page)
            .per_page(limit)
            .load_and_count_pages::<User>(conn)
    }

    pub fn insert(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        new_user: &NewUser,
    ) -> Result<User, diesel::result::Error> {
        diesel::insert_into(users::table)
            .values(new_user)
            .get_result(conn)
    }

    pub fn update(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        wallet_address: &str,
        update: &UpdateUser,
    ) -> Result<User, diesel::result::Error> {
        diesel::update(users::table.find(wallet_address))
            .set(update)
            .get_result(conn)
    }

    pub fn delete(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        wallet_address: &str,
    ) -> Result<(), diesel::result::Error> {
        diesel::delete(users::table.find(wallet_address)).execute(conn)?;
        Ok(())
    }

    pub fn count(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
    ) -> Result<i64, diesel::result::Error> {
        users::table.count().get_result(conn)
    }

    // Rollup maintenance for the trade-insert transaction. allocation_delta is
    // positive for buys, negative for sells.
    pub fn record_trade(
        conn: &PgConnection,
        wallet_address: &str,
        total_value: &BigDecimal,
        allocation_delta: &BigDecimal,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(users::table.find(wallet_address))
            .set((
                users::dsl::total_trades.eq(users::dsl::total_trades + 1),
                users::dsl::total_volume.eq(users::dsl::total_volume + total_value.clone()),
                users::dsl::used_allocation
                    .eq(users::dsl::used_allocation + allocation_delta.clone()),
            ))
            .execute(conn)
    }
}

#[derive(Insertable, Debug)]
#[table_name = "users"]
pub struct NewUser {
    pub wallet_address: String,
    pub world_id_hash: Option<String>,
    pub verification_level: i16,
    pub allocation_cap: BigDecimal,
}

#[derive(AsChangeset, Debug, Default)]
#[table_name = "users"]
pub struct UpdateUser {
    pub world_id_hash: Option<String>,
    pub verification_level: Option<i16>,
    pub reputation_score: Option<i32>,
    pub reputation_level: Option<i16>,
    pub risk_score: Option<i32>,
    pub allocation_cap: Option<BigDecimal>,
    pub market_cap: Option<BigDecimal>,
    pub is_banned: Option<bool>,
}
