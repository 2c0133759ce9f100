use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};

use crate::api::models::token::TokenOrder;
use crate::db::models::user::User;
use crate::db::schema::*;

use super::pagination::Paginate;

#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[belongs_to(User, foreign_key = "creator_address")]
#[primary_key(address)]
pub struct Token {
    pub address: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub creator_address: String,
    pub name: String,
    pub symbol: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub initial_price: BigDecimal,
    pub price_increment: BigDecimal,
    pub max_supply: i64,
    pub current_supply: i64,
    pub current_price: BigDecimal,
    pub total_volume: BigDecimal,
    pub total_trades: i32,
    pub market_cap: BigDecimal,
    pub status: i16,
    pub launch_date: NaiveDateTime,
}

impl Token {
    pub fn get(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        address: &str,
    ) -> Result<Token, diesel::result::Error> {
        tokens::table.find(address).first(conn)
    }

    pub fn get_by_symbol(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        symbol: &str,
    ) -> Result<Token, diesel::result::Error> {
        tokens::table
            .filter(tokens::dsl::symbol.eq(symbol))
            .first(conn)
    }

    pub fn get_for_update(
        conn: &PgConnection,
        address: &str,
    ) -> Result<Token, diesel::result::Error> {
        tokens::table.find(address).for_update().first(conn)
    }

    pub fn get_list(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        status: Option<i16>,
        creator_address: Option<&String>,
        order: TokenOrder,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Token>, i64), diesel::result::Error> {
        let mut query = tokens::table.into_boxed();

        query = match order {
            TokenOrder::MarketCap => query.order_by(tokens::dsl::market_cap.desc()),
            TokenOrder::TotalVolume => query.order_by(tokens::dsl::total_volume.desc()),
            TokenOrder::LaunchDate => query.order_by(tokens::dsl::launch_date.desc()),
        };

        if let Some(status) = status {
            query = query.filter(tokens::dsl::status.eq(status));
        }
        if let Some(creator_address) = creator_address {
            query = query.filter(tokens::dsl::creator_address.eq(creator_address));
        }

        query
            .paginate(page)
            .per_page(limit)
            .load_and_count_pages::<Token>(conn)
    }

    pub fn insert(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        new_token: &NewToken,
    ) -> Result<Token, diesel::result::Error> {
        diesel::insert_into(tokens::table)
            .values(new_token)
            .get_result(conn)
    }

    pub fn update(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        address: &str,
        update: &UpdateToken,
    ) -> Result<Token, diesel::result::Error> {
        diesel::update(tokens::table.find(address))
            .set(update)
            .get_result(conn)
    }

    pub fn delete(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        address: &str,
    ) -> Result<(), diesel::result::Error> {
        diesel::delete(tokens::table.find(address)).execute(conn)?;
        Ok(())
    }

    pub fn count(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
    ) -> Result<i64, diesel::result::Error> {
        tokens::table.count().get_result(conn)
    }

    // Rollup maintenance for the trade-insert transaction. The new supply,
    // price and market cap are computed by the caller from a row it holds
    // under FOR UPDATE.
    pub fn record_trade(
        conn: &PgConnection,
        address: &str,
        total_value: &BigDecimal,
        current_supply: i64,
        current_price: &BigDecimal,
        market_cap: &BigDecimal,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(tokens::table.find(address))
            .set((
                tokens::dsl::total_trades.eq(tokens::dsl::total_trades + 1),
                tokens::dsl::total_volume.eq(tokens::dsl::total_volume + total_value.clone()),
                tokens::dsl::current_supply.eq(current_supply),
                tokens::dsl::current_price.eq(current_price.clone()),
                tokens::dsl::market_cap.eq(market_cap.clone()),
            ))
            .execute(conn)
    }
}

#[derive(Insertable, Debug)]
#[table_name = "tokens"]
pub struct NewToken {
    pub address: String,
    pub creator_address: String,
    pub name: String,
    pub symbol: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub initial_price: BigDecimal,
    pub price_increment: BigDecimal,
    pub max_supply: i64,
    pub current_price: BigDecimal,
    pub status: i16,
}

#[derive(AsChangeset, Debug, Default)]
#[table_name = "tokens"]
pub struct UpdateToken {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<i16>,
}
