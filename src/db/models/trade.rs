use std::convert::TryInto;

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::dsl::sql;
use diesel::sql_types::{BigInt, Nullable, Numeric};
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};
use uuid::Uuid;

use crate::api::models::{error::APIError, trade::TradeKind};
use crate::db::models::{token::Token, user::User};
use crate::db::schema::*;

use super::pagination::Paginate;

#[derive(Queryable, Identifiable, Associations, Debug)]
#[belongs_to(User, foreign_key = "user_address")]
#[belongs_to(Token, foreign_key = "token_address")]
pub struct Trade {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub user_address: String,
    pub token_address: String,
    pub kind: i16,
    pub amount: i64,
    pub price: BigDecimal,
    pub total_value: BigDecimal,
    pub block_number: Option<i64>,
    pub transaction_hash: Option<String>,
    pub risk_score: i32,
    pub is_suspicious: bool,
    pub manipulation_flags: Option<String>,
}

#[derive(Queryable, Debug)]
pub struct TradeAggregate {
    pub trade_count: i64,
    pub total_value: Option<BigDecimal>,
    pub average_price: Option<BigDecimal>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
}

impl Trade {
    pub fn get(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
    ) -> Result<Trade, diesel::result::Error> {
        trades::table.find(id).first(conn)
    }

    pub fn get_list(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        user_address: Option<&String>,
        token_address: Option<&String>,
        kind: Option<i16>,
        is_suspicious: Option<bool>,
        page: i64,
        limit: i64,
    ) -> Result<(Vec<Trade>, i64), diesel::result::Error> {
        let mut query = trades::table
            .order_by(trades::dsl::created_at.desc())
            .into_boxed();

        if let Some(user_address) = user_address {
            query = query.filter(trades::dsl::user_address.eq(user_address));
        }
        if let Some(token_address) = token_address {
            query = query.filter(trades::dsl::token_address.eq(token_address));
        }
        if let Some(kind) = kind {
            query = query.filter(trades::dsl::kind.eq(kind));
        }
        if let Some(is_suspicious) = is_suspicious {
            query = query.filter(trades::dsl::is_suspicious.eq(is_suspicious));
        }

        query
            .paginate(page)
            .per_page(limit)
            .load_and_count_pages::<Trade>(conn)
    }

    /// Inserts the trade and maintains the rollup counters it aggregates
    /// into on the token and the user, in a single transaction. The token
    /// row is taken FOR UPDATE so concurrent trades serialize on it.
    pub fn insert_with_rollups(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        new_trade: &NewTrade,
    ) -> Result<Trade, APIError> {
        let trade = conn.transaction::<Trade, APIError, _>(|| {
            let user: User = users::table
                .find(&new_trade.user_address)
                .for_update()
                .first(conn)?;

            if user.is_banned {
                return Err(APIError::Forbidden);
            }

            let token = Token::get_for_update(conn, &new_trade.token_address)?;

            let kind: TradeKind = new_trade.kind.try_into()?;
            let new_supply = supply_after_trade(
                kind,
                token.current_supply,
                token.max_supply,
                new_trade.amount,
            )?;
            let allocation_delta = match kind {
                TradeKind::Buy => {
                    let remaining = &user.allocation_cap - &user.used_allocation;
                    if new_trade.total_value > remaining {
                        return Err(APIError::InvalidValue {
                            description: format!(
                                "buy of {} exceeds remaining allocation of {}",
                                new_trade.total_value, remaining
                            ),
                        });
                    }
                    new_trade.total_value.clone()
                }
                TradeKind::Sell => -new_trade.total_value.clone(),
            };

            let trade: Trade = diesel::insert_into(trades::table)
                .values(new_trade)
                .get_result(conn)?;

            let market_cap = &new_trade.price * BigDecimal::from(new_supply);
            Token::record_trade(
                conn,
                &new_trade.token_address,
                &new_trade.total_value,
                new_supply,
                &new_trade.price,
                &market_cap,
            )?;
            User::record_trade(
                conn,
                &new_trade.user_address,
                &new_trade.total_value,
                &allocation_delta,
            )?;

            Ok(trade)
        })?;

        Ok(trade)
    }

    pub fn update(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        id: &Uuid,
        update: &UpdateTrade,
    ) -> Result<Trade, diesel::result::Error> {
        diesel::update(trades::table.find(id))
            .set(update)
            .get_result(conn)
    }

    pub fn count(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
    ) -> Result<i64, diesel::result::Error> {
        trades::table.count().get_result(conn)
    }

    pub fn aggregate_for_token(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        token_address: &str,
    ) -> Result<TradeAggregate, diesel::result::Error> {
        trades::table
            .filter(trades::dsl::token_address.eq(token_address))
            // diesel 1.4 cannot express a multi-aggregate tuple select (and has
            // no SqlOrd for Numeric), so the aggregates are a raw SQL fragment.
            .select(sql::<(
                BigInt,
                Nullable<Numeric>,
                Nullable<Numeric>,
                Nullable<Numeric>,
                Nullable<Numeric>,
            )>(
                "count(*), sum(total_value), avg(price), min(price), max(price)",
            ))
            .first(conn)
    }

    pub fn aggregate_for_user(
        conn: &PooledConnection<ConnectionManager<PgConnection>>,
        user_address: &str,
    ) -> Result<TradeAggregate, diesel::result::Error> {
        trades::table
            .filter(trades::dsl::user_address.eq(user_address))
            .select(sql::<(
                BigInt,
                Nullable<Numeric>,
                Nullable<Numeric>,
                Nullable<Numeric>,
                Nullable<Numeric>,
            )>(
                "count(*), sum(total_value), avg(price), min(price), max(price)",
            ))
            .first(conn)
    }
}

// Checked supply bookkeeping: an amount large enough to wrap i64 must be
// rejected, not allowed to slip past the max-supply bound.
fn supply_after_trade(
    kind: TradeKind,
    current_supply: i64,
    max_supply: i64,
    amount: i64,
) -> Result<i64, APIError> {
    match kind {
        TradeKind::Buy => current_supply
            .checked_add(amount)
            .filter(|new_supply| *new_supply <= max_supply)
            .ok_or_else(|| APIError::InvalidValue {
                description: format!("buy of {} exceeds max supply of {}", amount, max_supply),
            }),
        TradeKind::Sell => current_supply
            .checked_sub(amount)
            .filter(|new_supply| *new_supply >= 0)
            .ok_or_else(|| APIError::InvalidValue {
                description: format!(
                    "sell of {} exceeds current supply of {}",
                    amount, current_supply
                ),
            }),
    }
}

#[derive(Insertable, Debug)]
#[table_name = "trades"]
pub struct NewTrade {
    pub user_address: String,
    pub token_address: String,
    pub kind: i16,
    pub amount: i64,
    pub price: BigDecimal,
    pub total_value: BigDecimal,
    pub block_number: Option<i64>,
    pub transaction_hash: Option<String>,
    pub risk_score: i32,
    pub is_suspicious: bool,
    pub manipulation_flags: Option<String>,
}

#[derive(AsChangeset, Debug, Default)]
#[table_name = "trades"]
pub struct UpdateTrade {
    pub block_number: Option<i64>,
    pub transaction_hash: Option<String>,
    pub risk_score: Option<i32>,
    pub is_suspicious: Option<bool>,
    pub manipulation_flags: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_buy_within_max_supply() -> () {
        let new_supply = supply_after_trade(TradeKind::Buy, 100, 1_000, 900).unwrap();
        assert_eq!(new_supply, 1_000);
    }

    #[test]
    fn test_buy_exceeding_max_supply_rejected() -> () {
        assert!(supply_after_trade(TradeKind::Buy, 100, 1_000, 901).is_err());
    }

    #[test]
    fn test_buy_wrapping_amount_rejected() -> () {
        // current_supply + amount wraps i64; must not pass the supply bound
        assert!(supply_after_trade(TradeKind::Buy, 1, i64::MAX, i64::MAX).is_err());
        assert!(supply_after_trade(TradeKind::Buy, i64::MAX, i64::MAX, 1).is_err());
    }

    #[test]
    fn test_sell_down_to_zero() -> () {
        let new_supply = supply_after_trade(TradeKind::Sell, 500, 1_000, 500).unwrap();
        assert_eq!(new_supply, 0);
    }

    #[test]
    fn test_sell_exceeding_supply_rejected() -> () {
        assert!(supply_after_trade(TradeKind::Sell, 500, 1_000, 501).is_err());
        assert!(supply_after_trade(TradeKind::Sell, 0, 1_000, i64::MAX).is_err());
    }
}
