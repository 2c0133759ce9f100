use bigdecimal::BigDecimal;
use diesel::sql_types::{BigInt, Numeric, Varchar};
use diesel::{prelude::*, r2d2::ConnectionManager, r2d2::PooledConnection};

// Group-by rollups over trades. Diesel's group_by support is too narrow for
// multi-aggregate selections, so these run as raw queries with typed rows.

#[derive(QueryableByName, Debug)]
pub struct TokenTradeStats {
    #[sql_type = "Varchar"]
    pub token_address: String,
    #[sql_type = "BigInt"]
    pub trade_count: i64,
    #[sql_type = "Numeric"]
    pub total_volume: BigDecimal,
    #[sql_type = "BigInt"]
    pub trader_count: i64,
}

#[derive(QueryableByName, Debug)]
pub struct TraderStats {
    #[sql_type = "Varchar"]
    pub user_address: String,
    #[sql_type = "BigInt"]
    pub trade_count: i64,
    #[sql_type = "Numeric"]
    pub total_volume: BigDecimal,
    #[sql_type = "BigInt"]
    pub token_count: i64,
}

pub fn trades_by_token(
    conn: &PooledConnection<ConnectionManager<PgConnection>>,
    limit: i64,
) -> Result<Vec<TokenTradeStats>, diesel::result::Error> {
    diesel::sql_query(
        "SELECT token_address, \
                COUNT(*) AS trade_count, \
                COALESCE(SUM(total_value), 0) AS total_volume, \
                COUNT(DISTINCT user_address) AS trader_count \
         FROM trades \
         GROUP BY token_address \
         ORDER BY total_volume DESC \
         LIMIT $1",
    )
    .bind::<BigInt, _>(limit)
    .load(conn)
}

pub fn trades_by_user(
    conn: &PooledConnection<ConnectionManager<PgConnection>>,
    limit: i64,
) -> Result<Vec<TraderStats>, diesel::result::Error> {
    diesel::sql_query(
        "SELECT user_address, \
                COUNT(*) AS trade_count, \
                COALESCE(SUM(total_value), 0) AS total_volume, \
                COUNT(DISTINCT token_address) AS token_count \
         FROM trades \
         GROUP BY user_address \
         ORDER BY total_volume DESC \
         LIMIT $1",
    )
    .bind::<BigInt, _>(limit)
    .load(conn)
}
