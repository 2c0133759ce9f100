use std::convert::{TryFrom, TryInto};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::APIError;
use super::token::parse_amount;
use crate::db::models::trade::{
    NewTrade as DBNewTrade, Trade as DBTrade, TradeAggregate as DBTradeAggregate,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct Trade {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub user_address: String,
    pub token_address: String,
    pub kind: TradeKind,
    pub amount: i64,
    pub price: String,
    pub total_value: String,
    pub block_number: Option<i64>,
    pub transaction_hash: Option<String>,
    pub risk_score: i32,
    pub is_suspicious: bool,
    pub manipulation_flags: Option<String>,
}

impl TryFrom<DBTrade> for Trade {
    type Error = APIError;

    fn try_from(value: DBTrade) -> Result<Self, Self::Error> {
        Ok(Trade {
            id: value.id,
            created_at: value.created_at,
            user_address: value.user_address,
            token_address: value.token_address,
            kind: value.kind.try_into()?,
            amount: value.amount,
            price: value.price.to_string(),
            total_value: value.total_value.to_string(),
            block_number: value.block_number,
            transaction_hash: value.transaction_hash,
            risk_score: value.risk_score,
            is_suspicious: value.is_suspicious,
            manipulation_flags: value.manipulation_flags,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewTradeRequest {
    pub user_address: String,
    pub token_address: String,
    pub kind: TradeKind,
    pub amount: i64,
    pub price: String,
    pub block_number: Option<i64>,
    pub transaction_hash: Option<String>,
    pub risk_score: Option<i32>,
    pub is_suspicious: Option<bool>,
    pub manipulation_flags: Option<String>,
}

impl NewTradeRequest {
    pub fn validate(&self) -> Result<(), APIError> {
        if self.amount <= 0 {
            return Err(APIError::InvalidValue {
                description: "trade amount must be positive".to_owned(),
            });
        }
        if self.user_address.is_empty() || self.token_address.is_empty() {
            return Err(APIError::InvalidValue {
                description: "user and token addresses must not be empty".to_owned(),
            });
        }

        Ok(())
    }
}

impl TryFrom<NewTradeRequest> for DBNewTrade {
    type Error = APIError;

    fn try_from(value: NewTradeRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        let price = parse_amount(&value.price, "price")?;
        let total_value = &price * bigdecimal::BigDecimal::from(value.amount);

        Ok(DBNewTrade {
            user_address: value.user_address,
            token_address: value.token_address,
            kind: value.kind.into(),
            amount: value.amount,
            price,
            total_value,
            block_number: value.block_number,
            transaction_hash: value.transaction_hash,
            risk_score: value.risk_score.unwrap_or(0),
            is_suspicious: value.is_suspicious.unwrap_or(false),
            manipulation_flags: value.manipulation_flags,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PatchTrade {
    pub block_number: Option<i64>,
    pub transaction_hash: Option<String>,
    pub risk_score: Option<i32>,
    pub is_suspicious: Option<bool>,
    pub manipulation_flags: Option<String>,
}

impl PatchTrade {
    pub fn is_empty(&self) -> bool {
        self.block_number.is_none()
            && self.transaction_hash.is_none()
            && self.risk_score.is_none()
            && self.is_suspicious.is_none()
            && self.manipulation_flags.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TradeAggregate {
    pub trade_count: i64,
    pub total_value: String,
    pub average_price: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl From<DBTradeAggregate> for TradeAggregate {
    fn from(value: DBTradeAggregate) -> Self {
        TradeAggregate {
            trade_count: value.trade_count,
            total_value: value
                .total_value
                .map(|sum| sum.to_string())
                .unwrap_or_else(|| "0".to_owned()),
            average_price: value.average_price.map(|avg| avg.to_string()),
            min_price: value.min_price.map(|min| min.to_string()),
            max_price: value.max_price.map(|max| max.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum TradeKind {
    Buy = 0,
    Sell = 1,
}

const BUY: &'static str = "buy";
const SELL: &'static str = "sell";

impl TryFrom<&str> for TradeKind {
    type Error = APIError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            BUY => Ok(TradeKind::Buy),
            SELL => Ok(TradeKind::Sell),
            _ => Err(APIError::InvalidValue {
                description: format!("trade kind cannot be {}", value),
            }),
        }
    }
}

impl TryFrom<i16> for TradeKind {
    type Error = APIError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TradeKind::Buy),
            1 => Ok(TradeKind::Sell),
            _ => Err(APIError::InvalidValue {
                description: format!("trade kind cannot be {}", value),
            }),
        }
    }
}

impl Into<&'static str> for TradeKind {
    fn into(self) -> &'static str {
        match self {
            TradeKind::Buy => BUY,
            TradeKind::Sell => SELL,
        }
    }
}

impl Into<i16> for TradeKind {
    fn into(self) -> i16 {
        match self {
            TradeKind::Buy => 0,
            TradeKind::Sell => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    fn new_trade_request() -> NewTradeRequest {
        NewTradeRequest {
            user_address: "0xc0ffee".to_owned(),
            token_address: "0x00010203".to_owned(),
            kind: TradeKind::Buy,
            amount: 250,
            price: "0.004".to_owned(),
            block_number: Some(18_000_000),
            transaction_hash: None,
            risk_score: None,
            is_suspicious: None,
            manipulation_flags: None,
        }
    }

    #[test]
    fn test_new_trade_total_value() -> () {
        let new_trade: DBNewTrade = new_trade_request().try_into().unwrap();

        let expected = bigdecimal::BigDecimal::from_str("1.000").unwrap();
        assert_eq!(new_trade.total_value, expected);
        assert_eq!(new_trade.risk_score, 0);
        assert!(!new_trade.is_suspicious);
    }

    #[test]
    fn test_new_trade_rejects_non_positive_amount() -> () {
        let mut request = new_trade_request();
        request.amount = 0;
        assert!(request.validate().is_err());

        request.amount = -5;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_new_trade_rejects_negative_price() -> () {
        let mut request = new_trade_request();
        request.price = "-0.004".to_owned();

        let result: Result<DBNewTrade, _> = request.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_trade_is_empty() -> () {
        let patch: PatchTrade = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: PatchTrade = serde_json::from_str(r#"{"is_suspicious": true}"#).unwrap();
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_trade_kind_roundtrip() -> () {
        for kind in vec![TradeKind::Buy, TradeKind::Sell] {
            let discriminant: i16 = kind.into();
            let parsed: TradeKind = discriminant.try_into().unwrap();
            assert_eq!(parsed, kind);

            let name: &'static str = kind.into();
            let parsed: TradeKind = name.try_into().unwrap();
            assert_eq!(parsed, kind);
        }

        let result: Result<TradeKind, _> = 2i16.try_into();
        assert!(result.is_err());
    }
}
