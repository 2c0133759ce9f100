use std::convert::{TryFrom, TryInto};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::error::APIError;
use crate::db::models::token::{NewToken as DBNewToken, Token as DBToken};

#[derive(Debug, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub creator_address: String,
    pub name: String,
    pub symbol: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub initial_price: String,
    pub price_increment: String,
    pub max_supply: i64,
    pub current_supply: i64,
    pub current_price: String,
    pub total_volume: String,
    pub total_trades: i32,
    pub market_cap: String,
    pub status: TokenStatus,
    pub launch_date: NaiveDateTime,
}

impl TryFrom<DBToken> for Token {
    type Error = APIError;

    fn try_from(value: DBToken) -> Result<Self, Self::Error> {
        Ok(Token {
            address: value.address,
            created_at: value.created_at,
            updated_at: value.updated_at,
            creator_address: value.creator_address,
            name: value.name,
            symbol: value.symbol,
            description: value.description,
            image_url: value.image_url,
            initial_price: value.initial_price.to_string(),
            price_increment: value.price_increment.to_string(),
            max_supply: value.max_supply,
            current_supply: value.current_supply,
            current_price: value.current_price.to_string(),
            total_volume: value.total_volume.to_string(),
            total_trades: value.total_trades,
            market_cap: value.market_cap.to_string(),
            status: value.status.try_into()?,
            launch_date: value.launch_date,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewTokenRequest {
    pub address: String,
    pub creator_address: String,
    pub name: String,
    pub symbol: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub initial_price: String,
    pub price_increment: String,
    pub max_supply: i64,
}

impl NewTokenRequest {
    pub fn validate(&self) -> Result<(), APIError> {
        if self.address.is_empty() {
            return Err(APIError::InvalidValue {
                description: "token address must not be empty".to_owned(),
            });
        }
        if self.symbol.is_empty() || self.symbol.len() > 12 {
            return Err(APIError::InvalidValue {
                description: "token symbol must be between 1 and 12 characters".to_owned(),
            });
        }
        if self.max_supply <= 0 {
            return Err(APIError::InvalidValue {
                description: "max supply must be positive".to_owned(),
            });
        }

        Ok(())
    }
}

impl TryFrom<NewTokenRequest> for DBNewToken {
    type Error = APIError;

    fn try_from(value: NewTokenRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        let initial_price = parse_amount(&value.initial_price, "initial_price")?;
        let price_increment = parse_amount(&value.price_increment, "price_increment")?;

        Ok(DBNewToken {
            address: value.address,
            creator_address: value.creator_address,
            name: value.name,
            symbol: value.symbol,
            description: value.description,
            image_url: value.image_url,
            current_price: initial_price.clone(),
            initial_price,
            price_increment,
            max_supply: value.max_supply,
            status: TokenStatus::Active.into(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PatchToken {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<TokenStatus>,
}

impl PatchToken {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.status.is_none()
    }
}

pub fn parse_amount(value: &str, field: &str) -> Result<BigDecimal, APIError> {
    let amount = BigDecimal::from_str(value).map_err(|_error| APIError::InvalidValue {
        description: format!("{} is not a valid decimal amount", field),
    })?;

    if amount < BigDecimal::from(0) {
        return Err(APIError::InvalidValue {
            description: format!("{} must not be negative", field),
        });
    }

    Ok(amount)
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum TokenStatus {
    Active = 0,
    Graduated = 1,
    Delisted = 2,
}

const ACTIVE: &'static str = "active";
const GRADUATED: &'static str = "graduated";
const DELISTED: &'static str = "delisted";

impl TryFrom<&str> for TokenStatus {
    type Error = APIError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            ACTIVE => Ok(TokenStatus::Active),
            GRADUATED => Ok(TokenStatus::Graduated),
            DELISTED => Ok(TokenStatus::Delisted),
            _ => Err(APIError::InvalidValue {
                description: format!("token status cannot be {}", value),
            }),
        }
    }
}

impl TryFrom<i16> for TokenStatus {
    type Error = APIError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TokenStatus::Active),
            1 => Ok(TokenStatus::Graduated),
            2 => Ok(TokenStatus::Delisted),
            _ => Err(APIError::InvalidValue {
                description: format!("token status cannot be {}", value),
            }),
        }
    }
}

impl Into<&'static str> for TokenStatus {
    fn into(self) -> &'static str {
        match self {
            TokenStatus::Active => ACTIVE,
            TokenStatus::Graduated => GRADUATED,
            TokenStatus::Delisted => DELISTED,
        }
    }
}

impl Into<i16> for TokenStatus {
    fn into(self) -> i16 {
        match self {
            TokenStatus::Active => 0,
            TokenStatus::Graduated => 1,
            TokenStatus::Delisted => 2,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone)]
#[serde(rename_all = "snake_case")]
pub enum TokenOrder {
    MarketCap,
    TotalVolume,
    LaunchDate,
}

impl Default for TokenOrder {
    fn default() -> Self {
        TokenOrder::MarketCap
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn new_token_request() -> NewTokenRequest {
        NewTokenRequest {
            address: "0x00010203".to_owned(),
            creator_address: "0xc0ffee".to_owned(),
            name: "Test Token".to_owned(),
            symbol: "TEST".to_owned(),
            description: None,
            image_url: None,
            initial_price: "0.001".to_owned(),
            price_increment: "0.0001".to_owned(),
            max_supply: 1_000_000_000,
        }
    }

    #[test]
    fn test_new_token_request_valid() -> () {
        let request = new_token_request();
        assert!(request.validate().is_ok());

        let new_token: DBNewToken = request.try_into().unwrap();
        assert_eq!(new_token.current_price, new_token.initial_price);
        assert_eq!(new_token.status, 0);
    }

    #[test]
    fn test_new_token_request_rejects_long_symbol() -> () {
        let mut request = new_token_request();
        request.symbol = "WAYTOOLONGSYMBOL".to_owned();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_new_token_request_rejects_non_positive_supply() -> () {
        let mut request = new_token_request();
        request.max_supply = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_parse_amount_rejects_negative() -> () {
        assert!(parse_amount("-1.5", "amount").is_err());
        assert!(parse_amount("not a number", "amount").is_err());
        assert!(parse_amount("1.5", "amount").is_ok());
    }

    #[test]
    fn test_token_serializes_amounts_as_strings() -> () {
        let token = Token {
            address: "0x00010203".to_owned(),
            created_at: chrono::NaiveDateTime::from_timestamp(1_700_000_000, 0),
            updated_at: chrono::NaiveDateTime::from_timestamp(1_700_000_000, 0),
            creator_address: "0xc0ffee".to_owned(),
            name: "Test Token".to_owned(),
            symbol: "TEST".to_owned(),
            description: None,
            image_url: None,
            initial_price: "0.001".to_owned(),
            price_increment: "0.0001".to_owned(),
            max_supply: 1_000_000_000,
            current_supply: 0,
            current_price: "0.001".to_owned(),
            total_volume: "0".to_owned(),
            total_trades: 0,
            market_cap: "0".to_owned(),
            status: TokenStatus::Active,
            launch_date: chrono::NaiveDateTime::from_timestamp(1_700_000_000, 0),
        };

        let value = serde_json::to_value(&token).unwrap();
        assert!(value["current_price"].is_string());
        assert!(value["total_volume"].is_string());
        assert_eq!(value["status"], "active");
    }

    #[test]
    fn test_patch_token_is_empty() -> () {
        let patch: PatchToken = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: PatchToken = serde_json::from_str(r#"{"status": "graduated"}"#).unwrap();
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_token_status_roundtrip() -> () {
        for status in vec![
            TokenStatus::Active,
            TokenStatus::Graduated,
            TokenStatus::Delisted,
        ] {
            let discriminant: i16 = status.into();
            let parsed: TokenStatus = discriminant.try_into().unwrap();
            assert_eq!(parsed, status);
        }

        let result: Result<TokenStatus, _> = 3i16.try_into();
        assert!(result.is_err());
    }
}
