use std::fmt;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub address: String,
    pub session_secret: String,
    pub inactivity_timeout_seconds: i64,
    pub session_lifetime_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Database {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Quest {
    pub title: String,
    pub description: String,
    pub kind: String,
    pub target_value: i64,
    pub reward: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub rarity: String,
    pub requirements: String,
    pub reward: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: Server,
    pub database: Database,
    pub quests: Vec<Quest>,
    pub achievements: Vec<Achievement>,
    pub env: ENV,
}

#[derive(Clone, Debug, Deserialize)]
pub enum ENV {
    Development,
    Testing,
    Production,
    Local,
}

impl fmt::Display for ENV {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ENV::Development => write!(f, "Development"),
            ENV::Testing => write!(f, "Testing"),
            ENV::Production => write!(f, "Production"),
            ENV::Local => write!(f, "Local"),
        }
    }
}

impl From<&str> for ENV {
    fn from(env: &str) -> Self {
        match env {
            "Testing" => ENV::Testing,
            "Production" => ENV::Production,
            "Development" => ENV::Development,
            _ => ENV::Local,
        }
    }
}

const CONFIG_FILE_PATH: &str = "./config/Default.toml";
const CONFIG_FILE_PREFIX: &str = "./config/";

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("RUN_ENV").unwrap_or_else(|_| "Local".into());
        let mut s = Config::new();
        s.set("env", env.clone())?;
        s.merge(File::with_name(CONFIG_FILE_PATH))?;
        s.merge(File::with_name(&format!("{}{}", CONFIG_FILE_PREFIX, env)))?;

        // This makes it so "LPD_SERVER__ADDRESS" overrides server.address
        s.merge(Environment::with_prefix("lpd").separator("__"))?;

        s.try_into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_env_from_str() -> () {
        assert!(matches!(ENV::from("Production"), ENV::Production));
        assert!(matches!(ENV::from("Testing"), ENV::Testing));
        assert!(matches!(ENV::from("Development"), ENV::Development));
        assert!(matches!(ENV::from("anything else"), ENV::Local));
    }

    #[test]
    fn test_env_display() -> () {
        assert_eq!(ENV::Production.to_string(), "Production");
        assert_eq!(ENV::Local.to_string(), "Local");
    }
}
