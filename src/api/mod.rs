pub mod achievements;
pub mod authentication;
pub mod logs;
pub mod models;
pub mod quests;
pub mod stats;
pub mod tokens;
pub mod trades;
pub mod users;
