pub mod achievement;
pub mod anti_manipulation_log;
pub mod pagination;
pub mod reputation_quest;
pub mod session;
pub mod stats;
pub mod token;
pub mod trade;
pub mod user;
pub mod user_achievement;
pub mod user_reputation_quest;
