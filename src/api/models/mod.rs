pub mod achievement;
pub mod anti_manipulation_log;
pub mod authentication;
pub mod common;
pub mod error;
pub mod reputation_quest;
pub mod token;
pub mod trade;
pub mod user;
