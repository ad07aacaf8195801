//! User accounts: storage, domain types, profile endpoints

pub mod db;
pub mod handlers;
pub mod types;
