//! Task comments: storage, domain types, endpoints

pub mod db;
pub mod handlers;
pub mod types;
