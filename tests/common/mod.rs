//! Shared test fixtures
#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;
