//! Server configuration, state, and startup

pub mod config;
pub mod init;
pub mod state;
