//! Authentication and authorization
//!
//! Four pieces, each usable on its own:
//!
//! - `password` - bcrypt hashing and verification
//! - `tokens` - JWT issue/verify with a three-way verdict
//! - `guard` - the role/ownership policy table
//! - `handlers` - the register and login endpoints

pub mod guard;
pub mod handlers;
pub mod password;
pub mod tokens;
