/**
 * Application State Management
 *
 * This module defines the state shared by every request handler and
 * implements the `FromRef` traits Axum uses for state extraction.
 *
 * # Architecture
 *
 * `AppState` holds exactly two things:
 * - the Postgres connection pool
 * - the token service (signing keys + validation rules)
 *
 * Both are cheap to clone and immutable after startup, so the whole
 * state is a plain `Clone` struct with no interior locking.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::tokens::TokenService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Postgres connection pool
    pub pool: PgPool,
    /// Issues and verifies access tokens
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(pool: PgPool, tokens: TokenService) -> Self {
        Self { pool, tokens }
    }
}

/// Allows handlers to take `State<PgPool>` directly
impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

/// Allows handlers to take `State<TokenService>` directly
impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
