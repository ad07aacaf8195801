/**
 * Server Initialization
 *
 * Turns a validated `AppConfig` into a ready-to-serve router.
 *
 * # Initialization Process
 *
 * 1. Connect the Postgres pool
 * 2. Run migrations
 * 3. Ensure the bootstrap admin account, if configured
 * 4. Build the token service and application state
 * 5. Assemble the router
 *
 * # Error Handling
 *
 * Every step is fatal on failure. A server that cannot reach its
 * database or apply its schema has nothing useful to serve.
 */

use axum::Router;
use sqlx::PgPool;
use thiserror::Error;

use crate::auth::password::{hash_password, PasswordError};
use crate::auth::tokens::TokenService;
use crate::routes::create_router;
use crate::server::config::{AppConfig, BootstrapAdmin};
use crate::server::state::AppState;
use crate::users::db::{create_user, find_by_email};
use crate::users::types::Role;

/// Errors that abort startup
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("bootstrap admin password could not be hashed: {0}")]
    Password(#[from] PasswordError),
}

/// Create and configure the application
///
/// # Errors
///
/// Fails if the database is unreachable, migrations cannot be applied,
/// or the bootstrap admin cannot be created.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, InitError> {
    // Step 1: Connect to the database
    tracing::info!("connecting to database");
    let pool = PgPool::connect(&config.database_url).await?;

    // Step 2: Apply migrations
    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;

    // Step 3: Ensure the bootstrap admin, if one is configured
    if let Some(admin) = &config.bootstrap_admin {
        ensure_bootstrap_admin(&pool, admin).await?;
    }

    // Step 4: Build state
    let tokens = TokenService::new(
        config.secret_key.as_bytes(),
        config.algorithm,
        config.token_ttl(),
    );
    let state = AppState::new(pool, tokens);

    // Step 5: Assemble the router
    tracing::info!("router configured");
    Ok(create_router(state))
}

/// Create the configured admin account unless it already exists.
///
/// Idempotent: an existing account with that email is left exactly as it
/// is, whatever its role. Two instances racing on first boot are settled
/// by the unique email index.
async fn ensure_bootstrap_admin(pool: &PgPool, admin: &BootstrapAdmin) -> Result<(), InitError> {
    if find_by_email(pool, &admin.email).await?.is_some() {
        tracing::info!(email = %admin.email, "bootstrap admin already present");
        return Ok(());
    }

    let hashed = hash_password(&admin.password)?;
    match create_user(pool, &admin.email, &hashed, Some("Admin User"), Role::Admin).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, email = %user.email, "bootstrap admin created");
            Ok(())
        }
        Err(err)
            if err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation()) =>
        {
            tracing::info!(email = %admin.email, "bootstrap admin created by another instance");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
