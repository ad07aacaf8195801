/**
 * User Registration Handler
 *
 * Creates a new account from a JSON payload. The password is hashed
 * before anything touches the database; the plaintext never leaves this
 * function. Duplicate emails are rejected with 400, both via the
 * pre-check and via the unique index for the race the pre-check cannot
 * close.
 */

use axum::{extract::State, Json};

use super::types::RegisterRequest;
use crate::auth::password::hash_password;
use crate::error::{ApiError, ApiResult};
use crate::server::state::AppState;
use crate::users::db::{create_user, find_by_email};
use crate::users::types::{Role, UserResponse};

/// Handle user registration
///
/// # Arguments
///
/// * `state` - Application state (database pool)
/// * `payload` - Registration data: email, password, optional full name
///   and role
///
/// # Returns
///
/// The created user's public view, or:
/// - 400 if validation fails or the email is already registered
/// - 500 on hashing or database failure
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<Json<UserResponse>> {
    tracing::info!(email = %payload.email, "registration attempt");

    // Step 1: Validate input
    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return Err(ApiError::validation("Email must be a valid email address"));
    }
    if payload.password.is_empty() {
        return Err(ApiError::validation("Password cannot be empty"));
    }

    // Step 2: Reject emails that are already taken
    if find_by_email(&state.pool, &payload.email).await?.is_some() {
        tracing::warn!(email = %payload.email, "registration rejected: email taken");
        return Err(ApiError::duplicate("Email already registered"));
    }

    // Step 3: Hash the password
    let hashed = hash_password(&payload.password)?;

    // Step 4: Insert the user
    let role = payload.role.unwrap_or(Role::User);
    let user = create_user(
        &state.pool,
        &payload.email,
        &hashed,
        payload.full_name.as_deref(),
        role,
    )
    .await
    .map_err(|err| {
        // Two registrations can race past the pre-check; the unique
        // index settles it
        if err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation())
        {
            ApiError::duplicate("Email already registered")
        } else {
            ApiError::Database(err)
        }
    })?;

    tracing::info!(user_id = %user.id, role = %user.role, "user registered");
    Ok(Json(UserResponse::from(user)))
}
