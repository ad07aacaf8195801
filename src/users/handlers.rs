//! Profile endpoints
//!
//! `GET /users/me` returns the caller's own account; `PUT /users/me`
//! applies a whitelisted patch (full name, password). There is no
//! endpoint for changing role or active status.

use axum::{extract::State, Json};

use crate::auth::password::hash_password;
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;
use crate::users::db::update_profile as update_profile_row;
use crate::users::types::{UserResponse, UserUpdate};

/// Return the authenticated caller's profile
pub async fn get_profile(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}

/// Update the authenticated caller's profile.
///
/// Only the whitelisted fields can change; absent fields stay as they
/// are. A new password is hashed here, so the database layer only ever
/// sees digests.
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(update): Json<UserUpdate>,
) -> ApiResult<Json<UserResponse>> {
    if update.is_empty() {
        return Ok(Json(UserResponse::from(user)));
    }

    let hashed = match update.password.as_deref() {
        Some("") => return Err(ApiError::validation("Password cannot be empty")),
        Some(plain) => Some(hash_password(plain)?),
        None => None,
    };

    let updated = update_profile_row(
        &state.pool,
        user.id,
        update.full_name.as_deref(),
        hashed.as_deref(),
    )
    .await?
    .ok_or(ApiError::IdentityNotFound)?;

    tracing::info!(user_id = %updated.id, "profile updated");
    Ok(Json(UserResponse::from(updated)))
}
