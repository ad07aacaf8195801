/**
 * User Login Handler
 *
 * Exchanges email + password for a bearer token. The request body is
 * form-encoded (OAuth2 password flow); the `username` field carries the
 * email. Unknown email and wrong password produce the same 401 so the
 * endpoint cannot be used to probe which addresses have accounts.
 */

use axum::{extract::State, Form, Json};

use super::types::{LoginForm, TokenResponse};
use crate::auth::password::verify_password;
use crate::error::{ApiError, ApiResult};
use crate::server::state::AppState;
use crate::users::db::find_by_email;

/// Handle user login
///
/// # Arguments
///
/// * `state` - Application state (database pool, token service)
/// * `form` - Login credentials: `username` (the email) and `password`
///
/// # Returns
///
/// `{"access_token": ..., "token_type": "bearer"}`, or:
/// - 401 if the email is unknown or the password does not match
/// - 500 on database or signing failure
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> ApiResult<Json<TokenResponse>> {
    tracing::info!(email = %form.username, "login attempt");

    // Step 1: Resolve the account
    let Some(user) = find_by_email(&state.pool, &form.username).await? else {
        tracing::warn!(email = %form.username, "login failed: unknown email");
        return Err(ApiError::unauthenticated("Invalid email or password"));
    };

    // Step 2: Check the password. A digest we cannot even parse is a
    // stored-data fault worth logging, but to the caller it is just a
    // failed login.
    let password_ok = match verify_password(&form.password, &user.hashed_password) {
        Ok(matches) => matches,
        Err(err) => {
            tracing::error!(user_id = %user.id, error = %err, "password digest unreadable");
            false
        }
    };
    if !password_ok {
        tracing::warn!(user_id = %user.id, "login failed: wrong password");
        return Err(ApiError::unauthenticated("Invalid email or password"));
    }

    // Step 3: Issue the access token (subject = email)
    let token = state.tokens.issue(&user.email)?;

    tracing::info!(user_id = %user.id, "login successful");
    Ok(Json(TokenResponse::bearer(token)))
}
