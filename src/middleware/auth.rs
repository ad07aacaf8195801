/**
 * Authentication Middleware
 *
 * Protects routes that require a logged-in caller. The chain is:
 *
 * 1. Extract the `Authorization: Bearer <token>` header
 * 2. Verify the token signature and expiry
 * 3. Resolve the token subject (email) to a user row
 * 4. Attach the resolved `User` to request extensions
 *
 * Missing or unverifiable tokens are 401s (the response carries a
 * `WWW-Authenticate: Bearer` challenge). A token whose subject no longer
 * exists - the account was deleted after issuance - is a 404, not a 401:
 * the credential itself was fine.
 *
 * Handlers never see a token; they take the resolved identity through
 * the `CurrentUser` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::auth::tokens::TokenVerdict;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::db::find_by_email;
use crate::users::types::User;

/// Authentication middleware for protected routes.
///
/// Returns 401 for a missing/invalid/expired token, 404 when the subject
/// no longer resolves to a user, and 500 if the lookup itself fails.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::unauthenticated("Not authenticated")
        })?;

    // Header format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a bearer token");
        ApiError::unauthenticated("Not authenticated")
    })?;

    let email = match state.tokens.verify(token) {
        TokenVerdict::Valid(subject) => subject,
        TokenVerdict::Expired => {
            tracing::warn!("rejected expired token");
            return Err(ApiError::unauthenticated("Token has expired"));
        }
        TokenVerdict::Malformed => {
            tracing::warn!("rejected malformed token");
            return Err(ApiError::unauthenticated("Could not validate credentials"));
        }
    };

    // The token outlived its account
    let user = find_by_email(&state.pool, &email)
        .await?
        .ok_or(ApiError::IdentityNotFound)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Extractor for the identity resolved by `require_auth`.
///
/// Only works on routes behind the middleware; elsewhere it rejects
/// with 401.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                tracing::warn!("CurrentUser used on a route without auth middleware");
                ApiError::unauthenticated("Not authenticated")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::tokens::TokenService;
    use crate::users::types::Role;
    use chrono::Utc;
    use jsonwebtoken::Algorithm;
    use uuid::Uuid;

    fn test_state() -> AppState {
        // Lazy pool: never connects unless a query runs
        let pool = sqlx::PgPool::connect_lazy("postgres://localhost:1/unused").unwrap();
        let tokens = TokenService::new(b"test-secret", Algorithm::HS256, chrono::Duration::minutes(30));
        AppState::new(pool, tokens)
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".into(),
            hashed_password: "$2b$12$x".into(),
            full_name: None,
            role: Role::User,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_current_user_reads_extension() {
        let state = test_state();
        let request = axum::http::Request::builder().body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let user = test_user();
        parts.extensions.insert(user.clone());

        let CurrentUser(extracted) = CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(extracted.id, user.id);
        assert_eq!(extracted.email, user.email);
    }

    #[tokio::test]
    async fn test_current_user_missing_extension_rejects() {
        let state = test_state();
        let request = axum::http::Request::builder().body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let err = CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated { .. }));
    }
}
