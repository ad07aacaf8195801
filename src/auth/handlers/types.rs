//! Request and response types for the auth endpoints

use serde::{Deserialize, Serialize};

use crate::users::types::Role;

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    /// Requested role; defaults to the least privileged
    pub role: Option<Role>,
}

/// Body of `POST /auth/login`.
///
/// Form-encoded, OAuth2 password flow: the `username` field carries the
/// account email.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_owned(),
        }
    }
}
