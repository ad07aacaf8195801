//! API Error Types
//!
//! This module defines the error taxonomy surfaced by HTTP handlers and the
//! authentication middleware. Every variant maps to exactly one HTTP status
//! so that failure classes stay distinguishable at the edge:
//!
//! - `Unauthenticated` - missing/invalid/expired bearer token (401)
//! - `IdentityNotFound` - token subject no longer maps to a user (404)
//! - `Forbidden` - role or ownership check denied the request (403)
//! - `NotFound` - requested resource does not exist (404)
//! - `Validation` - malformed request body (400)
//! - `Duplicate` - uniqueness conflict, e.g. email already registered (400)
//! - `Database` / `Internal` - unexpected server fault (500)
//!
//! Persistence faults are never masked as authorization outcomes: a failed
//! query is a 500, not a 403.

use thiserror::Error;
use axum::http::StatusCode;

use crate::auth::guard::DenyReason;
use crate::auth::password::PasswordError;

/// Errors returned by handlers and middleware.
///
/// Each variant carries enough context to produce a structured JSON error
/// response. Construct variants through the helper methods where one exists.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bearer token was missing, malformed, or expired
    #[error("{detail}")]
    Unauthenticated {
        /// Human-readable failure detail (safe to return to the caller)
        detail: String,
    },

    /// Token verified but its subject no longer resolves to a user
    #[error("User not found")]
    IdentityNotFound,

    /// The authorization guard denied the request
    #[error("{detail}")]
    Forbidden {
        /// Machine-readable denial tag from the guard
        reason: DenyReason,
        /// Human-readable explanation
        detail: String,
    },

    /// A referenced resource does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Resource kind, e.g. "Project" or "Task"
        resource: &'static str,
    },

    /// Request body failed validation
    #[error("{detail}")]
    Validation {
        /// Human-readable validation failure
        detail: String,
    },

    /// Uniqueness conflict on create
    #[error("{detail}")]
    Duplicate {
        /// Human-readable conflict description
        detail: String,
    },

    /// Unexpected persistence failure
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),

    /// Any other unexpected server-side failure
    #[error("Internal server error")]
    Internal {
        /// Internal detail, logged but never returned to the caller
        detail: String,
    },
}

impl ApiError {
    /// Create an authentication failure (401)
    pub fn unauthenticated(detail: impl Into<String>) -> Self {
        Self::Unauthenticated {
            detail: detail.into(),
        }
    }

    /// Create an authorization denial (403) from a guard decision
    pub fn forbidden(reason: DenyReason, detail: impl Into<String>) -> Self {
        Self::Forbidden {
            reason,
            detail: detail.into(),
        }
    }

    /// Create a resource-not-found error (404)
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Create a validation failure (400)
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    /// Create a duplicate-resource error (400)
    pub fn duplicate(detail: impl Into<String>) -> Self {
        Self::Duplicate {
            detail: detail.into(),
        }
    }

    /// Create a generic internal error (500)
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::IdentityNotFound => StatusCode::NOT_FOUND,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Duplicate { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message returned to the caller
    ///
    /// Server faults deliberately collapse to a generic message; the real
    /// cause is logged, not leaked.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self::Internal {
            detail: err.to_string(),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::Internal {
            detail: format!("token signing failed: {err}"),
        }
    }
}
