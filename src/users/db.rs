//! User database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::types::{Role, User};

/// Insert a new user and return the stored row.
///
/// The caller hashes the password; this function never sees plaintext.
/// A unique-violation on the email index surfaces as `sqlx::Error` and is
/// translated to a duplicate error at the handler.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    hashed_password: &str,
    full_name: Option<&str>,
    role: Role,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (id, email, hashed_password, full_name, role)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, email, hashed_password, full_name, role, is_active, created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(hashed_password)
    .bind(full_name)
    .bind(role)
    .fetch_one(pool)
    .await
}

/// Look up a user by email (the unique login identifier)
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, hashed_password, full_name, role, is_active, created_at, updated_at
         FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Look up a user by id
pub async fn find_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, hashed_password, full_name, role, is_active, created_at, updated_at
         FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Apply a profile update, leaving `None` fields untouched.
///
/// `hashed_password` is already hashed by the caller. Returns `None` when
/// the user row has vanished.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    full_name: Option<&str>,
    hashed_password: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users
         SET full_name = COALESCE($2, full_name),
             hashed_password = COALESCE($3, hashed_password),
             updated_at = NOW()
         WHERE id = $1
         RETURNING id, email, hashed_password, full_name, role, is_active, created_at, updated_at",
    )
    .bind(user_id)
    .bind(full_name)
    .bind(hashed_password)
    .fetch_optional(pool)
    .await
}
