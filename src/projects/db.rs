//! Project database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::types::{Project, ProjectCreate, ProjectUpdate};

/// List the projects a user owns, oldest first
pub async fn list_by_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT id, name, description, owner_id, status, created_at, updated_at
         FROM projects WHERE owner_id = $1
         ORDER BY created_at",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await
}

/// Fetch a single project by id
pub async fn find_by_id(pool: &PgPool, project_id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT id, name, description, owner_id, status, created_at, updated_at
         FROM projects WHERE id = $1",
    )
    .bind(project_id)
    .fetch_optional(pool)
    .await
}

/// Insert a project owned by `owner_id`; status starts at the column
/// default (`active`)
pub async fn create_project(
    pool: &PgPool,
    owner_id: Uuid,
    data: &ProjectCreate,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (id, name, description, owner_id)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, description, owner_id, status, created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(&data.name)
    .bind(&data.description)
    .bind(owner_id)
    .fetch_one(pool)
    .await
}

/// Apply a whitelisted patch; `None` fields keep their current value.
/// Returns `None` when the project no longer exists.
pub async fn update_project(
    pool: &PgPool,
    project_id: Uuid,
    updates: &ProjectUpdate,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects
         SET name = COALESCE($2, name),
             description = COALESCE($3, description),
             status = COALESCE($4, status),
             updated_at = NOW()
         WHERE id = $1
         RETURNING id, name, description, owner_id, status, created_at, updated_at",
    )
    .bind(project_id)
    .bind(&updates.name)
    .bind(&updates.description)
    .bind(updates.status)
    .fetch_optional(pool)
    .await
}

/// Delete a project (tasks and their comments cascade).
/// Returns whether a row was actually removed.
pub async fn delete_project(pool: &PgPool, project_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(project_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
