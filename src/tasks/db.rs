//! Task database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::types::{Task, TaskCreate, TaskPriority, TaskUpdate};

/// List every task in a project, oldest first
pub async fn list_by_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT id, title, description, project_id, assigned_to, status, priority, due_date,
                created_at, updated_at
         FROM tasks WHERE project_id = $1
         ORDER BY created_at",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

/// Fetch a single task by id
pub async fn find_by_id(pool: &PgPool, task_id: Uuid) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT id, title, description, project_id, assigned_to, status, priority, due_date,
                created_at, updated_at
         FROM tasks WHERE id = $1",
    )
    .bind(task_id)
    .fetch_optional(pool)
    .await
}

/// Insert a task into a project. New tasks are unassigned and `todo`;
/// priority falls back to `medium` when the payload omits it.
pub async fn create_task(
    pool: &PgPool,
    project_id: Uuid,
    data: &TaskCreate,
) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (id, title, description, project_id, priority, due_date)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, title, description, project_id, assigned_to, status, priority, due_date,
                   created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(&data.title)
    .bind(&data.description)
    .bind(project_id)
    .bind(data.priority.unwrap_or(TaskPriority::Medium))
    .bind(data.due_date)
    .fetch_one(pool)
    .await
}

/// Apply a whitelisted patch; `None` fields keep their current value.
/// Returns `None` when the task no longer exists.
pub async fn update_task(
    pool: &PgPool,
    task_id: Uuid,
    updates: &TaskUpdate,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "UPDATE tasks
         SET title = COALESCE($2, title),
             description = COALESCE($3, description),
             priority = COALESCE($4, priority),
             status = COALESCE($5, status),
             due_date = COALESCE($6, due_date),
             updated_at = NOW()
         WHERE id = $1
         RETURNING id, title, description, project_id, assigned_to, status, priority, due_date,
                   created_at, updated_at",
    )
    .bind(task_id)
    .bind(&updates.title)
    .bind(&updates.description)
    .bind(updates.priority)
    .bind(updates.status)
    .bind(updates.due_date)
    .fetch_optional(pool)
    .await
}

/// Delete a task (its comments cascade).
/// Returns whether a row was actually removed.
pub async fn delete_task(pool: &PgPool, task_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(task_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Point a task's assignment at a user.
/// Returns `None` when the task no longer exists.
pub async fn assign_task(
    pool: &PgPool,
    task_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "UPDATE tasks
         SET assigned_to = $2, updated_at = NOW()
         WHERE id = $1
         RETURNING id, title, description, project_id, assigned_to, status, priority, due_date,
                   created_at, updated_at",
    )
    .bind(task_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
