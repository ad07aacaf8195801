//! Comment database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::types::Comment;

/// List the comments on a task, oldest first
pub async fn list_by_task(pool: &PgPool, task_id: Uuid) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        "SELECT id, task_id, user_id, comment_text, created_at, updated_at
         FROM task_comments WHERE task_id = $1
         ORDER BY created_at",
    )
    .bind(task_id)
    .fetch_all(pool)
    .await
}

/// Insert a comment by `user_id` on `task_id`
pub async fn create_comment(
    pool: &PgPool,
    task_id: Uuid,
    user_id: Uuid,
    comment_text: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        "INSERT INTO task_comments (id, task_id, user_id, comment_text)
         VALUES ($1, $2, $3, $4)
         RETURNING id, task_id, user_id, comment_text, created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(task_id)
    .bind(user_id)
    .bind(comment_text)
    .fetch_one(pool)
    .await
}
