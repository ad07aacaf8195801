//! Comment endpoints
//!
//! Comments hang off tasks (`/tasks/{task_id}/comments`) and are open to
//! every authenticated user; there is no ownership rule on discussion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::db;
use super::types::{Comment, CommentCreate};
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;
use crate::tasks::db::find_by_id as find_task;

/// `GET /tasks/{task_id}/comments`
pub async fn list_comments(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Comment>>> {
    if find_task(&state.pool, task_id).await?.is_none() {
        return Err(ApiError::not_found("Task"));
    }
    let comments = db::list_by_task(&state.pool, task_id).await?;
    Ok(Json(comments))
}

/// `POST /tasks/{task_id}/comments` - any authenticated user (201)
pub async fn add_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(task_id): Path<Uuid>,
    Json(payload): Json<CommentCreate>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    if find_task(&state.pool, task_id).await?.is_none() {
        return Err(ApiError::not_found("Task"));
    }
    if payload.comment_text.trim().is_empty() {
        return Err(ApiError::validation("Comment text cannot be empty"));
    }

    let comment = db::create_comment(&state.pool, task_id, user.id, &payload.comment_text).await?;
    tracing::info!(comment_id = %comment.id, task_id = %task_id, user_id = %user.id, "comment added");
    Ok((StatusCode::CREATED, Json(comment)))
}
