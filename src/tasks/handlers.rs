//! Task endpoints
//!
//! Tasks live under a project (`/projects/{project_id}/tasks`). Any
//! authenticated user may create and read tasks; update and delete are
//! for the assignee or an admin; assignment itself is a manager/admin
//! action, checked before the task is even fetched.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::db;
use super::types::{AssignQuery, Task, TaskCreate, TaskUpdate};
use crate::auth::guard::{self, Action};
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::CurrentUser;
use crate::projects::db::find_by_id as find_project;
use crate::server::state::AppState;
use crate::users::db::find_by_id as find_user;

/// `GET /projects/{project_id}/tasks`
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Task>>> {
    if find_project(&state.pool, project_id).await?.is_none() {
        return Err(ApiError::not_found("Project"));
    }
    let tasks = db::list_by_project(&state.pool, project_id).await?;
    Ok(Json(tasks))
}

/// `POST /projects/{project_id}/tasks` - any authenticated user (201)
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<TaskCreate>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    if find_project(&state.pool, project_id).await?.is_none() {
        return Err(ApiError::not_found("Project"));
    }
    if payload.title.trim().is_empty() {
        return Err(ApiError::validation("Task title cannot be empty"));
    }

    let task = db::create_task(&state.pool, project_id, &payload).await?;
    tracing::info!(task_id = %task.id, project_id = %project_id, user_id = %user.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /projects/{project_id}/tasks/{task_id}`
pub async fn get_task(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path((_project_id, task_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<Task>> {
    let task = db::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(ApiError::not_found("Task"))?;
    Ok(Json(task))
}

/// `PUT /projects/{project_id}/tasks/{task_id}` - assignee or admin
pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((_project_id, task_id)): Path<(Uuid, Uuid)>,
    Json(updates): Json<TaskUpdate>,
) -> ApiResult<Json<Task>> {
    let task = db::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(ApiError::not_found("Task"))?;

    guard::authorize(
        &user,
        &Action::UpdateTask {
            assigned_to: task.assigned_to,
        },
    )?;

    let updated = db::update_task(&state.pool, task_id, &updates)
        .await?
        .ok_or(ApiError::not_found("Task"))?;

    tracing::info!(task_id = %task_id, user_id = %user.id, "task updated");
    Ok(Json(updated))
}

/// `DELETE /projects/{project_id}/tasks/{task_id}` - assignee or admin (204)
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((_project_id, task_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    let task = db::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(ApiError::not_found("Task"))?;

    guard::authorize(
        &user,
        &Action::DeleteTask {
            assigned_to: task.assigned_to,
        },
    )?;

    db::delete_task(&state.pool, task_id).await?;
    tracing::info!(task_id = %task_id, user_id = %user.id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /projects/{project_id}/tasks/{task_id}/assign?user_id=<uuid>`
///
/// The role check comes first: a non-manager asking to assign a task
/// that does not exist still gets a 403, not a 404.
pub async fn assign_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((_project_id, task_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<AssignQuery>,
) -> ApiResult<Json<Task>> {
    guard::authorize(&user, &Action::AssignTask)?;

    if db::find_by_id(&state.pool, task_id).await?.is_none() {
        return Err(ApiError::not_found("Task"));
    }
    if find_user(&state.pool, query.user_id).await?.is_none() {
        return Err(ApiError::not_found("User"));
    }

    let task = db::assign_task(&state.pool, task_id, query.user_id)
        .await?
        .ok_or(ApiError::not_found("Task"))?;

    tracing::info!(
        task_id = %task_id,
        assigned_to = %query.user_id,
        assigned_by = %user.id,
        "task assigned"
    );
    Ok(Json(task))
}
