//! Project endpoints
//!
//! Listing is scoped to the caller's own projects. Creation is limited
//! to managers and admins; update and delete require ownership or admin.
//! Every missing project is a 404 before any ownership question is asked.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::db;
use super::types::{Project, ProjectCreate, ProjectUpdate};
use crate::auth::guard::{self, Action};
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;

/// `GET /projects` - the caller's own projects
pub async fn list_projects(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<Project>>> {
    let projects = db::list_by_owner(&state.pool, user.id).await?;
    Ok(Json(projects))
}

/// `POST /projects` - create a project owned by the caller (201)
pub async fn create_project(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<ProjectCreate>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    guard::authorize(&user, &Action::CreateProject)?;

    if payload.name.trim().is_empty() {
        return Err(ApiError::validation("Project name cannot be empty"));
    }

    let project = db::create_project(&state.pool, user.id, &payload).await?;
    tracing::info!(project_id = %project.id, owner_id = %user.id, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// `GET /projects/{project_id}`
pub async fn get_project(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<Project>> {
    let project = db::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(ApiError::not_found("Project"))?;
    Ok(Json(project))
}

/// `PUT /projects/{project_id}` - owner or admin
pub async fn update_project(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<Uuid>,
    Json(updates): Json<ProjectUpdate>,
) -> ApiResult<Json<Project>> {
    let project = db::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(ApiError::not_found("Project"))?;

    guard::authorize(
        &user,
        &Action::UpdateProject {
            owner_id: project.owner_id,
        },
    )?;

    let updated = db::update_project(&state.pool, project_id, &updates)
        .await?
        .ok_or(ApiError::not_found("Project"))?;

    tracing::info!(project_id = %project_id, user_id = %user.id, "project updated");
    Ok(Json(updated))
}

/// `DELETE /projects/{project_id}` - owner or admin (204)
pub async fn delete_project(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let project = db::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(ApiError::not_found("Project"))?;

    guard::authorize(
        &user,
        &Action::DeleteProject {
            owner_id: project.owner_id,
        },
    )?;

    db::delete_project(&state.pool, project_id).await?;
    tracing::info!(project_id = %project_id, user_id = %user.id, "project deleted");
    Ok(StatusCode::NO_CONTENT)
}
