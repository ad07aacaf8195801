/**
 * API Route Table
 *
 * Every endpoint the server exposes, split into a public router and a
 * protected router. The protected router sits behind the authentication
 * middleware; handlers on it can rely on `CurrentUser` being present.
 *
 * # Routes
 *
 * ## Public
 * - `GET /` - liveness banner
 * - `GET /healthz/public` - unauthenticated health check
 * - `POST /auth/register` - create an account
 * - `POST /auth/login` - exchange credentials for a bearer token
 *
 * ## Protected (bearer token required)
 * - `GET /healthz` - authenticated health check
 * - `GET|PUT /users/me` - own profile
 * - `GET|POST /projects`, `GET|PUT|DELETE /projects/{project_id}`
 * - `GET|POST /projects/{project_id}/tasks`
 * - `GET|PUT|DELETE /projects/{project_id}/tasks/{task_id}`
 * - `PUT /projects/{project_id}/tasks/{task_id}/assign`
 * - `GET|POST /tasks/{task_id}/comments`
 */

use axum::routing::{get, post, put};
use axum::{middleware, Router};

use crate::auth::handlers::{login, register};
use crate::comments::handlers::{add_comment, list_comments};
use crate::health;
use crate::middleware::auth::require_auth;
use crate::projects::handlers::{
    create_project, delete_project, get_project, list_projects, update_project,
};
use crate::server::state::AppState;
use crate::tasks::handlers::{
    assign_task, create_task, delete_task, get_task, list_tasks, update_task,
};
use crate::users::handlers::{get_profile, update_profile};

/// Build the full API route table.
///
/// Takes the state by value because the auth middleware needs it at
/// construction time, not just at request time.
pub fn api_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(health::root))
        .route("/healthz/public", get(health::public_health))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login));

    let protected = Router::new()
        .route("/healthz", get(health::authenticated_health))
        .route("/users/me", get(get_profile).put(update_profile))
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{project_id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/projects/{project_id}/tasks",
            get(list_tasks).post(create_task),
        )
        .route(
            "/projects/{project_id}/tasks/{task_id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route(
            "/projects/{project_id}/tasks/{task_id}/assign",
            put(assign_task),
        )
        .route(
            "/tasks/{task_id}/comments",
            get(list_comments).post(add_comment),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(protected)
}
