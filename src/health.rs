//! Liveness endpoints
//!
//! Three levels: the root banner and `/healthz/public` answer without
//! credentials; `/healthz` sits behind the auth middleware, so a 200
//! from it proves token verification and the user lookup both work.

use axum::Json;
use serde_json::{json, Value};

use crate::middleware::auth::CurrentUser;

/// `GET /` - banner for humans and load balancers
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Task Management API is running" }))
}

/// `GET /healthz/public` - unauthenticated liveness check
pub async fn public_health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "public check passed" }))
}

/// `GET /healthz` - authenticated check, echoes who asked
pub async fn authenticated_health(CurrentUser(user): CurrentUser) -> Json<Value> {
    Json(json!({ "status": "ok", "user": user.email }))
}
