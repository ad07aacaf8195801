//! Authentication test helpers
//!
//! Builds test servers around the production router and walks the
//! register/login flow so tests can get a real bearer token in one call.
//! Live servers share one Postgres; every account gets a unique email so
//! tests can run in parallel and re-runs never collide.

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Duration;
use jsonwebtoken::Algorithm;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use taskboard::auth::tokens::TokenService;
use taskboard::routes::create_router;
use taskboard::server::state::AppState;

use super::database::{create_live_pool, lazy_pool};

/// Signing secret shared by every test token service
pub const TEST_SECRET: &[u8] = b"test-secret";

/// Token service matching the test server's verification rules
pub fn test_token_service() -> TokenService {
    TokenService::new(TEST_SECRET, Algorithm::HS256, Duration::minutes(30))
}

/// A server whose pool never connects; only good for requests that are
/// rejected before any query runs
pub fn hermetic_server() -> TestServer {
    let state = AppState::new(lazy_pool(), test_token_service());
    TestServer::new(create_router(state)).expect("test server")
}

/// A server over the live test database, plus the pool for direct
/// row-level setup and inspection
pub async fn live_server() -> (TestServer, PgPool) {
    let pool = create_live_pool().await;
    let state = AppState::new(pool.clone(), test_token_service());
    let server = TestServer::new(create_router(state)).expect("test server");
    (server, pool)
}

/// An email no other test run has used
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4())
}

/// Authorization header value for a bearer token
pub fn auth_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Register an account with the given role through the API.
///
/// Panics on anything but a 200; returns the email.
pub async fn register(server: &TestServer, role: &str) -> String {
    let email = unique_email(role);
    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": email,
            "password": "password123",
            "full_name": "Test User",
            "role": role,
        }))
        .await;
    assert_eq!(
        response.status_code(),
        StatusCode::OK,
        "registration failed: {}",
        response.text()
    );
    email
}

/// Log in and return the bearer token
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/auth/login")
        .form(&[("username", email), ("password", password)])
        .await;
    assert_eq!(
        response.status_code(),
        StatusCode::OK,
        "login failed: {}",
        response.text()
    );
    let body: serde_json::Value = response.json();
    body["access_token"]
        .as_str()
        .expect("login response carries access_token")
        .to_string()
}

/// Register a fresh account with the given role and log it in.
///
/// Returns `(email, token)`.
pub async fn register_and_login(server: &TestServer, role: &str) -> (String, String) {
    let email = register(server, role).await;
    let token = login(server, &email, "password123").await;
    (email, token)
}
