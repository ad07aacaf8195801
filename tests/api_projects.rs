//! Project API integration tests
//!
//! Exercises the role rules around projects: only managers and admins
//! create them, only the owner or an admin may change or delete them,
//! and listing never shows anyone else's projects. All tests here need
//! a live Postgres and are `#[ignore]`d by default.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::auth_helpers::{auth_header, live_server, register_and_login};
use serde_json::json;

async fn create_project(server: &TestServer, token: &str, name: &str) -> serde_json::Value {
    let response = server
        .post("/projects")
        .add_header("Authorization", auth_header(token))
        .json(&json!({ "name": name, "description": "a test project" }))
        .await;
    assert_eq!(
        response.status_code(),
        StatusCode::CREATED,
        "project creation failed: {}",
        response.text()
    );
    response.json()
}

async fn my_id(server: &TestServer, token: &str) -> String {
    let response = server
        .get("/users/me")
        .add_header("Authorization", auth_header(token))
        .await;
    let body: serde_json::Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn test_plain_user_cannot_create_projects() {
    let (server, _pool) = live_server().await;
    let (_email, token) = register_and_login(&server, "user").await;

    let response = server
        .post("/projects")
        .add_header("Authorization", auth_header(&token))
        .json(&json!({ "name": "Forbidden" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Only managers or admins can create projects");
    assert_eq!(body["reason"], "role_insufficient");
    assert_eq!(body["status"], 403);
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn test_manager_creates_project_and_owns_it() {
    let (server, _pool) = live_server().await;
    let (_email, token) = register_and_login(&server, "manager").await;
    let manager_id = my_id(&server, &token).await;

    let project = create_project(&server, &token, "Launch").await;

    assert_eq!(project["name"], "Launch");
    assert_eq!(project["description"], "a test project");
    assert_eq!(project["status"], "active");
    assert_eq!(project["owner_id"], manager_id.as_str());
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn test_empty_project_name_is_rejected() {
    let (server, _pool) = live_server().await;
    let (_email, token) = register_and_login(&server, "manager").await;

    let response = server
        .post("/projects")
        .add_header("Authorization", auth_header(&token))
        .json(&json!({ "name": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Project name cannot be empty");
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn test_listing_shows_only_the_callers_projects() {
    let (server, _pool) = live_server().await;
    let (_a, token_a) = register_and_login(&server, "manager").await;
    let (_b, token_b) = register_and_login(&server, "manager").await;

    create_project(&server, &token_a, "Alpha").await;
    create_project(&server, &token_a, "Beta").await;
    create_project(&server, &token_b, "Gamma").await;

    let response = server
        .get("/projects")
        .add_header("Authorization", auth_header(&token_a))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let listed: Vec<serde_json::Value> = response.json();

    assert_eq!(listed.len(), 2);
    let names: Vec<&str> = listed.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"Alpha"));
    assert!(names.contains(&"Beta"));
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn test_admins_see_only_their_own_projects_too() {
    let (server, _pool) = live_server().await;
    let (_mgr, manager_token) = register_and_login(&server, "manager").await;
    let (_adm, admin_token) = register_and_login(&server, "admin").await;

    create_project(&server, &manager_token, "Managed").await;

    let response = server
        .get("/projects")
        .add_header("Authorization", auth_header(&admin_token))
        .await;
    let listed: Vec<serde_json::Value> = response.json();

    assert!(listed.is_empty());
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn test_any_authenticated_user_can_read_a_project() {
    let (server, _pool) = live_server().await;
    let (_mgr, manager_token) = register_and_login(&server, "manager").await;
    let (_usr, user_token) = register_and_login(&server, "user").await;
    let project = create_project(&server, &manager_token, "Readable").await;

    let response = server
        .get(&format!("/projects/{}", project["id"].as_str().unwrap()))
        .add_header("Authorization", auth_header(&user_token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Readable");
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn test_missing_project_is_404() {
    let (server, _pool) = live_server().await;
    let (_email, token) = register_and_login(&server, "user").await;

    let response = server
        .get(&format!("/projects/{}", uuid::Uuid::new_v4()))
        .add_header("Authorization", auth_header(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Project not found");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn test_non_owner_cannot_update_a_project() {
    let (server, _pool) = live_server().await;
    let (_a, owner_token) = register_and_login(&server, "manager").await;
    let (_b, other_token) = register_and_login(&server, "manager").await;
    let project = create_project(&server, &owner_token, "Guarded").await;

    let response = server
        .put(&format!("/projects/{}", project["id"].as_str().unwrap()))
        .add_header("Authorization", auth_header(&other_token))
        .json(&json!({ "name": "Hijacked" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Not authorized to update this project");
    assert_eq!(body["reason"], "not_owner");
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn test_partial_update_leaves_other_fields_alone() {
    let (server, _pool) = live_server().await;
    let (_email, token) = register_and_login(&server, "manager").await;
    let project = create_project(&server, &token, "Stable Name").await;

    let response = server
        .put(&format!("/projects/{}", project["id"].as_str().unwrap()))
        .add_header("Authorization", auth_header(&token))
        .json(&json!({ "status": "completed" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Stable Name");
    assert_eq!(body["description"], "a test project");
    assert_eq!(body["status"], "completed");
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn test_admin_can_update_any_project() {
    let (server, _pool) = live_server().await;
    let (_mgr, manager_token) = register_and_login(&server, "manager").await;
    let (_adm, admin_token) = register_and_login(&server, "admin").await;
    let project = create_project(&server, &manager_token, "Overseen").await;

    let response = server
        .put(&format!("/projects/{}", project["id"].as_str().unwrap()))
        .add_header("Authorization", auth_header(&admin_token))
        .json(&json!({ "status": "archived" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "archived");
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn test_non_owner_cannot_delete_a_project() {
    let (server, _pool) = live_server().await;
    let (_a, owner_token) = register_and_login(&server, "manager").await;
    let (_b, other_token) = register_and_login(&server, "manager").await;
    let project = create_project(&server, &owner_token, "Protected").await;

    let response = server
        .delete(&format!("/projects/{}", project["id"].as_str().unwrap()))
        .add_header("Authorization", auth_header(&other_token))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Not authorized to delete this project");
    assert_eq!(body["reason"], "not_owner");
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn test_owner_delete_removes_the_project() {
    let (server, _pool) = live_server().await;
    let (_email, token) = register_and_login(&server, "manager").await;
    let project = create_project(&server, &token, "Ephemeral").await;
    let path = format!("/projects/{}", project["id"].as_str().unwrap());

    let response = server
        .delete(&path)
        .add_header("Authorization", auth_header(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let gone = server
        .get(&path)
        .add_header("Authorization", auth_header(&token))
        .await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}
