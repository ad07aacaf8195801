//! Taskboard - Task Management API
//!
//! A multi-tenant project/task/comment tracker behind JWT bearer
//! authentication, backed by Postgres.
//!
//! # Overview
//!
//! Accounts carry a role (`user`, `manager`, `admin`). What a caller may
//! do is decided in exactly one place - the policy table in
//! [`auth::guard`] - from the resolved identity and the ownership fact
//! of the resource at hand:
//!
//! - creating projects and assigning tasks take manager or admin
//! - changing or deleting a project takes its owner or an admin
//! - changing or deleting a task takes its assignee or an admin
//! - reading, creating tasks, and commenting are open to any
//!   authenticated user
//!
//! # Module Structure
//!
//! Features are self-contained, each with its own storage layer (`db`),
//! domain types (`types`), and HTTP handlers:
//!
//! - **`auth`** - password hashing, the token service, the policy
//!   guard, and the register/login endpoints
//! - **`users`** - accounts and the profile endpoints
//! - **`projects`**, **`tasks`**, **`comments`** - the CRUD features
//! - **`middleware`** - bearer-token authentication and the
//!   `CurrentUser` extractor
//! - **`server`** - configuration, shared state, startup
//! - **`routes`** - the route table and router assembly
//! - **`error`** - the error taxonomy and its HTTP mapping
//! - **`health`** - liveness endpoints
//!
//! # Error Handling
//!
//! Handlers return `Result<_, error::ApiError>`; each variant maps to a
//! fixed HTTP status and a `{"error", "status"}` JSON body. Server
//! faults never leak detail to the wire.

pub mod auth;
pub mod comments;
pub mod error;
pub mod health;
pub mod middleware;
pub mod projects;
pub mod routes;
pub mod server;
pub mod tasks;
pub mod users;
