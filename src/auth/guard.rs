//! Authorization guard
//!
//! Every role and ownership rule in the API lives in this one policy table.
//! Handlers fetch the resource, build an `Action` carrying the ownership
//! fact, and ask `decide`. The decision is a pure function of the identity
//! and the action: no queries, no clock, no globals, which is what makes
//! the table exhaustively testable.
//!
//! Rules, first match wins:
//!
//! 1. `CreateProject` - managers and admins only
//! 2. `UpdateProject`/`DeleteProject` - project owner, or admin
//! 3. `AssignTask` - managers and admins only
//! 4. `UpdateTask`/`DeleteTask` - current assignee, or admin
//! 5. `ReadResource` - any authenticated user
//!
//! A task with no assignee has no owner, so rule 4 admits only admins.

use uuid::Uuid;

use crate::error::ApiError;
use crate::users::types::User;

/// Why the guard said no
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The caller's role is below what the action requires
    RoleInsufficient,
    /// The caller neither owns the resource nor is an admin
    NotOwner,
}

impl DenyReason {
    /// Machine-readable tag included in 403 responses
    pub fn as_tag(&self) -> &'static str {
        match self {
            DenyReason::RoleInsufficient => "role_insufficient",
            DenyReason::NotOwner => "not_owner",
        }
    }
}

/// An action a caller wants to perform, with the ownership fact of the
/// already-fetched resource baked in.
///
/// Ownership variants take the fact by value so the guard can never be
/// asked about a resource that was not first fetched (missing resources
/// 404 before any decision is made).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateProject,
    UpdateProject { owner_id: Uuid },
    DeleteProject { owner_id: Uuid },
    AssignTask,
    UpdateTask { assigned_to: Option<Uuid> },
    DeleteTask { assigned_to: Option<Uuid> },
    ReadResource,
}

impl Action {
    /// The human-readable detail used when this action is denied
    pub fn deny_detail(&self) -> &'static str {
        match self {
            Action::CreateProject => "Only managers or admins can create projects",
            Action::UpdateProject { .. } => "Not authorized to update this project",
            Action::DeleteProject { .. } => "Not authorized to delete this project",
            Action::AssignTask => "Only managers or admins can assign tasks",
            Action::UpdateTask { .. } => "Not authorized to update this task",
            Action::DeleteTask { .. } => "Not authorized to delete this task",
            Action::ReadResource => "Not authorized",
        }
    }
}

/// Outcome of a guard decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { reason: DenyReason },
}

/// Evaluate the policy table for one identity and one action.
pub fn decide(identity: &User, action: &Action) -> Decision {
    match action {
        Action::CreateProject | Action::AssignTask => {
            if identity.role.is_manager_or_admin() {
                Decision::Allow
            } else {
                Decision::Deny {
                    reason: DenyReason::RoleInsufficient,
                }
            }
        }
        Action::UpdateProject { owner_id } | Action::DeleteProject { owner_id } => {
            if *owner_id == identity.id || identity.role.is_admin() {
                Decision::Allow
            } else {
                Decision::Deny {
                    reason: DenyReason::NotOwner,
                }
            }
        }
        Action::UpdateTask { assigned_to } | Action::DeleteTask { assigned_to } => {
            if *assigned_to == Some(identity.id) || identity.role.is_admin() {
                Decision::Allow
            } else {
                Decision::Deny {
                    reason: DenyReason::NotOwner,
                }
            }
        }
        Action::ReadResource => Decision::Allow,
    }
}

/// `decide`, with a denial already shaped as the 403 handlers return.
pub fn authorize(identity: &User, action: &Action) -> Result<(), ApiError> {
    match decide(identity, action) {
        Decision::Allow => Ok(()),
        Decision::Deny { reason } => Err(ApiError::forbidden(reason, action.deny_detail())),
    }
}
