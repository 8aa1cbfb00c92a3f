//! Access-control boundary traits.
//!
//! Login pages, sessions, and credential storage live outside this
//! repository. Callers that gate report access implement these traits, or
//! use the in-memory table for tests and embedded use.

use crate::error::AccessError;
use serde::{Deserialize, Serialize};

/// User role, in descending order of privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

/// Actions a caller may gate on a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Read the three full bucket tables
    ViewFullInventory,
    /// Read the counts/totals summary only
    ViewSummary,
    /// Write per-bucket CSV slices to disk
    ExportSlices,
    /// Call the narrative provider
    RequestNarrative,
}

/// Credential check: username + password → role.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> Result<Role, AccessError>;
}

/// Permission check: role + action → allowed.
pub trait Authorizer: Send + Sync {
    fn authorize(&self, role: Role, action: Action) -> bool;
}

/// In-memory user table for tests and embedded callers.
#[derive(Debug, Default)]
pub struct StaticUserTable {
    users: Vec<(String, String, Role)>,
}

impl StaticUserTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        self.users.push((username.into(), password.into(), role));
        self
    }
}

impl Authenticator for StaticUserTable {
    fn authenticate(&self, username: &str, password: &str) -> Result<Role, AccessError> {
        let entry = self
            .users
            .iter()
            .find(|(name, _, _)| name == username)
            .ok_or_else(|| AccessError::UnknownUser(username.to_string()))?;

        if entry.1 == password {
            Ok(entry.2)
        } else {
            Err(AccessError::InvalidCredentials(username.to_string()))
        }
    }
}

/// Role policy matching the dashboard tiers: staff see summaries, managers
/// additionally browse and export, admins do everything.
#[derive(Debug, Default)]
pub struct RolePolicy;

impl Authorizer for RolePolicy {
    fn authorize(&self, role: Role, action: Action) -> bool {
        match (role, action) {
            (Role::Admin, _) => true,
            (Role::Manager, Action::RequestNarrative) => false,
            (Role::Manager, _) => true,
            (Role::Staff, Action::ViewSummary) => true,
            (Role::Staff, _) => false,
        }
    }
}
