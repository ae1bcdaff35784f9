//! Role model and permission predicates.
//!
//! Roles are a closed set on this backend (unlike an open RBAC policy
//! layer, there is no role→permission indirection): `admin` bypasses
//! approval, `agent` maintains cases but goes through approval, `user` is
//! read-only.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User role within a tenant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
    #[default]
    User,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(String);

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::User => "user",
        }
    }

    /// Administrators only.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Case editing is granted to admins and agents.
    pub fn can_edit(&self) -> bool {
        matches!(self, Role::Admin | Role::Agent)
    }

    /// Approval handling is granted to admins and agents.
    pub fn can_approve(&self) -> bool {
        matches!(self, Role::Admin | Role::Agent)
    }

    /// Alias of [`Role::is_admin`]: only admins publish without approval.
    ///
    /// Kept as a distinct method on purpose; call sites use this name for
    /// the approval-bypass decision and must keep reading as such even if
    /// the bypass rule ever diverges from plain adminship.
    pub fn can_skip_approval(&self) -> bool {
        self.is_admin()
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "agent" => Ok(Role::Agent),
            "user" => Ok(Role::User),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}
