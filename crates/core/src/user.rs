//! User profile and its partial-merge update semantics.

use serde::{Deserialize, Serialize};

use crate::id::{TenantId, UserId};
use crate::role::Role;

/// Profile of the signed-in user.
///
/// The all-default value (empty ids, empty strings, role `user`) is the
/// logged-out state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, rename = "tenantId")]
    pub tenant_id: TenantId,
}

/// Partial profile update, as delivered by login and profile endpoints.
///
/// `name` also accepts the wire field `username` (the login payload uses
/// that spelling).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfilePatch {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default, alias = "username")]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default, rename = "tenantId")]
    pub tenant_id: Option<TenantId>,
}

impl UserProfile {
    /// Merge a patch into this profile.
    ///
    /// A field that is absent *or empty* in the patch keeps its previous
    /// value; roles have no empty form, so any provided role wins.
    pub fn apply(&mut self, patch: UserProfilePatch) {
        if let Some(id) = patch.id.filter(|v| !v.is_empty()) {
            self.id = id;
        }
        if let Some(name) = patch.name.filter(|v| !v.is_empty()) {
            self.name = name;
        }
        if let Some(avatar) = patch.avatar.filter(|v| !v.is_empty()) {
            self.avatar = avatar;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(tenant_id) = patch.tenant_id.filter(|v| !v.is_empty()) {
            self.tenant_id = tenant_id;
        }
    }
}
