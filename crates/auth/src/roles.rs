use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier carried in issued tokens.
///
/// Roles are intentionally opaque strings at this layer; access-control
/// decisions based on them belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Roles assigned to a freshly registered user: one system-wide role and one
/// role within the user's organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefaults {
    pub role: Role,
    pub org_role: Role,
}

impl RoleDefaults {
    pub const DEFAULT_ROLE: &'static str = "member";
    pub const DEFAULT_ORG_ROLE: &'static str = "member";
}

impl Default for RoleDefaults {
    fn default() -> Self {
        Self {
            role: Role::new(Self::DEFAULT_ROLE),
            org_role: Role::new(Self::DEFAULT_ORG_ROLE),
        }
    }
}
