//! Stored user identity as seen by the authentication core.

use orgdesk_core::{Email, UserId};

use crate::RoleDefaults;
use crate::roles::Role;

/// A persisted user, as returned by a [`CredentialStore`](crate::CredentialStore).
///
/// # Invariants
/// - `email` is unique (case-insensitively) across all records of a store.
/// - `password_digest` is a self-describing hash; the plaintext is never kept.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub email: Email,
    pub password_digest: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub org_role: Role,
}

impl UserRecord {
    /// First and last name joined by a single space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl core::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_digest", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("role", &self.role)
            .field("org_role", &self.org_role)
            .finish()
    }
}

/// Everything a store needs to create a user; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: Email,
    pub password_digest: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: RoleDefaults,
}

impl NewUser {
    /// Materialize the record once the store has picked an id.
    pub fn into_record(self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            email: self.email,
            password_digest: self.password_digest,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.roles.role,
            org_role: self.roles.org_role,
        }
    }
}
