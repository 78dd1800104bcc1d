use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orgdesk_core::UserId;

use crate::roles::Role;
use crate::token::TokenError;
use crate::user::UserRecord;

/// Identity and role claims embedded in an issued token.
///
/// Serialized as the JWT payload: `id`, `email`, `name`, `role`, `org_role`
/// and `exp` (Unix seconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    pub id: UserId,

    pub email: String,

    /// Display name: first and last name separated by one space.
    pub name: String,

    pub role: Role,

    pub org_role: Role,

    /// Expiration instant (second precision on the wire).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub exp: DateTime<Utc>,
}

impl ClaimSet {
    pub fn for_user(user: &UserRecord, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: user.id,
            email: user.email.as_str().to_string(),
            name: user.display_name(),
            role: user.role.clone(),
            org_role: user.org_role.clone(),
            exp: expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.exp
    }
}

/// Deterministically validate the time window of decoded claims.
///
/// A token is no longer accepted from its expiry instant onwards.
pub fn validate_claims(claims: &ClaimSet, now: DateTime<Utc>) -> Result<(), TokenError> {
    if claims.is_expired(now) {
        return Err(TokenError::ExpiredToken);
    }
    Ok(())
}
