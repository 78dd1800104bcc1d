use serde::Serialize;

use orgdesk_auth::ClaimSet;
use orgdesk_core::UserId;

pub const REGISTERED_MSG: &str = "You are successfully registered";
pub const LOGGED_IN_MSG: &str = "You are successfully logged in";
pub const AUTHORIZED_MSG: &str = "You're authorized";

// -------------------------
// Response DTOs
// -------------------------

/// Envelope shared by every auth endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthResponse {
    pub fn with_token(msg: &str, token: String) -> Self {
        Self {
            success: true,
            msg: msg.to_string(),
            token: Some(token),
        }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: msg.into(),
            token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckStateResponse {
    pub success: bool,
    pub msg: String,
    pub decoded_token: DecodedToken,
}

/// Public view of a verified token's claims.
#[derive(Debug, Clone, Serialize)]
pub struct DecodedToken {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: String,
    pub org_role: String,
}

impl From<&ClaimSet> for DecodedToken {
    fn from(claims: &ClaimSet) -> Self {
        Self {
            id: claims.id,
            email: claims.email.clone(),
            name: claims.name.clone(),
            role: claims.role.as_str().to_string(),
            org_role: claims.org_role.as_str().to_string(),
        }
    }
}

impl CheckStateResponse {
    pub fn authorized(claims: &ClaimSet) -> Self {
        Self {
            success: true,
            msg: AUTHORIZED_MSG.to_string(),
            decoded_token: claims.into(),
        }
    }
}
