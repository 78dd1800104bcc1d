use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use orgdesk_auth::{AuthError, TokenError};

use crate::app::dto::AuthResponse;

/// Map a registration/login failure onto the wire.
///
/// Validation failures complete normally (`200`, `success: false`);
/// collaborator faults are real server errors.
pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::Hashing(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "hashing_error", e.to_string())
        }
        AuthError::Signing(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "signing_error", e.to_string())
        }
        AuthError::Storage(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg),
        other => failure(other.to_string()),
    }
}

pub fn token_error_to_response(err: TokenError) -> axum::response::Response {
    failure(err.to_string())
}

pub fn failure(msg: impl Into<String>) -> axum::response::Response {
    (StatusCode::OK, Json(AuthResponse::failure(msg))).into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
