use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use orgdesk_auth::{ACCESS_TOKEN_HEADER, AuthService, TokenHeaders};

use crate::app::errors;
use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    pub auth: Arc<AuthService>,
}

/// Verify the request's token and expose its claims as [`PrincipalContext`].
///
/// Rejections are answered directly with `success: false` and the
/// verifier's message.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let outcome = state
        .auth
        .check_state(token_headers(req.headers()), Utc::now());

    match outcome {
        Ok(claims) => {
            req.extensions_mut().insert(PrincipalContext::new(claims));
            next.run(req).await
        }
        Err(e) => errors::token_error_to_response(e),
    }
}

fn token_headers(headers: &HeaderMap) -> TokenHeaders<'_> {
    TokenHeaders {
        access_token: header_str(headers, ACCESS_TOKEN_HEADER),
        authorization: header_str(headers, header::AUTHORIZATION.as_str()),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
