//! Locating a candidate token in request headers.
//!
//! Framework-agnostic: callers pass the raw header values they found.

use crate::token::TokenError;

/// Custom header carrying the raw token.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

pub const BEARER_PREFIX: &str = "Bearer ";

/// The two header values a token may arrive in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TokenHeaders<'a> {
    /// Value of `x-access-token`, if sent.
    pub access_token: Option<&'a str>,

    /// Value of `Authorization`, if sent.
    pub authorization: Option<&'a str>,
}

impl<'a> TokenHeaders<'a> {
    pub fn access_token(token: &'a str) -> Self {
        Self {
            access_token: Some(token),
            authorization: None,
        }
    }

    pub fn authorization(value: &'a str) -> Self {
        Self {
            access_token: None,
            authorization: Some(value),
        }
    }
}

/// Pick the token to verify.
///
/// A non-empty `x-access-token` wins; otherwise `Authorization: Bearer <token>`
/// is used. Anything else is [`TokenError::MissingToken`].
pub fn extract_token<'a>(headers: TokenHeaders<'a>) -> Result<&'a str, TokenError> {
    if let Some(token) = headers.access_token.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(token);
    }

    headers
        .authorization
        .and_then(|value| value.trim_start().strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(TokenError::MissingToken)
}
