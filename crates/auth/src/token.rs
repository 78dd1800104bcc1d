//! Token issuance and verification (HS256 JWT, compact serialization).
//!
//! Verification is stateless: a token is accepted iff it has three segments,
//! its signature checks out against the configured key, and it has not
//! expired. There is no session store and no revocation list.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::{ClaimSet, validate_claims};
use crate::config::AuthConfig;
use crate::headers::{TokenHeaders, extract_token};
use crate::user::UserRecord;

const SEGMENTS: usize = 3;

/// Why a presented token was not accepted.
///
/// `Display` is the user-facing message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Not authorized")]
    MissingToken,

    #[error("Not enough or too many segments")]
    MalformedToken,

    #[error("Not authorized")]
    InvalidSignature,

    #[error("Token has been expired")]
    ExpiredToken,
}

/// Result of verifying a token: the decoded claims or the reason for refusal.
pub type VerificationOutcome = Result<ClaimSet, TokenError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to sign token: {0}")]
pub struct SigningError(String);

/// A signed, compact token string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    ttl: chrono::Duration,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            key: EncodingKey::from_secret(config.signing_key().as_bytes()),
            ttl: config.token_ttl(),
        }
    }

    /// Issue a token for `user` that expires one TTL after `now`.
    pub fn issue(&self, user: &UserRecord, now: DateTime<Utc>) -> Result<Token, SigningError> {
        let exp = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| SigningError(format!("expiry out of range: {now} + {}", self.ttl)))?;
        self.sign(&ClaimSet::for_user(user, exp))
    }

    /// Sign an arbitrary claim set as-is.
    pub fn sign(&self, claims: &ClaimSet) -> Result<Token, SigningError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.key)
            .map(Token)
            .map_err(|e| SigningError(e.to_string()))
    }
}

#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        // Expiry is checked by `validate_claims` against the caller's clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(config.signing_key().as_bytes()),
            validation,
        }
    }

    /// Extract the token from request headers, then verify it.
    pub fn verify_headers(&self, headers: TokenHeaders<'_>, now: DateTime<Utc>) -> VerificationOutcome {
        let token = extract_token(headers)?;
        self.verify(token, now)
    }

    /// Decode and validate a raw token string.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> VerificationOutcome {
        if token.split('.').count() != SEGMENTS {
            return Err(TokenError::MalformedToken);
        }

        let claims = jsonwebtoken::decode::<ClaimSet>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                ErrorKind::ExpiredSignature => TokenError::ExpiredToken,
                _ => TokenError::MalformedToken,
            })?;

        validate_claims(&claims, now)?;
        Ok(claims)
    }
}
