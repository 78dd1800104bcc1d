//! Process-wide authentication configuration.
//!
//! Built once at startup and handed to the issuer and verifier; nothing here
//! is mutated afterwards.

use chrono::Duration;
use thiserror::Error;

use crate::roles::{Role, RoleDefaults};

pub const JWT_SECRET_VAR: &str = "JWT_SECRET";
pub const TOKEN_TTL_VAR: &str = "TOKEN_TTL_SECONDS";
pub const DEFAULT_ROLE_VAR: &str = "DEFAULT_ROLE";
pub const DEFAULT_ORG_ROLE_VAR: &str = "DEFAULT_ORG_ROLE";

/// Default token lifetime: one day.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Longest accepted token lifetime: ten years.
pub const MAX_TOKEN_TTL_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("signing key is missing (set JWT_SECRET)")]
    MissingSigningKey,

    #[error("invalid token ttl: {0}")]
    InvalidTtl(String),
}

/// Symmetric key shared by the token issuer and verifier.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(ConfigError::MissingSigningKey);
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    signing_key: SigningKey,
    token_ttl: Duration,
    role_defaults: RoleDefaults,
}

impl AuthConfig {
    pub fn new(signing_key: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        Ok(Self {
            signing_key: SigningKey::new(signing_key)?,
            token_ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS),
            role_defaults: RoleDefaults::default(),
        })
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Result<Self, ConfigError> {
        if ttl <= Duration::zero() {
            return Err(ConfigError::InvalidTtl(format!(
                "must be positive, got {}s",
                ttl.num_seconds()
            )));
        }
        if ttl > Duration::seconds(MAX_TOKEN_TTL_SECONDS) {
            return Err(ConfigError::InvalidTtl(format!(
                "must be at most {MAX_TOKEN_TTL_SECONDS}s, got {}s",
                ttl.num_seconds()
            )));
        }
        self.token_ttl = ttl;
        Ok(self)
    }

    pub fn with_role_defaults(mut self, role_defaults: RoleDefaults) -> Self {
        self.role_defaults = role_defaults;
        self
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let secret = get(JWT_SECRET_VAR).ok_or(ConfigError::MissingSigningKey)?;
        let mut config = Self::new(secret.into_bytes())?;

        if let Some(raw) = get(TOKEN_TTL_VAR) {
            let secs: i64 = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidTtl(format!("{TOKEN_TTL_VAR}={raw}: {e}")))?;
            let ttl = Duration::try_seconds(secs)
                .ok_or_else(|| ConfigError::InvalidTtl(format!("{TOKEN_TTL_VAR}={raw}: out of range")))?;
            config = config.with_token_ttl(ttl)?;
        }

        let mut roles = RoleDefaults::default();
        if let Some(role) = get(DEFAULT_ROLE_VAR) {
            roles.role = Role::new(role.trim().to_string());
        }
        if let Some(org_role) = get(DEFAULT_ORG_ROLE_VAR) {
            roles.org_role = Role::new(org_role.trim().to_string());
        }

        Ok(config.with_role_defaults(roles))
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn role_defaults(&self) -> &RoleDefaults {
        &self.role_defaults
    }
}
