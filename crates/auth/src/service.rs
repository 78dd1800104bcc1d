//! Registration, login and token-state checks wired to their collaborators.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::headers::TokenHeaders;
use crate::login::{LoginRequest, authenticate};
use crate::password::PasswordHasher;
use crate::registration::{RegistrationRequest, validate_registration};
use crate::roles::RoleDefaults;
use crate::store::CredentialStore;
use crate::token::{Token, TokenIssuer, TokenVerifier, VerificationOutcome};
use crate::user::{NewUser, UserRecord};

/// The authentication core: holds no mutable state of its own, so one
/// instance serves any number of concurrent requests.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
    role_defaults: RoleDefaults,
}

impl AuthService {
    pub fn new(
        config: &AuthConfig,
        store: Arc<dyn CredentialStore>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer: TokenIssuer::new(config),
            verifier: TokenVerifier::new(config),
            role_defaults: config.role_defaults().clone(),
        }
    }

    /// Validate, persist and sign in a new user.
    ///
    /// Nothing is written unless every check passes. A duplicate reported by
    /// the store at insert time is the same `EmailTaken` as one found by the
    /// up-front lookup.
    pub fn register(
        &self,
        request: &RegistrationRequest,
        now: DateTime<Utc>,
    ) -> Result<Token, AuthError> {
        let result = self.try_register(request, now);
        match &result {
            Ok(_) => {}
            Err(e) if e.is_validation() => tracing::debug!(reason = %e, "registration rejected"),
            Err(e) => tracing::warn!(error = %e, "registration failed"),
        }
        result
    }

    fn try_register(
        &self,
        request: &RegistrationRequest,
        now: DateTime<Utc>,
    ) -> Result<Token, AuthError> {
        let valid = validate_registration(request, self.store.as_ref())?;
        let password_digest = self.hasher.hash(&valid.password)?;

        let user = self.store.create(NewUser {
            email: valid.email,
            password_digest,
            first_name: valid.first_name,
            last_name: valid.last_name,
            roles: self.role_defaults.clone(),
        })?;

        tracing::info!(user_id = %user.id, "user registered");
        self.issue(&user, now)
    }

    /// Check credentials and issue a fresh token.
    pub fn login(&self, request: &LoginRequest, now: DateTime<Utc>) -> Result<Token, AuthError> {
        let user = authenticate(request, self.store.as_ref(), self.hasher.as_ref()).map_err(|e| {
            if e.is_validation() {
                tracing::debug!(reason = %e, "login rejected");
            } else {
                tracing::warn!(error = %e, "login failed");
            }
            e
        })?;

        tracing::info!(user_id = %user.id, "user logged in");
        self.issue(&user, now)
    }

    /// Verify the token presented in `headers`.
    pub fn check_state(&self, headers: TokenHeaders<'_>, now: DateTime<Utc>) -> VerificationOutcome {
        let outcome = self.verifier.verify_headers(headers, now);
        if let Err(e) = &outcome {
            tracing::debug!(reason = ?e, "token rejected");
        }
        outcome
    }

    pub fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }

    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    fn issue(&self, user: &UserRecord, now: DateTime<Utc>) -> Result<Token, AuthError> {
        self.issuer.issue(user, now).map_err(|e| {
            tracing::error!(error = %e, user_id = %user.id, "token signing failed");
            AuthError::from(e)
        })
    }
}
