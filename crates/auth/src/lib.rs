//! `orgdesk-auth` — authentication core: registration, login and signed,
//! time-limited session tokens.
//!
//! This crate is intentionally decoupled from HTTP and storage: user records
//! come from a [`CredentialStore`] and requests arrive as plain structs.

pub mod claims;
pub mod config;
pub mod error;
pub mod headers;
pub mod login;
pub mod password;
pub mod registration;
pub mod roles;
pub mod service;
pub mod store;
pub mod token;
pub mod user;

#[cfg(test)]
mod testutil;

pub use claims::{ClaimSet, validate_claims};
pub use config::{AuthConfig, ConfigError, SigningKey};
pub use error::AuthError;
pub use headers::{ACCESS_TOKEN_HEADER, TokenHeaders, extract_token};
pub use login::{LoginRequest, authenticate};
pub use password::{Argon2PasswordHasher, PasswordHashError, PasswordHasher};
pub use registration::{RegistrationRequest, ValidRegistration, validate_registration};
pub use roles::{Role, RoleDefaults};
pub use service::AuthService;
pub use store::{CredentialStore, StoreError};
pub use token::{SigningError, Token, TokenError, TokenIssuer, TokenVerifier, VerificationOutcome};
pub use user::{NewUser, UserRecord};
