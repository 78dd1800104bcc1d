//! Failure taxonomy of registration and login.

use thiserror::Error;

use crate::password::PasswordHashError;
use crate::store::StoreError;
use crate::token::SigningError;

/// Why a registration or login attempt did not produce a token.
///
/// The `Display` text of every validation variant is the exact user-facing
/// message returned to clients; see [`AuthError::is_validation`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email is needed")]
    EmailRequired,

    #[error("The email is registered")]
    EmailTaken,

    #[error("Password is needed")]
    PasswordRequired,

    #[error("First name is needed")]
    FirstNameRequired,

    #[error("Last name is needed")]
    LastNameRequired,

    #[error("Bad email format")]
    InvalidEmailFormat,

    #[error("Password has to be at least 8 characters long")]
    PasswordTooShort,

    #[error("This email is not registered")]
    EmailNotRegistered,

    #[error("The password is wrong")]
    WrongPassword,

    #[error(transparent)]
    Hashing(#[from] PasswordHashError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error("{0}")]
    Storage(String),
}

impl AuthError {
    /// `true` for failures caused by the request itself (reported to the
    /// client as `success: false`), `false` for collaborator faults.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            AuthError::Hashing(_) | AuthError::Signing(_) | AuthError::Storage(_)
        )
    }
}

impl From<StoreError> for AuthError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::DuplicateEmail => AuthError::EmailTaken,
            StoreError::Unavailable(msg) => AuthError::Storage(msg),
        }
    }
}
