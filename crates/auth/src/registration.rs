//! Registration request validation.

use serde::Deserialize;

use orgdesk_core::Email;

use crate::error::AuthError;
use crate::store::CredentialStore;

pub const MIN_PASSWORD_CHARS: usize = 8;

/// Registration input as received. Every field may be absent; absence is
/// reported by [`validate_registration`].
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A request that passed every check and may be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub email: Email,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// `Some(value)` for a field that is present and not blank.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}

/// Run the registration checks in their fixed order and report the first
/// failure: email present, email free, password present, first name present,
/// last name present, email shape, password length.
pub fn validate_registration(
    request: &RegistrationRequest,
    store: &dyn CredentialStore,
) -> Result<ValidRegistration, AuthError> {
    let email = present(&request.email)
        .map(str::trim)
        .ok_or(AuthError::EmailRequired)?;

    if store.find_by_email(email)?.is_some() {
        return Err(AuthError::EmailTaken);
    }

    let password = present(&request.password).ok_or(AuthError::PasswordRequired)?;
    let first_name = present(&request.first_name)
        .map(str::trim)
        .ok_or(AuthError::FirstNameRequired)?;
    let last_name = present(&request.last_name)
        .map(str::trim)
        .ok_or(AuthError::LastNameRequired)?;

    let email = Email::parse(email).map_err(|_| AuthError::InvalidEmailFormat)?;

    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AuthError::PasswordTooShort);
    }

    Ok(ValidRegistration {
        email,
        password: password.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    })
}
