//! Credential check for login.

use serde::Deserialize;

use crate::error::AuthError;
use crate::password::PasswordHasher;
use crate::registration::present;
use crate::store::CredentialStore;
use crate::user::UserRecord;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Resolve the user behind `request` and check the password.
///
/// An unknown (or absent, or not even email-shaped) address is
/// [`AuthError::EmailNotRegistered`]; a password mismatch is
/// [`AuthError::WrongPassword`].
pub fn authenticate(
    request: &LoginRequest,
    store: &dyn CredentialStore,
    hasher: &dyn PasswordHasher,
) -> Result<UserRecord, AuthError> {
    let email = present(&request.email)
        .map(str::trim)
        .ok_or(AuthError::EmailNotRegistered)?;

    let user = store
        .find_by_email(email)?
        .ok_or(AuthError::EmailNotRegistered)?;

    let password = request.password.as_deref().unwrap_or_default();
    if !hasher.verify(password, &user.password_digest) {
        return Err(AuthError::WrongPassword);
    }

    Ok(user)
}
