//! Credential persistence contract consumed by the authentication core.

use std::sync::Arc;

use thiserror::Error;

use crate::user::{NewUser, UserRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record with the same email already exists.
    #[error("email already registered")]
    DuplicateEmail,

    /// The backing store could not serve the request.
    #[error("credential store unavailable: {0}")]
    Unavailable(String),
}

/// User persistence as needed by registration and login.
///
/// Implementations must enforce email uniqueness inside `create` itself
/// (case-insensitively, atomically with the insert): callers check for an
/// existing email first, but two concurrent registrations can both pass that
/// check and only the store can reject the second one.
pub trait CredentialStore: Send + Sync {
    /// Case-insensitive lookup by email address.
    fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Insert a new user, failing with [`StoreError::DuplicateEmail`] if the
    /// email is already taken.
    fn create(&self, new_user: NewUser) -> Result<UserRecord, StoreError>;
}

impl<S> CredentialStore for Arc<S>
where
    S: CredentialStore + ?Sized,
{
    fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        (**self).find_by_email(email)
    }

    fn create(&self, new_user: NewUser) -> Result<UserRecord, StoreError> {
        (**self).create(new_user)
    }
}
