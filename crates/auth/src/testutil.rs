//! Minimal credential store for unit tests.

use std::sync::Mutex;

use orgdesk_core::{Email, UserId};

use crate::RoleDefaults;
use crate::store::{CredentialStore, StoreError};
use crate::user::{NewUser, UserRecord};

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    users: Mutex<Vec<UserRecord>>,
    /// When set, every call fails with `Unavailable`.
    pub(crate) down: bool,
}

impl MemoryStore {
    pub(crate) fn unavailable() -> Self {
        Self {
            down: true,
            ..Self::default()
        }
    }

    pub(crate) fn insert(&self, email: &str) -> UserRecord {
        self.insert_with_digest(email, "")
    }

    pub(crate) fn insert_with_digest(&self, email: &str, digest: &str) -> UserRecord {
        let new_user = NewUser {
            email: Email::parse(email).unwrap(),
            password_digest: digest.to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            roles: RoleDefaults::default(),
        };
        self.create(new_user).unwrap()
    }

    pub(crate) fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl CredentialStore for MemoryStore {
    fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        if self.down {
            return Err(StoreError::Unavailable("store is down".to_string()));
        }
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.email.as_str().eq_ignore_ascii_case(email.trim()))
            .cloned())
    }

    fn create(&self, new_user: NewUser) -> Result<UserRecord, StoreError> {
        if self.down {
            return Err(StoreError::Unavailable("store is down".to_string()));
        }
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email.normalized() == new_user.email.normalized()) {
            return Err(StoreError::DuplicateEmail);
        }
        let record = new_user.into_record(UserId::new(users.len() as i64 + 1));
        users.push(record.clone());
        Ok(record)
    }
}

/// Reports every email as free but rejects every insert as a duplicate, as
/// if a concurrent registration won the race between lookup and create.
#[derive(Debug, Default)]
pub(crate) struct RacingStore;

impl CredentialStore for RacingStore {
    fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(None)
    }

    fn create(&self, _new_user: NewUser) -> Result<UserRecord, StoreError> {
        Err(StoreError::DuplicateEmail)
    }
}
