use std::collections::HashMap;
use std::sync::RwLock;

use orgdesk_auth::{CredentialStore, NewUser, StoreError, UserRecord};
use orgdesk_core::UserId;

#[derive(Debug, Default)]
struct Users {
    /// Keyed by case-folded email.
    by_email: HashMap<String, UserRecord>,
    last_id: i64,
}

/// In-memory credential store for tests/dev.
///
/// `create` checks for an existing email and inserts under one write lock, so
/// concurrent registrations of the same address yield exactly one record.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    inner: RwLock<Users>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|u| u.by_email.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("credential store lock poisoned".to_string())
}

impl CredentialStore for InMemoryCredentialStore {
    fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.inner.read().map_err(poisoned)?;
        Ok(users.by_email.get(&email.trim().to_ascii_lowercase()).cloned())
    }

    fn create(&self, new_user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.inner.write().map_err(poisoned)?;

        let key = new_user.email.normalized();
        if users.by_email.contains_key(&key) {
            tracing::debug!("duplicate email rejected at insert");
            return Err(StoreError::DuplicateEmail);
        }

        users.last_id += 1;
        let record = new_user.into_record(UserId::new(users.last_id));
        users.by_email.insert(key, record.clone());
        Ok(record)
    }
}
