//! One-way password hashing (Argon2id, PHC string digests).

use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(String);

/// Hash and verify plaintext passwords.
///
/// `verify` is a predicate: a wrong password is `false`, never an error.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordHashError>;

    fn verify(&self, plaintext: &str, digest: &str) -> bool;
}

/// Argon2id hasher with a fresh random salt per call.
///
/// The salt and cost parameters are embedded in the digest, so digests made
/// with different parameters still verify.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn salt() -> Result<SaltString, PasswordHashError> {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    SaltString::encode_b64(&bytes).map_err(|e| PasswordHashError(e.to_string()))
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordHashError> {
        use argon2::PasswordHasher as _;

        let salt = salt()?;
        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| PasswordHashError(e.to_string()))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        PasswordHash::new(digest)
            .map(|hash| {
                self.argon2
                    .verify_password(plaintext.as_bytes(), &hash)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
pub(crate) fn cheap_hasher() -> Argon2PasswordHasher {
    let params = Params::new(Params::MIN_M_COST, 1, 1, None).unwrap();
    Argon2PasswordHasher::with_params(params)
}
