//! Integration tests for the full authentication pipeline.
//!
//! Tests: AuthService → InMemoryCredentialStore → TokenIssuer → TokenVerifier
//!
//! Verifies:
//! - Registered users can log in and their tokens verify
//! - Email uniqueness holds under concurrent registration

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use argon2::Params;
    use chrono::Utc;

    use orgdesk_auth::{
        Argon2PasswordHasher, AuthConfig, AuthError, AuthService, LoginRequest,
        RegistrationRequest, TokenHeaders,
    };

    use crate::InMemoryCredentialStore;

    fn setup() -> (AuthService, Arc<InMemoryCredentialStore>) {
        let config = AuthConfig::new("integration-secret").unwrap();
        let store = Arc::new(InMemoryCredentialStore::new());
        let params = Params::new(Params::MIN_M_COST, 1, 1, None).unwrap();
        let hasher = Arc::new(Argon2PasswordHasher::with_params(params));
        (AuthService::new(&config, store.clone(), hasher), store)
    }

    fn registration(email: &str) -> RegistrationRequest {
        RegistrationRequest {
            email: Some(email.to_string()),
            password: Some("12345678".to_string()),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
        }
    }

    #[test]
    fn register_login_and_verify() {
        let (service, store) = setup();
        let now = Utc::now();

        service.register(&registration("jonhdoe@test.com"), now).unwrap();
        assert_eq!(store.len(), 1);

        let token = service
            .login(
                &LoginRequest {
                    email: Some("jonhdoe@test.com".to_string()),
                    password: Some("12345678".to_string()),
                },
                now,
            )
            .unwrap();

        let bearer = format!("Bearer {token}");
        let claims = service
            .check_state(TokenHeaders::authorization(&bearer), now)
            .unwrap();
        assert_eq!(claims.email, "jonhdoe@test.com");
        assert_eq!(claims.name, "John Doe");
        assert_eq!(claims.id.get(), 1);
    }

    #[test]
    fn concurrent_registrations_of_one_email() {
        let (service, store) = setup();
        let now = Utc::now();

        let results: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| service.register(&registration("race@test.com"), now)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(
            results
                .iter()
                .filter_map(|r| r.as_ref().err())
                .all(|e| *e == AuthError::EmailTaken)
        );
        assert_eq!(store.len(), 1);
    }
}
