use std::sync::Arc;

use orgdesk_auth::{Argon2PasswordHasher, AuthConfig, AuthService};
use orgdesk_infra::InMemoryCredentialStore;

/// Wire the authentication core to its collaborators.
///
/// Users live in process memory; restarting the server forgets them while
/// previously issued tokens stay valid until they expire.
pub fn build_services(config: &AuthConfig) -> Arc<AuthService> {
    let store = Arc::new(InMemoryCredentialStore::new());
    let hasher = Arc::new(Argon2PasswordHasher::new());

    tracing::info!(
        token_ttl_secs = config.token_ttl().num_seconds(),
        default_role = %config.role_defaults().role,
        default_org_role = %config.role_defaults().org_role,
        "auth services ready"
    );

    Arc::new(AuthService::new(config, store, hasher))
}
