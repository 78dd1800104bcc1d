use orgdesk_auth::ClaimSet;

/// Principal context for a request: the verified claims of its token.
///
/// Inserted by the auth middleware; handlers behind it can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    claims: ClaimSet,
}

impl PrincipalContext {
    pub fn new(claims: ClaimSet) -> Self {
        Self { claims }
    }

    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }
}
