//! Admin credential check.

/// Source of truth for dashboard logins. Implementations read their secret
/// from configuration; nothing is compiled in.
pub trait CredentialStore: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Used when no admin account is configured: every login is refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialStore for NoCredentials {
    fn verify(&self, _username: &str, _password: &str) -> bool {
        false
    }
}
