use rsvp_core::auth::{CredentialStore, NoCredentials};
use sha2::{Digest, Sha256};

use crate::config::{AdminConfig, ClientConfig};

/// Single admin account read from configuration.
#[derive(Debug, Clone)]
pub struct ConfiguredCredentials {
    username: String,
    password_sha256: String,
}

impl ConfiguredCredentials {
    pub fn new(admin: &AdminConfig) -> Self {
        Self {
            username: admin.username.clone(),
            password_sha256: admin.password_sha256.trim().to_ascii_lowercase(),
        }
    }
}

impl CredentialStore for ConfiguredCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        let digest = format!("{:x}", Sha256::digest(password.as_bytes()));
        username == self.username && digest == self.password_sha256
    }
}

/// Credential store for `config`; logins are refused when no `[admin]`
/// section is present.
pub fn credentials_from_config(config: &ClientConfig) -> Box<dyn CredentialStore> {
    match &config.admin {
        Some(admin) => Box::new(ConfiguredCredentials::new(admin)),
        None => Box::new(NoCredentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // sha256("password")
    const DIGEST: &str = "5E884898DA28047151D0E56F8DC6292773603D0D6AABBDD62A11EF721D1542D8";

    #[test]
    fn verifies_against_the_configured_digest() {
        let credentials = ConfiguredCredentials::new(&AdminConfig {
            username: "admin".to_string(),
            password_sha256: DIGEST.to_string(),
        });

        assert!(credentials.verify("admin", "password"));
        assert!(!credentials.verify("admin", "Password"));
        assert!(!credentials.verify("Admin", "password"));
    }

    #[test]
    fn missing_admin_section_refuses_everyone() {
        let credentials = credentials_from_config(&ClientConfig::default());
        assert!(!credentials.verify("", ""));
        assert!(!credentials.verify("admin", "password"));
    }
}
