use std::path::Path;

use anyhow::Context;
use rsvp_core::domain::Language;
use serde::{Deserialize, Deserializer};
type Result<T> = anyhow::Result<T>;

/// Placeholder shipped in fresh configurations. An endpoint equal to it is
/// treated as not configured.
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_GOOGLE_APPS_SCRIPT_URL_HERE";

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default, deserialize_with = "language_code")]
    pub language: Language,
    #[serde(default)]
    pub admin: Option<AdminConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            language: Language::default(),
            admin: None,
        }
    }
}

impl ClientConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize client config")
    }

    pub fn is_configured(&self) -> bool {
        endpoint_is_configured(&self.endpoint)
    }
}

/// Dashboard account. Only the SHA-256 digest of the password is stored.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password_sha256: String,
}

pub fn endpoint_is_configured(endpoint: &str) -> bool {
    let endpoint = endpoint.trim();
    !endpoint.is_empty() && endpoint != ENDPOINT_PLACEHOLDER
}

fn default_endpoint() -> String {
    ENDPOINT_PLACEHOLDER.to_string()
}

fn language_code<'de, D>(deserializer: D) -> std::result::Result<Language, D::Error>
where
    D: Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    code.parse().map_err(serde::de::Error::custom)
}
