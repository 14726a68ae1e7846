use std::env;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
type Result<T> = anyhow::Result<T>;

pub const DEFAULT_CONFIG_FILE: &str = "rsvp-server.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            database_url: default_database_url(),
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize server config")
    }

    /// Reads `rsvp-server.toml` when it exists, then applies `DATABASE_URL`
    /// and `RSVP_BIND_ADDR` from the environment.
    pub fn load() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        let config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        config.with_overrides(env::var("DATABASE_URL").ok(), env::var("RSVP_BIND_ADDR").ok())
    }

    pub fn with_overrides(
        mut self,
        database_url: Option<String>,
        bind_addr: Option<String>,
    ) -> Result<Self> {
        if let Some(database_url) = database_url {
            self.database_url = database_url;
        }
        if let Some(bind_addr) = bind_addr {
            self.bind_addr = bind_addr
                .parse()
                .with_context(|| format!("invalid RSVP_BIND_ADDR: {bind_addr}"))?;
        }
        Ok(self)
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = ServerConfig::from_str(
            r#"
bind_addr = "0.0.0.0:9000"
database_url = "sqlite://rsvp.db?mode=rwc"
"#,
        )
        .expect("config should parse");

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.database_url, "sqlite://rsvp.db?mode=rwc");
    }

    #[test]
    fn test_defaults_and_overrides() {
        let config = ServerConfig::from_str("").expect("empty config should parse");
        assert_eq!(config.bind_addr, default_bind_addr());
        assert_eq!(config.database_url, "sqlite::memory:");

        let config = config
            .with_overrides(
                Some("sqlite://other.db".to_string()),
                Some("127.0.0.1:3000".to_string()),
            )
            .expect("overrides should apply");
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_bad_bind_addr_is_rejected() {
        assert!(
            ServerConfig::default()
                .with_overrides(None, Some("not an address".to_string()))
                .is_err()
        );
    }
}
