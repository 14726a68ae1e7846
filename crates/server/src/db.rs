use std::time::Duration;

use anyhow::Context;
use rsvp_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Lifetime given to the single in-memory connection. The pool's own
/// defaults recycle connections after minutes, which would drop the database.
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(u32::MAX as u64);

pub fn connect_options(database_url: &str) -> ConnectOptions {
    let mut options = ConnectOptions::new(database_url);
    // Each connection to `sqlite::memory:` opens its own empty database, so
    // the pool must hold exactly one and never drop it.
    if database_url.contains(":memory:") {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(MEMORY_CONNECTION_LIFETIME)
            .max_lifetime(MEMORY_CONNECTION_LIFETIME);
    }
    options
}

pub async fn init_pool_and_migrate(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(database_url))
        .await
        .with_context(|| format!("failed to connect to {database_url}"))?;

    Migrator::up(&db, None)
        .await
        .context("failed to run migrations")?;

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_pool_keeps_its_only_connection() {
        let options = connect_options("sqlite::memory:");

        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_min_connections(), Some(1));
        assert_eq!(options.get_idle_timeout(), Some(MEMORY_CONNECTION_LIFETIME));
        assert_eq!(options.get_max_lifetime(), Some(MEMORY_CONNECTION_LIFETIME));
        assert!(MEMORY_CONNECTION_LIFETIME > Duration::from_secs(60 * 60 * 24 * 365));
    }

    #[test]
    fn test_file_database_uses_pool_defaults() {
        let options = connect_options("sqlite://rsvp.db?mode=rwc");

        assert_eq!(options.get_max_connections(), None);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
    }
}
