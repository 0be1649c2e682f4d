//! Database connection bootstrap
//!
//! Opens a pooled sea-orm connection from [`DatabaseConfig`] and applies
//! pending migrations when configured to.

use std::time::Duration;

use movie_catalog_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

#[tracing::instrument(skip_all, fields(max_connections = config.max_connections))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout())
        .acquire_timeout(config.connect_timeout())
        .idle_timeout(config.idle_timeout())
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options).await?;
    tracing::info!("Database connected");

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(db)
}

/// Fresh in-memory SQLite database with every migration applied.
///
/// Every pooled SQLite connection would see its own empty memory database,
/// so the pool is pinned to a single connection.
pub async fn memory() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(Duration::from_secs(3600))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Liveness probe for the storage backend
pub async fn ping(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.ping().await
}
