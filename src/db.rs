use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

use crate::migration::Migrator;

/// Create a SeaORM connection pool.
pub async fn create_orm_conn(database_url: &str, max_connections: u32) -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;
    Ok(conn)
}

/// Creates every table and index that is not there yet.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    let pending = Migrator::get_pending_migrations(conn)
        .await
        .context("failed to list pending migrations")?
        .len();

    if pending == 0 {
        tracing::info!("no pending migrations");
        return Ok(());
    }

    Migrator::up(conn, None)
        .await
        .context("failed to run migrations")?;
    tracing::info!(applied = pending, "migrations applied");

    Ok(())
}
