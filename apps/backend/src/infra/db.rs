use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Where the connection points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres(DbProfile),
    /// Private in-memory SQLite; one connection so every query sees the same database
    SqliteMemory,
}

/// Open a connection. Runs no migrations.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let options = match kind {
        DbKind::Postgres(profile) => ConnectOptions::new(db_url(profile)?),
        DbKind::SqliteMemory => {
            let mut opts = ConnectOptions::new("sqlite::memory:");
            opts.max_connections(1).min_connections(1);
            opts
        }
    };

    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind).await?;

    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("Failed to run migrations: {e}")))?;

    info!(?kind, "database ready");
    Ok(conn)
}
