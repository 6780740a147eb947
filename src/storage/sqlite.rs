//! SQLite pool construction and schema setup.
//!
//! The pool is built lazily so the process can come up even when the schema
//! could not be created; each later operation then fails individually and is
//! surfaced to the caller by the HTTP layer.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Opens a lazy connection pool over the database file, creating the file on
/// first use if it does not exist yet.
pub fn open_pool(path: &Path) -> SqlitePool {
    if !path.exists() {
        info!(path = %path.display(), "database file not found, it will be created");
    }
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(options)
}

/// Idempotent schema setup for the two tables.
pub async fn ensure_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS produits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nom TEXT NOT NULL,
            prix REAL NOT NULL,
            date TEXT NOT NULL,
            id_utilisateur INTEGER
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS utilisateurs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nom TEXT NOT NULL,
            prenom TEXT NOT NULL,
            email TEXT NOT NULL,
            mot_de_passe TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
