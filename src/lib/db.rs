use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use log::{debug, info};
use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions},
};

use crate::errors::AcademyError;

/// Opens the store file as a single-connection pool with foreign keys enforced.
///
/// Unless `keep_store` is set, an existing file is removed first so every run
/// starts from an empty store.
pub async fn init_connection(
    db_path: &Path,
    keep_store: bool,
) -> Result<SqlitePool, AcademyError> {
    info!("Connecting to {}", std::path::absolute(db_path)?.display());

    if !keep_store {
        remove_store(db_path)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete)
        .foreign_keys(true);

    // one connection: every statement of a run goes through the same session
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Applies the embedded schema. Tables are created only if absent, so running
/// this against a store that already has them changes nothing.
pub async fn create_schema(pool: &SqlitePool, migrator: &Migrator) -> Result<(), AcademyError> {
    migrator.run(pool).await?;
    info!("Schema is in place");
    Ok(())
}

/// Removes the store file together with a rollback journal a crashed run
/// may have left next to it, so the journal is never replayed into a new store.
fn remove_store(db_path: &Path) -> Result<(), AcademyError> {
    for path in [db_path.to_path_buf(), journal_path(db_path)] {
        if path.exists() {
            debug!("Removing previous {}", path.display());
            std::fs::remove_file(&path)?;
        }
    }
    Ok(())
}

fn journal_path(db_path: &Path) -> PathBuf {
    let mut journal = OsString::from(db_path.as_os_str());
    journal.push("-journal");
    PathBuf::from(journal)
}

/// Number of rows currently stored in `table`.
#[cfg(test)]
pub(crate) async fn count_rows(pool: &SqlitePool, table: &str) -> Result<i64, AcademyError> {
    let query = format!("SELECT COUNT(*) FROM {table}");
    let count: i64 = sqlx::query_scalar(&query).fetch_one(pool).await?;
    Ok(count)
}
