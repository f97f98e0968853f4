use log::info;
use sqlx::SqlitePool;

use crate::{
    db::{create_schema, init_connection},
    errors::AcademyError,
    models::Config,
    report::Report,
};

use super::{models::Dataset, queries::all_reports, seed, MIGRATOR};

/// Creates the normalized schema, loads `dataset` and produces every report.
pub async fn run_on(pool: &SqlitePool, dataset: &Dataset) -> Result<Vec<Report>, AcademyError> {
    create_schema(pool, &MIGRATOR).await?;
    seed::load(pool, dataset).await?;
    let reports = all_reports(pool).await?;
    info!("Produced {} reports", reports.len());
    Ok(reports)
}

/// One full run against the configured store file. The store is closed
/// whether or not the run succeeds.
pub async fn run(config: &Config) -> Result<Vec<Report>, AcademyError> {
    let pool = init_connection(&config.database_path, config.keep_store).await?;
    let result = run_on(&pool, &Dataset::sample()).await;
    pool.close().await;
    result
}
