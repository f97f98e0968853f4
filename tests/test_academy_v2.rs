use academy::academy_v2::{models::Dataset, run_tool::run_on, MIGRATOR};
use academy::db::{create_schema, init_connection};
use academy::errors::ConstraintKind;
use academy::models::Config;

#[tokio::test]
async fn full_run_prints_eleven_reports() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_database(dir.path().join("academy_v2.db"));

    let reports = academy::academy_v2::run_tool::run(&config).await.unwrap();
    assert_eq!(reports.len(), 11);
    assert_eq!(reports[0].title, "All pairs of teachers and groups");
    assert_eq!(
        reports[2].lines.first().map(String::as_str),
        Some("Smith - P107")
    );
    assert_eq!(reports[10].lines.len(), 3);
}

#[tokio::test]
async fn run_on_an_existing_session_reuses_its_schema() {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_connection(&dir.path().join("academy_v2.db"), false)
        .await
        .unwrap();
    create_schema(&pool, &MIGRATOR).await.unwrap();

    let reports = run_on(&pool, &Dataset::sample()).await.unwrap();
    assert_eq!(reports[8].lines, ["P107", "P108", "P501", "P502"]);

    let err = run_on(&pool, &Dataset::sample()).await.unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::Unique));
    pool.close().await;
}
