use academy::academy_v1::run_tool::run;
use academy::errors::ConstraintKind;
use academy::models::Config;
use academy::report::render_all;

#[tokio::test]
async fn full_run_prints_fifteen_reports() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_database(dir.path().join("academy_v1.db"));

    let reports = run(&config).await.unwrap();
    assert_eq!(reports.len(), 15);
    assert!(config.database_path.exists());

    let text = render_all("ACADEMY", &reports);
    assert!(text.contains("\n4. Faculties and their deans:\n   The dean of faculty Computer Science is Dr. Smith.\n"));
    assert!(text.contains("Surname: Smith, Salary/Premium: 400.00%, Salary/Total: 80.00%"));
}

#[tokio::test]
async fn rerun_starts_from_a_fresh_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_database(dir.path().join("academy_v1.db"));

    let first = run(&config).await.unwrap();
    let second = run(&config).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn kept_store_cannot_be_seeded_twice() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::with_database(dir.path().join("academy_v1.db"));
    run(&config).await.unwrap();

    config.keep_store = true;
    let err = run(&config).await.unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::Unique));
}
