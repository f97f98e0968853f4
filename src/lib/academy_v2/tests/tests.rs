use tempfile::TempDir;

use crate::{
    academy_v2::{
        models::{
            Dataset, DepartmentSeed, FacultySeed, GroupLectureSeed, GroupSeed, LectureSeed,
            TeacherSeed,
        },
        seed, MIGRATOR,
    },
    db::{count_rows, create_schema, init_connection},
    errors::{AcademyError, ConstraintKind},
};

use super::*;

async fn empty_store() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_connection(&dir.path().join("academy_v2.db"), false)
        .await
        .unwrap();
    create_schema(&pool, &MIGRATOR).await.unwrap();
    (pool, dir)
}

async fn sample_store() -> (SqlitePool, TempDir) {
    let (pool, dir) = empty_store().await;
    seed::load(&pool, &Dataset::sample()).await.unwrap();
    (pool, dir)
}

fn pair(left: &str, right: &str) -> Pair {
    Pair {
        left: left.to_owned(),
        right: right.to_owned(),
    }
}

fn faculty(financing: f64, name: &'static str) -> FacultySeed {
    FacultySeed { financing, name }
}

fn department(financing: f64, name: &'static str, faculty: &'static str) -> DepartmentSeed {
    DepartmentSeed {
        financing,
        name,
        faculty,
    }
}

fn teachers_and_groups(teachers: usize, groups: usize) -> Dataset {
    const TEACHERS: [&str; 5] = ["Ann", "Ben", "Cid", "Dan", "Eve"];
    const GROUPS: [&str; 4] = ["G1", "G2", "G3", "G4"];

    Dataset {
        faculties: vec![faculty(1000.0, "Science")],
        departments: vec![department(500.0, "Biology", "Science")],
        groups: GROUPS[..groups]
            .iter()
            .map(|&name| GroupSeed {
                name,
                year: 1,
                department: "Biology",
            })
            .collect(),
        teachers: TEACHERS[..teachers]
            .iter()
            .map(|&name| TeacherSeed {
                name,
                salary: 1000.0,
                surname: "Doe",
            })
            .collect(),
        ..Dataset::default()
    }
}

#[tokio::test]
async fn schema_can_be_applied_twice() {
    let (pool, _dir) = empty_store().await;
    create_schema(&pool, &MIGRATOR).await.unwrap();
    assert_eq!(count_rows(&pool, "GroupsLectures").await.unwrap(), 0);
}

#[tokio::test]
async fn sample_references_all_resolve() {
    let (pool, _dir) = sample_store().await;
    assert_eq!(count_rows(&pool, "Departments").await.unwrap(), 5);
    assert_eq!(count_rows(&pool, "Lectures").await.unwrap(), 5);
    assert_eq!(count_rows(&pool, "GroupsCurators").await.unwrap(), 6);
    assert_eq!(count_rows(&pool, "GroupsLectures").await.unwrap(), 6);

    let dangling: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pragma_foreign_key_check")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(dangling, 0);
}

#[tokio::test]
async fn department_with_missing_faculty_is_rejected() {
    let (pool, _dir) = sample_store().await;
    let err: AcademyError = sqlx::query(
        "INSERT INTO Departments (Financing, Name, FacultyId) VALUES (1000, 'Astronomy', 99)",
    )
    .execute(&pool)
    .await
    .unwrap_err()
    .into();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
}

#[tokio::test]
async fn junction_row_with_missing_curator_is_rejected() {
    let (pool, _dir) = sample_store().await;
    let err: AcademyError =
        sqlx::query("INSERT INTO GroupsCurators (CuratorId, GroupId) VALUES (5, 1)")
            .execute(&pool)
            .await
            .unwrap_err()
            .into();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
}

#[tokio::test]
async fn seed_with_unknown_faculty_is_rejected() {
    let (pool, _dir) = empty_store().await;
    let dataset = Dataset {
        faculties: vec![faculty(1000.0, "Science")],
        departments: vec![department(100.0, "Astronomy", "Sciences")],
        ..Dataset::default()
    };
    let err = seed::load(&pool, &dataset).await.unwrap_err();
    match err {
        AcademyError::UnknownSeedReference { entity, key } => {
            assert_eq!(entity, "faculty");
            assert_eq!(key, "\"Sciences\"");
        }
        other => panic!("unexpected error {other}"),
    }
    assert_eq!(count_rows(&pool, "Faculties").await.unwrap(), 0);
}

#[tokio::test]
async fn lecture_with_unknown_teacher_is_rejected() {
    let (pool, _dir) = empty_store().await;
    let dataset = Dataset {
        subjects: vec!["Optics"],
        lectures: vec![LectureSeed {
            room: "D1",
            subject: "Optics",
            teacher: "Nobody Known",
        }],
        ..Dataset::default()
    };
    let err = seed::load(&pool, &dataset).await.unwrap_err();
    assert!(matches!(
        err,
        AcademyError::UnknownSeedReference {
            entity: "teacher",
            ..
        }
    ));
}

#[tokio::test]
async fn year_outside_one_to_five_is_rejected() {
    let (pool, _dir) = empty_store().await;
    let mut dataset = teachers_and_groups(0, 1);
    dataset.groups[0].year = 6;
    let err = seed::load(&pool, &dataset).await.unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::Check));
}

#[tokio::test]
async fn cross_join_pairs_every_teacher_with_every_group() {
    for (teachers, groups) in [(3, 2), (5, 4), (1, 0)] {
        let (pool, _dir) = empty_store().await;
        seed::load(&pool, &teachers_and_groups(teachers, groups))
            .await
            .unwrap();
        let rows = teacher_group_pairs(&pool).await.unwrap();
        assert_eq!(rows.len(), teachers * groups);
    }
}

#[tokio::test]
async fn cross_join_on_sample_data() {
    let (pool, _dir) = sample_store().await;
    let rows = teacher_group_pairs(&pool).await.unwrap();
    assert_eq!(rows.len(), 4 * 6);
    assert_eq!(rows[0], pair("Samantha Adams", "P107"));
    assert_eq!(rows[23], pair("David Taylor", "P502"));
    assert_eq!(rows[0].to_string(), "Samantha Adams - P107");
}

#[tokio::test]
async fn overspent_faculty_needs_strictly_larger_sum() {
    let (pool, _dir) = empty_store().await;
    let dataset = Dataset {
        faculties: vec![
            faculty(100000.0, "Engineering"),
            faculty(90000.0, "Humanities"),
            faculty(50000.0, "Arts"),
            faculty(70000.0, "Law"),
        ],
        departments: vec![
            department(60000.0, "Robotics", "Engineering"),
            department(50000.0, "Electronics", "Engineering"),
            department(40000.0, "History", "Humanities"),
            department(30000.0, "Civil Law", "Law"),
            department(40000.0, "Criminal Law", "Law"),
        ],
        ..Dataset::default()
    };
    seed::load(&pool, &dataset).await.unwrap();

    // Law is exactly balanced, Arts has no departments at all
    assert_eq!(overspent_faculties(&pool).await.unwrap(), ["Engineering"]);
}

#[tokio::test]
async fn overspent_faculties_on_sample_data() {
    let (pool, _dir) = sample_store().await;
    assert_eq!(
        overspent_faculties(&pool).await.unwrap(),
        ["Computer Science", "Mathematics"]
    );
}

#[tokio::test]
async fn curators_follow_named_assignments() {
    let (pool, _dir) = sample_store().await;
    assert_eq!(
        curators_and_groups(&pool).await.unwrap(),
        [
            pair("Smith", "P107"),
            pair("Smith", "P108"),
            pair("Johnson", "M201"),
            pair("Brown", "M202"),
            pair("Davis", "P501"),
            pair("Davis", "P502"),
        ]
    );
}

#[tokio::test]
async fn join_reports_match_sample_data() {
    let (pool, _dir) = sample_store().await;

    assert_eq!(
        teachers_of_p107(&pool).await.unwrap(),
        ["Samantha Adams", "Robert Wilson"]
    );
    assert_eq!(
        teachers_and_faculties(&pool).await.unwrap(),
        [
            pair("Adams", "Computer Science"),
            pair("Wilson", "Computer Science"),
            pair("Miller", "Computer Science"),
            pair("Taylor", "Mathematics"),
        ]
    );
    assert_eq!(
        departments_and_groups(&pool).await.unwrap(),
        [
            pair("Software Engineering", "P107"),
            pair("Software Engineering", "P108"),
            pair("Data Science", "P501"),
            pair("Data Science", "P502"),
            pair("Algebra", "M201"),
            pair("Mathematical Analysis", "M202"),
        ]
    );
    assert_eq!(
        subjects_of_samantha_adams(&pool).await.unwrap(),
        ["Database Theory", "Quantum Mechanics"]
    );
    assert_eq!(
        departments_teaching_database_theory(&pool).await.unwrap(),
        ["Software Engineering"]
    );
    assert_eq!(
        computer_science_groups(&pool).await.unwrap(),
        ["P107", "P108", "P501", "P502"]
    );
    assert_eq!(
        fifth_year_groups_and_faculties(&pool).await.unwrap(),
        [
            pair("P501", "Computer Science"),
            pair("P502", "Computer Science")
        ]
    );
}

#[tokio::test]
async fn b103_holds_exactly_three_lectures() {
    let (pool, _dir) = sample_store().await;
    let lectures = lectures_in_b103(&pool).await.unwrap();
    assert_eq!(lectures.len(), 3);

    let summary: Vec<(&str, &str)> = lectures
        .iter()
        .map(|l| (l.teacher.as_str(), l.subject.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            ("Samantha Adams", "Database Theory"),
            ("Jennifer Miller", "Database Theory"),
            ("Samantha Adams", "Quantum Mechanics"),
        ]
    );
    assert_eq!(lectures[0].groups, ["P107"]);
    assert_eq!(lectures[1].groups, ["P108"]);
    assert_eq!(lectures[2].groups, ["P501", "P502"]);
    assert_eq!(
        lectures[2].to_string(),
        "Samantha Adams: Quantum Mechanics - P501, P502"
    );
}

#[tokio::test]
async fn lecture_groups_keep_group_order_and_whole_names() {
    let (pool, _dir) = empty_store().await;
    let optics = LectureSeed {
        room: "B103",
        subject: "Optics",
        teacher: "Ann Doe",
    };
    let mut dataset = teachers_and_groups(1, 0);
    dataset.groups = ["Z, late", "A"]
        .into_iter()
        .map(|name| GroupSeed {
            name,
            year: 2,
            department: "Biology",
        })
        .collect();
    dataset.subjects = vec!["Optics"];
    dataset.lectures = vec![optics];
    // linked in the opposite order to the groups themselves
    dataset.groups_lectures = vec![
        GroupLectureSeed {
            group: "A",
            lecture: optics,
        },
        GroupLectureSeed {
            group: "Z, late",
            lecture: optics,
        },
    ];
    seed::load(&pool, &dataset).await.unwrap();

    let lectures = lectures_in_b103(&pool).await.unwrap();
    assert_eq!(lectures.len(), 1);
    assert_eq!(lectures[0].groups, ["Z, late", "A"]);
    assert_eq!(lectures[0].to_string(), "Ann Doe: Optics - Z, late, A");
}

#[tokio::test]
async fn all_reports_run_in_order() {
    let (pool, _dir) = sample_store().await;
    let reports = all_reports(&pool).await.unwrap();
    assert_eq!(reports.len(), 11);
    assert_eq!(reports[0].lines.len(), 24);
    assert_eq!(
        reports[1].lines,
        ["Computer Science", "Mathematics"]
    );
    assert_eq!(reports[10].title, "Lectures in room B103");
    assert_eq!(reports[10].lines[0], "Samantha Adams: Database Theory - P107");
}
