use std::{collections::HashMap, fmt::Debug, hash::Hash};

use log::{debug, info};
use sqlx::{query::Query, sqlite::SqliteArguments, Sqlite, SqlitePool, Transaction};

use crate::errors::AcademyError;

use super::models::{
    CuratorSeed, Dataset, DepartmentSeed, FacultySeed, GroupCuratorSeed, GroupLectureSeed,
    GroupSeed, LectureSeed, TeacherSeed,
};

impl Dataset {
    /// Fixed sample rows every run of the normalized store starts with
    pub fn sample() -> Dataset {
        let database_theory_adams = lecture("B103", "Database Theory", "Samantha Adams");
        let algorithms_wilson = lecture("A205", "Algorithms", "Robert Wilson");
        let database_theory_miller = lecture("B103", "Database Theory", "Jennifer Miller");
        let linear_algebra_taylor = lecture("C301", "Linear Algebra", "David Taylor");
        let quantum_mechanics_adams = lecture("B103", "Quantum Mechanics", "Samantha Adams");

        Dataset {
            faculties: vec![
                FacultySeed {
                    financing: 100000.0,
                    name: "Computer Science",
                },
                FacultySeed {
                    financing: 80000.0,
                    name: "Mathematics",
                },
                FacultySeed {
                    financing: 90000.0,
                    name: "Physics",
                },
            ],
            departments: vec![
                department(50000.0, "Software Engineering", "Computer Science"),
                department(60000.0, "Data Science", "Computer Science"),
                department(40000.0, "Algebra", "Mathematics"),
                department(45000.0, "Mathematical Analysis", "Mathematics"),
                department(40000.0, "Quantum Physics", "Physics"),
            ],
            curators: vec![
                curator("John", "Smith"),
                curator("Emily", "Johnson"),
                curator("Michael", "Brown"),
                curator("Sarah", "Davis"),
            ],
            groups: vec![
                group("P107", 1, "Software Engineering"),
                group("P108", 2, "Software Engineering"),
                group("M201", 3, "Algebra"),
                group("M202", 4, "Mathematical Analysis"),
                group("P501", 5, "Data Science"),
                group("P502", 5, "Data Science"),
            ],
            teachers: vec![
                teacher("Samantha", 50000.0, "Adams"),
                teacher("Robert", 45000.0, "Wilson"),
                teacher("Jennifer", 48000.0, "Miller"),
                teacher("David", 52000.0, "Taylor"),
            ],
            subjects: vec![
                "Database Theory",
                "Algorithms",
                "Linear Algebra",
                "Quantum Mechanics",
            ],
            lectures: vec![
                database_theory_adams,
                algorithms_wilson,
                database_theory_miller,
                linear_algebra_taylor,
                quantum_mechanics_adams,
            ],
            groups_curators: vec![
                group_curator("P107", "John Smith"),
                group_curator("P108", "John Smith"),
                group_curator("M201", "Emily Johnson"),
                group_curator("M202", "Michael Brown"),
                group_curator("P501", "Sarah Davis"),
                group_curator("P502", "Sarah Davis"),
            ],
            groups_lectures: vec![
                group_lecture("P107", database_theory_adams),
                group_lecture("P107", algorithms_wilson),
                group_lecture("P108", database_theory_miller),
                group_lecture("M201", linear_algebra_taylor),
                group_lecture("P501", quantum_mechanics_adams),
                group_lecture("P502", quantum_mechanics_adams),
            ],
        }
    }
}

fn department(financing: f64, name: &'static str, faculty: &'static str) -> DepartmentSeed {
    DepartmentSeed {
        financing,
        name,
        faculty,
    }
}

fn curator(name: &'static str, surname: &'static str) -> CuratorSeed {
    CuratorSeed { name, surname }
}

fn group(name: &'static str, year: i64, department: &'static str) -> GroupSeed {
    GroupSeed {
        name,
        year,
        department,
    }
}

fn teacher(name: &'static str, salary: f64, surname: &'static str) -> TeacherSeed {
    TeacherSeed {
        name,
        salary,
        surname,
    }
}

fn lecture(room: &'static str, subject: &'static str, teacher: &'static str) -> LectureSeed {
    LectureSeed {
        room,
        subject,
        teacher,
    }
}

fn group_curator(group: &'static str, curator: &'static str) -> GroupCuratorSeed {
    GroupCuratorSeed { group, curator }
}

fn group_lecture(group: &'static str, lecture: LectureSeed) -> GroupLectureSeed {
    GroupLectureSeed { group, lecture }
}

/// Identifiers the store assigned to seed rows, looked up by natural key.
struct Ids<K> {
    entity: &'static str,
    ids: HashMap<K, i64>,
}

impl<K: Hash + Eq + Debug> Ids<K> {
    fn new(entity: &'static str) -> Self {
        Ids {
            entity,
            ids: HashMap::new(),
        }
    }

    fn record(&mut self, key: K, id: i64) {
        self.ids.insert(key, id);
    }

    fn resolve(&self, key: &K) -> Result<i64, AcademyError> {
        self.ids
            .get(key)
            .copied()
            .ok_or_else(|| AcademyError::UnknownSeedReference {
                entity: self.entity,
                key: format!("{:?}", key),
            })
    }
}

fn full_name(name: &str, surname: &str) -> String {
    format!("{} {}", name, surname)
}

async fn insert<'q>(
    tx: &mut Transaction<'_, Sqlite>,
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
) -> Result<i64, AcademyError> {
    Ok(query.execute(&mut **tx).await?.last_insert_rowid())
}

/// Inserts parents before children and wires every reference through the
/// identifiers assigned on insertion. Runs in one transaction, so either the
/// whole dataset is stored or nothing is.
pub async fn load(pool: &SqlitePool, dataset: &Dataset) -> Result<(), AcademyError> {
    let mut tx = pool.begin().await?;

    let mut faculties = Ids::new("faculty");
    for faculty in dataset.faculties.iter() {
        let id = insert(
            &mut tx,
            sqlx::query("INSERT INTO Faculties (Financing, Name) VALUES (?1, ?2)")
                .bind(faculty.financing)
                .bind(faculty.name),
        )
        .await?;
        faculties.record(faculty.name, id);
    }
    debug!("Inserted {} faculties", dataset.faculties.len());

    let mut departments = Ids::new("department");
    for department in dataset.departments.iter() {
        let faculty_id = faculties.resolve(&department.faculty)?;
        let id = insert(
            &mut tx,
            sqlx::query("INSERT INTO Departments (Financing, Name, FacultyId) VALUES (?1, ?2, ?3)")
                .bind(department.financing)
                .bind(department.name)
                .bind(faculty_id),
        )
        .await?;
        departments.record(department.name, id);
    }
    debug!("Inserted {} departments", dataset.departments.len());

    let mut curators = Ids::new("curator");
    for curator in dataset.curators.iter() {
        let id = insert(
            &mut tx,
            sqlx::query("INSERT INTO Curators (Name, Surname) VALUES (?1, ?2)")
                .bind(curator.name)
                .bind(curator.surname),
        )
        .await?;
        curators.record(full_name(curator.name, curator.surname), id);
    }
    debug!("Inserted {} curators", dataset.curators.len());

    let mut groups = Ids::new("group");
    for group in dataset.groups.iter() {
        let department_id = departments.resolve(&group.department)?;
        let id = insert(
            &mut tx,
            sqlx::query("INSERT INTO Groups (Name, Year, DepartmentId) VALUES (?1, ?2, ?3)")
                .bind(group.name)
                .bind(group.year)
                .bind(department_id),
        )
        .await?;
        groups.record(group.name, id);
    }
    debug!("Inserted {} groups", dataset.groups.len());

    let mut teachers = Ids::new("teacher");
    for teacher in dataset.teachers.iter() {
        let id = insert(
            &mut tx,
            sqlx::query("INSERT INTO Teachers (Name, Salary, Surname) VALUES (?1, ?2, ?3)")
                .bind(teacher.name)
                .bind(teacher.salary)
                .bind(teacher.surname),
        )
        .await?;
        teachers.record(full_name(teacher.name, teacher.surname), id);
    }
    debug!("Inserted {} teachers", dataset.teachers.len());

    let mut subjects = Ids::new("subject");
    for subject in dataset.subjects.iter().copied() {
        let id = insert(
            &mut tx,
            sqlx::query("INSERT INTO Subjects (Name) VALUES (?1)").bind(subject),
        )
        .await?;
        subjects.record(subject, id);
    }
    debug!("Inserted {} subjects", dataset.subjects.len());

    let mut lectures = Ids::new("lecture");
    for lecture in dataset.lectures.iter() {
        let subject_id = subjects.resolve(&lecture.subject)?;
        let teacher_id = teachers.resolve(&lecture.teacher.to_owned())?;
        let id = insert(
            &mut tx,
            sqlx::query("INSERT INTO Lectures (LectureRoom, SubjectId, TeacherId) VALUES (?1, ?2, ?3)")
                .bind(lecture.room)
                .bind(subject_id)
                .bind(teacher_id),
        )
        .await?;
        lectures.record(*lecture, id);
    }
    debug!("Inserted {} lectures", dataset.lectures.len());

    for link in dataset.groups_curators.iter() {
        let curator_id = curators.resolve(&link.curator.to_owned())?;
        let group_id = groups.resolve(&link.group)?;
        insert(
            &mut tx,
            sqlx::query("INSERT INTO GroupsCurators (CuratorId, GroupId) VALUES (?1, ?2)")
                .bind(curator_id)
                .bind(group_id),
        )
        .await?;
    }
    debug!("Linked {} group curators", dataset.groups_curators.len());

    for link in dataset.groups_lectures.iter() {
        let group_id = groups.resolve(&link.group)?;
        let lecture_id = lectures.resolve(&link.lecture)?;
        insert(
            &mut tx,
            sqlx::query("INSERT INTO GroupsLectures (GroupId, LectureId) VALUES (?1, ?2)")
                .bind(group_id)
                .bind(lecture_id),
        )
        .await?;
    }
    debug!("Linked {} group lectures", dataset.groups_lectures.len());

    tx.commit().await?;
    info!(
        "Seeded {} faculties, {} groups and {} lectures into the normalized store",
        dataset.faculties.len(),
        dataset.groups.len(),
        dataset.lectures.len()
    );
    Ok(())
}
