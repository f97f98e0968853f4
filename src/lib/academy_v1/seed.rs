use chrono::NaiveDate;
use log::{debug, info};
use sqlx::SqlitePool;

use crate::errors::AcademyError;

use super::models::{
    Dataset, DepartmentSeed, FacultySeed, GroupSeed, TeacherRoles, TeacherSeed,
};

impl Dataset {
    /// Fixed sample rows every run of the flat store starts with
    #[rustfmt::skip]
    pub fn sample() -> Dataset {
        Dataset {
            departments: vec![
                department(12000.0, "Software Development"),
                department(15000.0, "Computer Science"),
                department(8000.0, "Mathematics"),
                department(30000.0, "Physics"),
                department(9000.0, "Foreign Languages"),
            ],
            faculties: vec![
                FacultySeed {
                    dean: "Dr. Smith",
                    name: "Computer Science",
                },
                FacultySeed {
                    dean: "Dr. Johnson",
                    name: "Engineering",
                },
                FacultySeed {
                    dean: "Dr. Brown",
                    name: "Mathematics",
                },
                FacultySeed {
                    dean: "Dr. Wilson",
                    name: "Physics",
                },
            ],
            groups: vec![
                group("CS-101", 4, 1),
                group("CS-201", 3, 2),
                group("ENG-101", 5, 1),
                group("MATH-301", 2, 3),
                group("PHYS-501", 4, 5),
                group("CS-301", 3, 3),
            ],
            teachers: vec![
                teacher("2000-01-15", TeacherRoles::PROFESSOR, "John", "Professor", 500.0, 2000.0, "Smith"),
                teacher("1999-05-20", TeacherRoles::ASSISTANT, "Alice", "Assistant", 200.0, 800.0, "Johnson"),
                teacher("2005-08-10", TeacherRoles::PROFESSOR, "Robert", "Professor", 600.0, 1200.0, "Brown"),
                teacher("1998-03-01", TeacherRoles::ASSISTANT, "Emily", "Assistant", 550.0, 500.0, "Davis"),
                teacher("2002-11-15", TeacherRoles::ASSISTANT, "Michael", "Assistant", 160.0, 600.0, "Wilson"),
                teacher("1995-09-01", TeacherRoles::NONE, "Sarah", "Senior Lecturer", 300.0, 900.0, "Taylor"),
                teacher("1999-12-10", TeacherRoles::ASSISTANT, "David", "Assistant", 100.0, 400.0, "Clark"),
                teacher("2001-06-20", TeacherRoles::PROFESSOR, "Jennifer", "Professor", 700.0, 1500.0, "White"),
            ],
        }
    }
}

fn department(financing: f64, name: &'static str) -> DepartmentSeed {
    DepartmentSeed { financing, name }
}

fn group(name: &'static str, rating: i64, year: i64) -> GroupSeed {
    GroupSeed { name, rating, year }
}

fn teacher(
    employment_date: &'static str,
    roles: TeacherRoles,
    name: &'static str,
    position: &'static str,
    premium: f64,
    salary: f64,
    surname: &'static str,
) -> TeacherSeed {
    TeacherSeed {
        employment_date,
        roles,
        name,
        position,
        premium,
        salary,
        surname,
    }
}

fn parse_employment_date(value: &str) -> Result<NaiveDate, AcademyError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| AcademyError::InvalidSeedDate {
        value: value.to_owned(),
        source,
    })
}

/// Inserts the whole dataset in one transaction. Nothing is stored if any
/// row is rejected.
pub async fn load(pool: &SqlitePool, dataset: &Dataset) -> Result<(), AcademyError> {
    let mut tx = pool.begin().await?;

    for department in dataset.departments.iter() {
        sqlx::query("INSERT INTO Departments (Financing, Name) VALUES (?1, ?2)")
            .bind(department.financing)
            .bind(department.name)
            .execute(&mut *tx)
            .await?;
    }
    debug!("Inserted {} departments", dataset.departments.len());

    for faculty in dataset.faculties.iter() {
        sqlx::query("INSERT INTO Faculties (Dean, Name) VALUES (?1, ?2)")
            .bind(faculty.dean)
            .bind(faculty.name)
            .execute(&mut *tx)
            .await?;
    }
    debug!("Inserted {} faculties", dataset.faculties.len());

    for group in dataset.groups.iter() {
        sqlx::query("INSERT INTO Groups (Name, Rating, Year) VALUES (?1, ?2, ?3)")
            .bind(group.name)
            .bind(group.rating)
            .bind(group.year)
            .execute(&mut *tx)
            .await?;
    }
    debug!("Inserted {} groups", dataset.groups.len());

    for teacher in dataset.teachers.iter() {
        let employment_date = parse_employment_date(teacher.employment_date)?;
        sqlx::query(
            "INSERT INTO Teachers
                (EmploymentDate, IsAssistant, IsProfessor, Name, Position, Premium, Salary, Surname)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(employment_date)
        .bind(teacher.roles.is_assistant)
        .bind(teacher.roles.is_professor)
        .bind(teacher.name)
        .bind(teacher.position)
        .bind(teacher.premium)
        .bind(teacher.salary)
        .bind(teacher.surname)
        .execute(&mut *tx)
        .await?;
    }
    debug!("Inserted {} teachers", dataset.teachers.len());

    tx.commit().await?;
    info!(
        "Seeded {} rows into the flat store",
        dataset.departments.len()
            + dataset.faculties.len()
            + dataset.groups.len()
            + dataset.teachers.len()
    );
    Ok(())
}
