use log::debug;
use sqlx::SqlitePool;

use crate::{errors::AcademyError, report::Report};

use super::models::{LectureInRoom, Pair};

async fn pairs(pool: &SqlitePool, sql: &'static str) -> Result<Vec<Pair>, AcademyError> {
    let rows: Vec<(String, String)> = sqlx::query_as(sql).fetch_all(pool).await?;
    Ok(rows.into_iter().map(Pair::from).collect())
}

async fn names(pool: &SqlitePool, sql: &'static str) -> Result<Vec<String>, AcademyError> {
    Ok(sqlx::query_scalar(sql).fetch_all(pool).await?)
}

/// Every teacher paired with every group, no filter.
pub async fn teacher_group_pairs(pool: &SqlitePool) -> Result<Vec<Pair>, AcademyError> {
    pairs(
        pool,
        r"SELECT t.Name || ' ' || t.Surname, g.Name
            FROM Teachers t
            CROSS JOIN Groups g
            ORDER BY t.Id, g.Id",
    )
    .await
}

/// Faculties whose departments together get strictly more money than the
/// faculty itself. Faculties without departments never qualify.
pub async fn overspent_faculties(pool: &SqlitePool) -> Result<Vec<String>, AcademyError> {
    names(
        pool,
        r"SELECT f.Name
            FROM Faculties f
            WHERE f.Financing < (
                SELECT SUM(d.Financing)
                FROM Departments d
                WHERE d.FacultyId = f.Id
            )
            ORDER BY f.Id",
    )
    .await
}

pub async fn curators_and_groups(pool: &SqlitePool) -> Result<Vec<Pair>, AcademyError> {
    pairs(
        pool,
        r"SELECT c.Surname, g.Name
            FROM Curators c
            JOIN GroupsCurators gc ON c.Id = gc.CuratorId
            JOIN Groups g ON g.Id = gc.GroupId
            ORDER BY gc.Id",
    )
    .await
}

pub async fn teachers_of_p107(pool: &SqlitePool) -> Result<Vec<String>, AcademyError> {
    names(
        pool,
        r"SELECT DISTINCT t.Name || ' ' || t.Surname
            FROM Teachers t
            JOIN Lectures l ON t.Id = l.TeacherId
            JOIN GroupsLectures gl ON l.Id = gl.LectureId
            JOIN Groups g ON g.Id = gl.GroupId
            WHERE g.Name = 'P107'
            ORDER BY t.Id",
    )
    .await
}

pub async fn teachers_and_faculties(pool: &SqlitePool) -> Result<Vec<Pair>, AcademyError> {
    pairs(
        pool,
        r"SELECT DISTINCT t.Surname, f.Name
            FROM Teachers t
            JOIN Lectures l ON t.Id = l.TeacherId
            JOIN GroupsLectures gl ON l.Id = gl.LectureId
            JOIN Groups g ON g.Id = gl.GroupId
            JOIN Departments d ON d.Id = g.DepartmentId
            JOIN Faculties f ON f.Id = d.FacultyId
            ORDER BY t.Id, f.Id",
    )
    .await
}

pub async fn departments_and_groups(pool: &SqlitePool) -> Result<Vec<Pair>, AcademyError> {
    pairs(
        pool,
        r"SELECT d.Name, g.Name
            FROM Departments d
            JOIN Groups g ON d.Id = g.DepartmentId
            ORDER BY d.Id, g.Id",
    )
    .await
}

pub async fn subjects_of_samantha_adams(pool: &SqlitePool) -> Result<Vec<String>, AcademyError> {
    names(
        pool,
        r"SELECT DISTINCT s.Name
            FROM Subjects s
            JOIN Lectures l ON s.Id = l.SubjectId
            JOIN Teachers t ON t.Id = l.TeacherId
            WHERE t.Name = 'Samantha' AND t.Surname = 'Adams'
            ORDER BY s.Id",
    )
    .await
}

pub async fn departments_teaching_database_theory(
    pool: &SqlitePool,
) -> Result<Vec<String>, AcademyError> {
    names(
        pool,
        r"SELECT DISTINCT d.Name
            FROM Departments d
            JOIN Groups g ON d.Id = g.DepartmentId
            JOIN GroupsLectures gl ON g.Id = gl.GroupId
            JOIN Lectures l ON l.Id = gl.LectureId
            JOIN Subjects s ON s.Id = l.SubjectId
            WHERE s.Name = 'Database Theory'
            ORDER BY d.Id",
    )
    .await
}

pub async fn computer_science_groups(pool: &SqlitePool) -> Result<Vec<String>, AcademyError> {
    names(
        pool,
        r"SELECT g.Name
            FROM Groups g
            JOIN Departments d ON d.Id = g.DepartmentId
            JOIN Faculties f ON f.Id = d.FacultyId
            WHERE f.Name = 'Computer Science'
            ORDER BY g.Id",
    )
    .await
}

pub async fn fifth_year_groups_and_faculties(pool: &SqlitePool) -> Result<Vec<Pair>, AcademyError> {
    pairs(
        pool,
        r"SELECT g.Name, f.Name
            FROM Groups g
            JOIN Departments d ON d.Id = g.DepartmentId
            JOIN Faculties f ON f.Id = d.FacultyId
            WHERE g.Year = 5
            ORDER BY g.Id",
    )
    .await
}

/// One row per lecture held in B103, with every group attending it.
pub async fn lectures_in_b103(pool: &SqlitePool) -> Result<Vec<LectureInRoom>, AcademyError> {
    let rows: Vec<(i64, String, String, String)> = sqlx::query_as(
        r"SELECT
                l.Id AS LectureId,
                t.Name || ' ' || t.Surname AS TeacherName,
                s.Name AS SubjectName,
                g.Name AS GroupName
            FROM Teachers t
            JOIN Lectures l ON t.Id = l.TeacherId
            JOIN Subjects s ON s.Id = l.SubjectId
            JOIN GroupsLectures gl ON l.Id = gl.LectureId
            JOIN Groups g ON g.Id = gl.GroupId
            WHERE l.LectureRoom = 'B103'
            ORDER BY l.Id, g.Id",
    )
    .fetch_all(pool)
    .await?;

    Ok(fold_lecture_groups(rows))
}

/// Collapses consecutive rows of the same lecture into one entry.
fn fold_lecture_groups(rows: Vec<(i64, String, String, String)>) -> Vec<LectureInRoom> {
    let mut lectures: Vec<LectureInRoom> = Vec::new();
    for (lecture_id, teacher, subject, group) in rows {
        match lectures.last_mut() {
            Some(last) if last.lecture_id == lecture_id => last.groups.push(group),
            _ => lectures.push(LectureInRoom {
                lecture_id,
                teacher,
                subject,
                groups: vec![group],
            }),
        }
    }
    lectures
}

/// Every report of the normalized store, in presentation order. The first
/// failing query stops the sequence.
pub async fn all_reports(pool: &SqlitePool) -> Result<Vec<Report>, AcademyError> {
    let reports = vec![
        Report::new(
            "All pairs of teachers and groups",
            &teacher_group_pairs(pool).await?,
        ),
        Report::new(
            "Faculties whose departments' financing exceeds their own",
            &overspent_faculties(pool).await?,
        ),
        Report::new("Group curators and groups", &curators_and_groups(pool).await?),
        Report::new("Teachers lecturing group P107", &teachers_of_p107(pool).await?),
        Report::new(
            "Teacher surnames and faculties",
            &teachers_and_faculties(pool).await?,
        ),
        Report::new("Departments and groups", &departments_and_groups(pool).await?),
        Report::new(
            "Subjects taught by Samantha Adams",
            &subjects_of_samantha_adams(pool).await?,
        ),
        Report::new(
            "Departments where Database Theory is taught",
            &departments_teaching_database_theory(pool).await?,
        ),
        Report::new(
            "Groups of the Computer Science faculty",
            &computer_science_groups(pool).await?,
        ),
        Report::new(
            "Fifth year groups and their faculties",
            &fifth_year_groups_and_faculties(pool).await?,
        ),
        Report::new("Lectures in room B103", &lectures_in_b103(pool).await?),
    ];

    for report in reports.iter() {
        debug!("{}: {} row(s)", report.title, report.lines.len());
    }
    Ok(reports)
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
