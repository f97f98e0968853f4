use log::debug;
use sqlx::SqlitePool;

use crate::{errors::AcademyError, report::Report};

use super::models::{
    DepartmentReversed, FacultyDean, GroupRating, Labelled, SalaryShare, TeacherPay,
    TeacherPosition, TeacherSalary,
};

/// Runs a query selecting a single text column and labels every value.
async fn names(
    pool: &SqlitePool,
    label: &'static str,
    sql: &'static str,
) -> Result<Vec<Labelled>, AcademyError> {
    let rows: Vec<String> = sqlx::query_scalar(sql).fetch_all(pool).await?;
    Ok(rows
        .into_iter()
        .map(|name| Labelled { label, name })
        .collect())
}

pub async fn departments_reversed(pool: &SqlitePool) -> Result<Vec<DepartmentReversed>, AcademyError> {
    Ok(sqlx::query_as("SELECT Name, Financing, Id FROM Departments")
        .fetch_all(pool)
        .await?)
}

pub async fn group_ratings(pool: &SqlitePool) -> Result<Vec<GroupRating>, AcademyError> {
    Ok(sqlx::query_as(
        r#"SELECT Groups.Name AS "Group Name", Groups.Rating AS "Group Rating" FROM Groups"#,
    )
    .fetch_all(pool)
    .await?)
}

/// A zero premium is replaced by 1 so the ratio stays defined.
pub async fn salary_shares(pool: &SqlitePool) -> Result<Vec<SalaryShare>, AcademyError> {
    Ok(sqlx::query_as(
        r"SELECT Surname,
                ROUND(Salary * 100.0 / CASE WHEN Premium = 0 THEN 1 ELSE Premium END, 2)
                    AS SalaryToPremiumPercent,
                ROUND(Salary * 100.0 / (Salary + Premium), 2) AS SalaryToTotalPercent
            FROM Teachers",
    )
    .fetch_all(pool)
    .await?)
}

pub async fn faculty_deans(pool: &SqlitePool) -> Result<Vec<FacultyDean>, AcademyError> {
    Ok(sqlx::query_as("SELECT Name, Dean FROM Faculties")
        .fetch_all(pool)
        .await?)
}

pub async fn well_paid_professors(pool: &SqlitePool) -> Result<Vec<Labelled>, AcademyError> {
    names(
        pool,
        "Surname",
        "SELECT Surname FROM Teachers WHERE IsProfessor = 1 AND Salary > 1050",
    )
    .await
}

pub async fn departments_outside_financing_band(
    pool: &SqlitePool,
) -> Result<Vec<Labelled>, AcademyError> {
    names(
        pool,
        "Department",
        "SELECT Name FROM Departments WHERE Financing < 11000 OR Financing > 25000",
    )
    .await
}

pub async fn faculties_except_computer_science(
    pool: &SqlitePool,
) -> Result<Vec<Labelled>, AcademyError> {
    names(
        pool,
        "Faculty",
        "SELECT Name FROM Faculties WHERE Name != 'Computer Science'",
    )
    .await
}

pub async fn non_professors(pool: &SqlitePool) -> Result<Vec<TeacherPosition>, AcademyError> {
    Ok(
        sqlx::query_as("SELECT Surname, Position FROM Teachers WHERE IsProfessor = 0")
            .fetch_all(pool)
            .await?,
    )
}

pub async fn assistants_with_mid_premium(pool: &SqlitePool) -> Result<Vec<TeacherPay>, AcademyError> {
    Ok(sqlx::query_as(
        r"SELECT Surname, Position, Salary, Premium
            FROM Teachers
            WHERE IsAssistant = 1 AND Premium BETWEEN 160 AND 550",
    )
    .fetch_all(pool)
    .await?)
}

pub async fn assistant_salaries(pool: &SqlitePool) -> Result<Vec<TeacherSalary>, AcademyError> {
    Ok(
        sqlx::query_as("SELECT Surname, Salary FROM Teachers WHERE IsAssistant = 1")
            .fetch_all(pool)
            .await?,
    )
}

/// Dates are stored as ISO text, so plain string comparison orders them.
pub async fn hired_before_2000(pool: &SqlitePool) -> Result<Vec<TeacherPosition>, AcademyError> {
    Ok(sqlx::query_as(
        "SELECT Surname, Position FROM Teachers WHERE EmploymentDate < '2000-01-01'",
    )
    .fetch_all(pool)
    .await?)
}

pub async fn departments_before_software_development(
    pool: &SqlitePool,
) -> Result<Vec<Labelled>, AcademyError> {
    names(
        pool,
        "Department",
        r#"SELECT Name AS "Name of Department"
            FROM Departments
            WHERE Name < 'Software Development'
            ORDER BY Name"#,
    )
    .await
}

pub async fn modestly_paid_assistants(pool: &SqlitePool) -> Result<Vec<Labelled>, AcademyError> {
    names(
        pool,
        "Surname",
        "SELECT Surname FROM Teachers WHERE IsAssistant = 1 AND (Salary + Premium) <= 1200",
    )
    .await
}

pub async fn fifth_year_mid_rated_groups(pool: &SqlitePool) -> Result<Vec<Labelled>, AcademyError> {
    names(
        pool,
        "Group",
        "SELECT Name FROM Groups WHERE Year = 5 AND Rating BETWEEN 2 AND 4",
    )
    .await
}

pub async fn assistants_with_low_pay(pool: &SqlitePool) -> Result<Vec<Labelled>, AcademyError> {
    names(
        pool,
        "Surname",
        "SELECT Surname FROM Teachers WHERE IsAssistant = 1 AND (Salary < 550 OR Premium < 200)",
    )
    .await
}

/// Every report of the flat store, in presentation order. The first failing
/// query stops the sequence.
pub async fn all_reports(pool: &SqlitePool) -> Result<Vec<Report>, AcademyError> {
    let reports = vec![
        Report::new(
            "Departments with fields in reverse order",
            &departments_reversed(pool).await?,
        ),
        Report::new("Group names and ratings", &group_ratings(pool).await?),
        Report::new(
            "Teacher surnames with salary percentages",
            &salary_shares(pool).await?,
        ),
        Report::new("Faculties and their deans", &faculty_deans(pool).await?),
        Report::new(
            "Professors with salary over 1050",
            &well_paid_professors(pool).await?,
        ),
        Report::new(
            "Departments with financing below 11000 or above 25000",
            &departments_outside_financing_band(pool).await?,
        ),
        Report::new(
            "Faculties other than Computer Science",
            &faculties_except_computer_science(pool).await?,
        ),
        Report::new("Teachers who are not professors", &non_professors(pool).await?),
        Report::new(
            "Assistants with premium between 160 and 550",
            &assistants_with_mid_premium(pool).await?,
        ),
        Report::new("Assistant salaries", &assistant_salaries(pool).await?),
        Report::new(
            "Teachers hired before 2000-01-01",
            &hired_before_2000(pool).await?,
        ),
        Report::new(
            "Departments before Software Development, alphabetically",
            &departments_before_software_development(pool).await?,
        ),
        Report::new(
            "Assistants with total pay of at most 1200",
            &modestly_paid_assistants(pool).await?,
        ),
        Report::new(
            "Fifth year groups rated 2 to 4",
            &fifth_year_mid_rated_groups(pool).await?,
        ),
        Report::new(
            "Assistants with salary below 550 or premium below 200",
            &assistants_with_low_pay(pool).await?,
        ),
    ];

    for report in reports.iter() {
        debug!("{}: {} row(s)", report.title, report.lines.len());
    }
    Ok(reports)
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
