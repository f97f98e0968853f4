use std::fmt;

/// Academic roles of a teacher.
///
/// The flags are independent: a teacher may be both an assistant and a
/// professor, or neither. Nothing in the store forbids either combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeacherRoles {
    pub is_assistant: bool,
    pub is_professor: bool,
}

impl TeacherRoles {
    pub const NONE: TeacherRoles = TeacherRoles {
        is_assistant: false,
        is_professor: false,
    };
    pub const ASSISTANT: TeacherRoles = TeacherRoles {
        is_assistant: true,
        is_professor: false,
    };
    pub const PROFESSOR: TeacherRoles = TeacherRoles {
        is_assistant: false,
        is_professor: true,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSeed {
    pub financing: f64,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacultySeed {
    pub dean: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupSeed {
    pub name: &'static str,
    pub rating: i64,
    pub year: i64,
}

/// `employment_date` is an ISO date (`YYYY-MM-DD`), checked before insertion
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherSeed {
    pub employment_date: &'static str,
    pub roles: TeacherRoles,
    pub name: &'static str,
    pub position: &'static str,
    pub premium: f64,
    pub salary: f64,
    pub surname: &'static str,
}

/// Rows loaded into a fresh flat store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub departments: Vec<DepartmentSeed>,
    pub faculties: Vec<FacultySeed>,
    pub groups: Vec<GroupSeed>,
    pub teachers: Vec<TeacherSeed>,
}

#[derive(Debug, sqlx::FromRow, PartialEq)]
pub struct DepartmentReversed {
    #[sqlx(rename = "Name")]
    pub name: String,
    #[sqlx(rename = "Financing")]
    pub financing: f64,
    #[sqlx(rename = "Id")]
    pub id: i64,
}

impl fmt::Display for DepartmentReversed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Financing: {:.2}, Id: {}",
            self.name, self.financing, self.id
        )
    }
}

#[derive(Debug, sqlx::FromRow, PartialEq)]
pub struct GroupRating {
    #[sqlx(rename = "Group Name")]
    pub name: String,
    #[sqlx(rename = "Group Rating")]
    pub rating: i64,
}

impl fmt::Display for GroupRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group: {}, Rating: {}", self.name, self.rating)
    }
}

/// Salary as a percentage of the premium and of the total pay
#[derive(Debug, sqlx::FromRow, PartialEq)]
pub struct SalaryShare {
    #[sqlx(rename = "Surname")]
    pub surname: String,
    #[sqlx(rename = "SalaryToPremiumPercent")]
    pub salary_to_premium: f64,
    #[sqlx(rename = "SalaryToTotalPercent")]
    pub salary_to_total: f64,
}

impl fmt::Display for SalaryShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Surname: {}, Salary/Premium: {:.2}%, Salary/Total: {:.2}%",
            self.surname, self.salary_to_premium, self.salary_to_total
        )
    }
}

#[derive(Debug, sqlx::FromRow, PartialEq)]
pub struct FacultyDean {
    #[sqlx(rename = "Name")]
    pub faculty: String,
    #[sqlx(rename = "Dean")]
    pub dean: String,
}

impl fmt::Display for FacultyDean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The dean of faculty {} is {}.", self.faculty, self.dean)
    }
}

#[derive(Debug, sqlx::FromRow, PartialEq)]
pub struct TeacherPosition {
    #[sqlx(rename = "Surname")]
    pub surname: String,
    #[sqlx(rename = "Position")]
    pub position: String,
}

impl fmt::Display for TeacherPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Surname: {}, Position: {}", self.surname, self.position)
    }
}

#[derive(Debug, sqlx::FromRow, PartialEq)]
pub struct TeacherPay {
    #[sqlx(rename = "Surname")]
    pub surname: String,
    #[sqlx(rename = "Position")]
    pub position: String,
    #[sqlx(rename = "Salary")]
    pub salary: f64,
    #[sqlx(rename = "Premium")]
    pub premium: f64,
}

impl fmt::Display for TeacherPay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Surname: {}, Position: {}, Salary: {:.2}, Premium: {:.2}",
            self.surname, self.position, self.salary, self.premium
        )
    }
}

#[derive(Debug, sqlx::FromRow, PartialEq)]
pub struct TeacherSalary {
    #[sqlx(rename = "Surname")]
    pub surname: String,
    #[sqlx(rename = "Salary")]
    pub salary: f64,
}

impl fmt::Display for TeacherSalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Surname: {}, Salary: {:.2}", self.surname, self.salary)
    }
}

/// A single labelled name, e.g. `Department: Physics`
#[derive(Debug, PartialEq)]
pub struct Labelled {
    pub label: &'static str,
    pub name: String,
}

impl fmt::Display for Labelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.name)
    }
}
