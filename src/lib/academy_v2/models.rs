use std::fmt;

/// Seed rows refer to each other by name. Identifiers are whatever the store
/// assigns on insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct FacultySeed {
    pub financing: f64,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSeed {
    pub financing: f64,
    pub name: &'static str,
    pub faculty: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CuratorSeed {
    pub name: &'static str,
    pub surname: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupSeed {
    pub name: &'static str,
    pub year: i64,
    pub department: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeacherSeed {
    pub name: &'static str,
    pub salary: f64,
    pub surname: &'static str,
}

/// A lecture has no natural name, so the triple itself identifies it.
/// `teacher` is the full name, e.g. `"Samantha Adams"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LectureSeed {
    pub room: &'static str,
    pub subject: &'static str,
    pub teacher: &'static str,
}

/// `curator` is the curator's full name
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCuratorSeed {
    pub group: &'static str,
    pub curator: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupLectureSeed {
    pub group: &'static str,
    pub lecture: LectureSeed,
}

/// Rows loaded into a fresh normalized store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub faculties: Vec<FacultySeed>,
    pub departments: Vec<DepartmentSeed>,
    pub curators: Vec<CuratorSeed>,
    pub groups: Vec<GroupSeed>,
    pub teachers: Vec<TeacherSeed>,
    pub subjects: Vec<&'static str>,
    pub lectures: Vec<LectureSeed>,
    pub groups_curators: Vec<GroupCuratorSeed>,
    pub groups_lectures: Vec<GroupLectureSeed>,
}

/// Two related names, rendered as `left - right`
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub left: String,
    pub right: String,
}

impl From<(String, String)> for Pair {
    fn from((left, right): (String, String)) -> Self {
        Pair { left, right }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.left, self.right)
    }
}

/// A lecture with the groups attending it, ordered by group id
#[derive(Debug, Clone, PartialEq)]
pub struct LectureInRoom {
    pub lecture_id: i64,
    pub teacher: String,
    pub subject: String,
    pub groups: Vec<String>,
}

impl fmt::Display for LectureInRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {}",
            self.teacher,
            self.subject,
            self.groups.join(", ")
        )
    }
}
