use std::fmt;

/// One titled block of report output, a line per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub lines: Vec<String>,
}

impl Report {
    pub fn new<R: fmt::Display>(title: &str, rows: &[R]) -> Self {
        Report {
            title: title.to_owned(),
            lines: rows.iter().map(|row| row.to_string()).collect(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.title)?;
        for line in self.lines.iter() {
            writeln!(f, "   {}", line)?;
        }
        Ok(())
    }
}

const BANNER_WIDTH: usize = 80;

pub fn banner(heading: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{heading}\n{rule}")
}

/// Renders all reports numbered in the order they ran.
pub fn render_all(heading: &str, reports: &[Report]) -> String {
    let mut out = banner(heading);
    out.push('\n');
    for (number, report) in reports.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{}. {}", number + 1, report));
    }
    out
}
