//! Demonstration routine printing the sample list and two filtered subsets.
//!
//! The binary delegates here so the report can be checked against an
//! in-memory buffer without spawning a process.

use std::fmt::Display;
use std::io::Write;

use tracing::info;

use crate::criteria::{AdminCriteria, UserCriteria};
use crate::error::ReportError;
use crate::filter::{filter_admins, filter_users};
use crate::sample::sample_persons;

const USER_AGE: u32 = 25;
const ADMIN_AGE: u32 = 40;

/// Record counts for each section of the demo report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    /// Records in the full sample list.
    pub total: usize,
    /// Users aged 25.
    pub users: usize,
    /// Admins aged 40.
    pub admins: usize,
}

/// Builds the sample list, filters it, and writes the report to `out`.
///
/// # Errors
///
/// Returns [`ReportError`] if writing to `out` fails.
///
/// # Example
///
/// ```
/// use person_filter::run_demo;
///
/// let mut out = Vec::new();
/// let summary = run_demo(&mut out).expect("in-memory write");
/// let report = String::from_utf8(out).expect("utf-8 report");
///
/// assert_eq!((summary.total, summary.users, summary.admins), (4, 2, 2));
/// assert!(report.starts_with("Filtered Results:\n"));
/// ```
pub fn run_demo(mut out: impl Write) -> Result<DemoSummary, ReportError> {
    let persons = sample_persons();
    let users = filter_users(&persons, &UserCriteria::new().with_age(USER_AGE));
    let admins = filter_admins(&persons, &AdminCriteria::new().with_age(ADMIN_AGE));

    writeln!(out, "Filtered Results:")?;
    writeln!(out, "------------------")?;
    write_section(&mut out, "All Persons:", &persons)?;
    write_section(&mut out, &format!("Users aged {USER_AGE}:"), &users)?;
    writeln!(out)?;
    write_section(&mut out, &format!("Admins aged {ADMIN_AGE}:"), &admins)?;
    out.flush()?;

    let summary = DemoSummary {
        total: persons.len(),
        users: users.len(),
        admins: admins.len(),
    };
    info!(
        total = summary.total,
        users = summary.users,
        admins = summary.admins,
        "demo report written"
    );
    Ok(summary)
}

fn write_section<T: Display>(
    out: &mut impl Write,
    heading: &str,
    records: &[T],
) -> Result<(), ReportError> {
    writeln!(out, "{heading}")?;
    if records.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for record in records {
        writeln!(out, "  {record}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    const EXPECTED_REPORT: &str = "\
Filtered Results:
------------------
All Persons:
  Alice (user, age 25, occupation: Developer)
  Bob (admin, age 40, role: Administrator)
  Charlie (user, age 25, occupation: Designer)
  Dave (admin, age 40, role: CEO)
Users aged 25:
  Alice (user, age 25, occupation: Developer)
  Charlie (user, age 25, occupation: Designer)

Admins aged 40:
  Bob (admin, age 40, role: Administrator)
  Dave (admin, age 40, role: CEO)
";

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_the_full_report() {
        let mut out = Vec::new();
        let summary = run_demo(&mut out).expect("write to buffer");
        assert_eq!(String::from_utf8(out).expect("utf-8"), EXPECTED_REPORT);
        assert_eq!(
            summary,
            DemoSummary {
                total: 4,
                users: 2,
                admins: 2
            }
        );
    }

    #[test]
    fn empty_section_is_marked() {
        let mut out = Vec::new();
        let none: [&str; 0] = [];
        write_section(&mut out, "Nobody:", &none).expect("write to buffer");
        assert_eq!(String::from_utf8(out).expect("utf-8"), "Nobody:\n  (none)\n");
    }

    #[test]
    fn surfaces_write_failures() {
        let result = run_demo(BrokenPipe);
        assert!(matches!(result, Err(ReportError::Write { .. })));
    }
}
