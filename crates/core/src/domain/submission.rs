use chrono::{DateTime, SecondsFormat, Utc};

use super::{Attendance, DomainError, Parent, Program, Student, SubmissionId};

/// One household's RSVP.
///
/// Built through [`Submission::new`] the parent and student lists hold 1 to
/// 3 entries. Records read back from storage go through
/// [`Submission::from_stored`], which tolerates empty lists because a stored
/// row may have every slot blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    id: SubmissionId,
    parents: Vec<Parent>,
    students: Vec<Student>,
    attendance: Attendance,
    submission_date: String,
}

impl Submission {
    pub const MAX_PARENTS: usize = 3;
    pub const MAX_STUDENTS: usize = 3;

    pub fn new(
        id: SubmissionId,
        parents: Vec<Parent>,
        students: Vec<Student>,
        attendance: Attendance,
        submission_date: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !(1..=Self::MAX_PARENTS).contains(&parents.len()) {
            return Err(DomainError::ParentCount(parents.len()));
        }
        if !(1..=Self::MAX_STUDENTS).contains(&students.len()) {
            return Err(DomainError::StudentCount(students.len()));
        }

        Ok(Self {
            id,
            parents,
            students,
            attendance,
            submission_date: submission_date.into(),
        })
    }

    /// Assemble a record read back from storage. Lists longer than the slot
    /// count are cut to the first three entries.
    pub fn from_stored(
        id: SubmissionId,
        mut parents: Vec<Parent>,
        mut students: Vec<Student>,
        attendance: Attendance,
        submission_date: impl Into<String>,
    ) -> Self {
        parents.truncate(Self::MAX_PARENTS);
        students.truncate(Self::MAX_STUDENTS);
        Self {
            id,
            parents,
            students,
            attendance,
            submission_date: submission_date.into(),
        }
    }

    pub fn id(&self) -> &SubmissionId {
        &self.id
    }

    pub fn parents(&self) -> &[Parent] {
        &self.parents
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn attendance(&self) -> Attendance {
        self.attendance
    }

    /// Raw ISO-8601 timestamp as stored.
    pub fn submission_date(&self) -> &str {
        &self.submission_date
    }

    /// Parsed timestamp, `None` when the stored value is not RFC 3339.
    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.submission_date.trim())
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc))
    }

    pub fn enrolls_in(&self, program: Program) -> bool {
        self.students
            .iter()
            .any(|student| student.program() == Some(program))
    }
}

/// Current time in the `toISOString` shape, e.g. `2025-11-08T02:30:00.000Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
