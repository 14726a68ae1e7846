//! RSVP form state: parent/student lists, attendance choice and the submit
//! lifecycle.

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{
    Attendance, DomainError, Parent, ParentField, PersonId, Program, Student, StudentField,
    Submission, SubmissionId, timestamp_now,
};
use crate::store::{StoreError, SubmissionStore};

/// A required field that blocks submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    AttendancePending,
    ParentName(PersonId),
    ParentPhone(PersonId),
    StudentName(PersonId),
    StudentProgram(PersonId),
    StudentClass(PersonId),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("form is incomplete ({} missing field(s))", .0.len())]
    Incomplete(Vec<ValidationIssue>),
    #[error("a submission is already in progress")]
    Busy,
    #[error("no form entry with id {0}")]
    UnknownEntry(PersonId),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Owned state of the RSVP form. Always holds 1 to 3 parents and 1 to 3
/// students.
#[derive(Debug, Clone)]
pub struct FormController {
    parents: Vec<Parent>,
    students: Vec<Student>,
    attendance: Attendance,
    submitting: bool,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            parents: vec![Parent::blank()],
            students: vec![Student::blank()],
            attendance: Attendance::Pending,
            submitting: false,
        }
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

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn can_add_parent(&self) -> bool {
        self.parents.len() < Submission::MAX_PARENTS
    }

    pub fn can_add_student(&self) -> bool {
        self.students.len() < Submission::MAX_STUDENTS
    }

    /// Appends a blank parent. Returns `false` when three are already
    /// listed.
    pub fn add_parent(&mut self) -> bool {
        if !self.can_add_parent() {
            return false;
        }
        self.parents.push(Parent::blank());
        true
    }

    pub fn add_student(&mut self) -> bool {
        if !self.can_add_student() {
            return false;
        }
        self.students.push(Student::blank());
        true
    }

    /// Removes the parent with `id`. The last remaining parent stays.
    pub fn remove_parent(&mut self, id: &PersonId) -> bool {
        if self.parents.len() <= 1 {
            return false;
        }
        let before = self.parents.len();
        self.parents.retain(|parent| &parent.id != id);
        self.parents.len() != before
    }

    pub fn remove_student(&mut self, id: &PersonId) -> bool {
        if self.students.len() <= 1 {
            return false;
        }
        let before = self.students.len();
        self.students.retain(|student| &student.id != id);
        self.students.len() != before
    }

    fn parent_mut(&mut self, id: &PersonId) -> Result<&mut Parent, FormError> {
        self.parents
            .iter_mut()
            .find(|parent| &parent.id == id)
            .ok_or_else(|| FormError::UnknownEntry(id.clone()))
    }

    fn student_mut(&mut self, id: &PersonId) -> Result<&mut Student, FormError> {
        self.students
            .iter_mut()
            .find(|student| &student.id == id)
            .ok_or_else(|| FormError::UnknownEntry(id.clone()))
    }

    pub fn set_parent_field(
        &mut self,
        id: &PersonId,
        field: ParentField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.parent_mut(id)?.set_field(field, value);
        Ok(())
    }

    /// Sets one student field. A `Program` value is a program key (empty
    /// clears the selection) and always resets the class.
    pub fn set_student_field(
        &mut self,
        id: &PersonId,
        field: StudentField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let value = value.into();
        let student = self.student_mut(id)?;
        match field {
            StudentField::Title => student.title = value,
            StudentField::FullName => student.full_name = value,
            StudentField::ClassName => student.class_name = value,
            StudentField::Program => {
                let program = match value.trim() {
                    "" => None,
                    key => Some(key.parse::<Program>()?),
                };
                student.select_program(program);
            }
        }
        Ok(())
    }

    pub fn select_program(
        &mut self,
        id: &PersonId,
        program: Option<Program>,
    ) -> Result<(), FormError> {
        self.student_mut(id)?.select_program(program);
        Ok(())
    }

    /// Moves attendance out of `Pending`. Going back to `Pending` is refused.
    pub fn choose_attendance(&mut self, attendance: Attendance) -> bool {
        if !attendance.is_decided() {
            return false;
        }
        self.attendance = attendance;
        true
    }

    /// Everything that currently blocks a submit, in form order.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if !self.attendance.is_decided() {
            issues.push(ValidationIssue::AttendancePending);
        }

        for parent in &self.parents {
            if !filled(&parent.full_name) {
                issues.push(ValidationIssue::ParentName(parent.id.clone()));
            }
            if !filled(&parent.phone) {
                issues.push(ValidationIssue::ParentPhone(parent.id.clone()));
            }
        }

        for student in &self.students {
            if !filled(&student.full_name) {
                issues.push(ValidationIssue::StudentName(student.id.clone()));
            }
            if student.program().is_none() {
                issues.push(ValidationIssue::StudentProgram(student.id.clone()));
            } else if !student.has_valid_class() {
                issues.push(ValidationIssue::StudentClass(student.id.clone()));
            }
        }

        issues
    }

    /// Validates and builds the record to send, marking the form busy. The
    /// form itself is not changed until [`finish_submission`] runs.
    ///
    /// [`finish_submission`]: FormController::finish_submission
    pub fn prepare_submission(&mut self) -> Result<Submission, FormError> {
        if self.submitting {
            return Err(FormError::Busy);
        }

        let issues = self.validate();
        if !issues.is_empty() {
            return Err(FormError::Incomplete(issues));
        }

        let submission = Submission::new(
            SubmissionId::new(),
            self.parents.clone(),
            self.students.clone(),
            self.attendance,
            timestamp_now(),
        )?;
        self.submitting = true;
        Ok(submission)
    }

    /// Clears the busy flag. On success the form goes back to one blank
    /// parent, one blank student and pending attendance; on failure it is
    /// left as it was.
    pub fn finish_submission(&mut self, outcome: Result<(), StoreError>) -> Result<(), FormError> {
        self.submitting = false;
        outcome?;
        self.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub async fn submit(&mut self, store: &dyn SubmissionStore) -> Result<SubmissionId, FormError> {
        let submission = self.prepare_submission()?;
        let outcome = store.add(&submission).await;

        match &outcome {
            Ok(()) => info!(
                submission_id = %submission.id(),
                parents = submission.parents().len(),
                students = submission.students().len(),
                "submission stored"
            ),
            Err(error) => warn!(submission_id = %submission.id(), %error, "submission failed"),
        }

        self.finish_submission(outcome)?;
        Ok(submission.id().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    const KINDERGARTEN_1A: &str = "อนุบาล 1A TP / Kindergarten 1A TP";

    fn filled_form() -> FormController {
        let mut form = FormController::new();
        let parent = form.parents()[0].id.clone();
        let student = form.students()[0].id.clone();

        form.set_parent_field(&parent, ParentField::Title, "Mr.")
            .expect("parent exists");
        form.set_parent_field(&parent, ParentField::FullName, "John Doe")
            .expect("parent exists");
        form.set_parent_field(&parent, ParentField::Phone, "0800000000")
            .expect("parent exists");
        form.set_student_field(&student, StudentField::FullName, "Jane Doe")
            .expect("student exists");
        form.set_student_field(&student, StudentField::Program, "kindergarten")
            .expect("student exists");
        form.set_student_field(&student, StudentField::ClassName, KINDERGARTEN_1A)
            .expect("student exists");
        assert!(form.choose_attendance(Attendance::Attending));
        form
    }

    #[test]
    fn lists_are_bounded() {
        let mut form = FormController::new();
        assert!(form.add_parent());
        assert!(form.add_parent());
        assert!(!form.add_parent());
        assert_eq!(form.parents().len(), 3);

        let first = form.students()[0].id.clone();
        assert!(!form.remove_student(&first));
        assert_eq!(form.students().len(), 1);

        let last = form.parents()[2].id.clone();
        assert!(form.remove_parent(&last));
        assert!(!form.remove_parent(&PersonId::from_raw("missing")));
        assert_eq!(form.parents().len(), 2);
    }

    #[test]
    fn new_entries_get_distinct_ids() {
        let mut form = FormController::new();
        form.add_student();
        assert_ne!(form.students()[0].id, form.students()[1].id);
    }

    #[test]
    fn changing_program_clears_class() {
        let mut form = filled_form();
        let student = form.students()[0].id.clone();

        form.set_student_field(&student, StudentField::Program, "thai_programme")
            .expect("student exists");

        assert_eq!(form.students()[0].program(), Some(Program::ThaiProgramme));
        assert!(form.students()[0].class_name.is_empty());
        assert_eq!(
            form.validate(),
            vec![ValidationIssue::StudentClass(student)]
        );
    }

    #[test]
    fn unknown_program_key_is_rejected() {
        let mut form = FormController::new();
        let student = form.students()[0].id.clone();
        assert_eq!(
            form.set_student_field(&student, StudentField::Program, "science"),
            Err(FormError::Domain(DomainError::UnknownProgram("science".to_string())))
        );
    }

    #[test]
    fn pending_attendance_blocks_submission() {
        let mut form = filled_form();
        assert!(!form.choose_attendance(Attendance::Pending));
        assert_eq!(form.attendance(), Attendance::Attending);

        let mut fresh = FormController::new();
        let issues = fresh.validate();
        assert!(issues.contains(&ValidationIssue::AttendancePending));
        assert!(matches!(fresh.prepare_submission(), Err(FormError::Incomplete(_))));
        assert!(!fresh.is_submitting());
    }

    #[test]
    fn every_present_entry_needs_required_fields() {
        let mut form = filled_form();
        form.add_parent();
        let second = form.parents()[1].id.clone();

        let issues = form.validate();
        assert_eq!(
            issues,
            vec![
                ValidationIssue::ParentName(second.clone()),
                ValidationIssue::ParentPhone(second),
            ]
        );
    }

    #[test]
    fn student_name_must_not_be_blank() {
        let mut form = filled_form();
        let first = form.students()[0].id.clone();
        form.set_student_field(&first, StudentField::FullName, "   ")
            .expect("student exists");
        form.add_student();
        let second = form.students()[1].id.clone();

        assert_eq!(
            form.validate(),
            vec![
                ValidationIssue::StudentName(first),
                ValidationIssue::StudentName(second.clone()),
                ValidationIssue::StudentProgram(second),
            ]
        );
        assert!(matches!(form.prepare_submission(), Err(FormError::Incomplete(_))));
    }

    #[test]
    fn second_submit_while_busy_is_rejected() {
        let mut form = filled_form();
        form.prepare_submission().expect("complete form");
        assert!(form.is_submitting());
        assert_eq!(form.prepare_submission(), Err(FormError::Busy));
    }

    #[tokio::test]
    async fn successful_submit_resets_the_form() {
        let store = MemoryStore::default();
        let mut form = filled_form();

        form.submit(&store).await.expect("submit succeeds");

        assert_eq!(store.len(), 1);
        assert!(!form.is_submitting());
        assert_eq!(form.parents().len(), 1);
        assert!(form.parents()[0].full_name.is_empty());
        assert_eq!(form.attendance(), Attendance::Pending);
    }

    #[tokio::test]
    async fn failed_submit_keeps_the_form() {
        let store = MemoryStore::failing(StoreError::Transport("offline".to_string()));
        let mut form = filled_form();

        let error = form.submit(&store).await.expect_err("store is down");

        assert_eq!(
            error,
            FormError::Store(StoreError::Transport("offline".to_string()))
        );
        assert!(!form.is_submitting());
        assert_eq!(form.parents()[0].full_name, "John Doe");
        assert_eq!(form.attendance(), Attendance::Attending);
    }
}
