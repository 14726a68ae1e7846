//! Admin review list: filtering, ordering, summary and confirmed deletes.

use std::cmp::Reverse;

use tracing::{info, warn};

use crate::domain::{Attendance, Language, Program, Submission, SubmissionId};
use crate::notice::Notice;
use crate::store::{StoreError, SubmissionStore};

/// Program filter AND free-text search. Both are optional; an unset program
/// or a blank search term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardFilter {
    pub program: Option<Program>,
    pub search: String,
}

impl DashboardFilter {
    pub fn matches(&self, submission: &Submission) -> bool {
        self.matches_program(submission) && self.matches_search(submission)
    }

    pub fn matches_program(&self, submission: &Submission) -> bool {
        self.program
            .is_none_or(|program| submission.enrolls_in(program))
    }

    /// Case-insensitive substring over parent names, parent phones and
    /// student names. Phones are compared as typed.
    pub fn matches_search(&self, submission: &Submission) -> bool {
        if self.search.trim().is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();

        submission.parents().iter().any(|parent| {
            parent.full_name.to_lowercase().contains(&term) || parent.phone.contains(&term)
        }) || submission
            .students()
            .iter()
            .any(|student| student.full_name.to_lowercase().contains(&term))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub attending: usize,
    pub not_attending: usize,
    pub pending: usize,
}

impl AttendanceSummary {
    pub fn total(&self) -> usize {
        self.attending + self.not_attending + self.pending
    }
}

/// Proof that a delete was requested for a submission in the current list.
/// Only [`Dashboard::confirm_delete`] consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingDelete {
    id: SubmissionId,
}

impl PendingDelete {
    pub fn id(&self) -> &SubmissionId {
        &self.id
    }
}

#[derive(Debug, Default)]
pub struct Dashboard {
    submissions: Vec<Submission>,
    filter: DashboardFilter,
    loading: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_submissions(submissions: Vec<Submission>) -> Self {
        Self {
            submissions,
            ..Self::default()
        }
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn filter(&self) -> &DashboardFilter {
        &self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_program_filter(&mut self, program: Option<Program>) {
        self.filter.program = program;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn clear_filters(&mut self) {
        self.filter = DashboardFilter::default();
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Replaces the list on success. A failed load keeps whatever was shown
    /// before.
    pub fn finish_refresh(
        &mut self,
        outcome: Result<Vec<Submission>, StoreError>,
    ) -> Result<usize, StoreError> {
        self.loading = false;
        let submissions = outcome?;
        self.submissions = submissions;
        Ok(self.submissions.len())
    }

    pub async fn refresh(&mut self, store: &dyn SubmissionStore) -> Result<usize, StoreError> {
        self.begin_refresh();
        let outcome = store.list_all().await;
        if let Err(error) = &outcome {
            warn!(%error, "failed to load submissions");
        }
        self.finish_refresh(outcome)
    }

    /// Filtered submissions, newest first. Records whose date does not parse
    /// go last, in list order.
    pub fn visible(&self) -> Vec<&Submission> {
        let mut visible: Vec<&Submission> = self
            .submissions
            .iter()
            .filter(|submission| self.filter.matches(submission))
            .collect();
        visible.sort_by_key(|submission| Reverse(submission.submitted_at()));
        visible
    }

    pub fn is_empty_view(&self) -> bool {
        !self
            .submissions
            .iter()
            .any(|submission| self.filter.matches(submission))
    }

    pub fn summary(&self) -> AttendanceSummary {
        let mut summary = AttendanceSummary::default();
        for submission in self.visible() {
            match submission.attendance() {
                Attendance::Attending => summary.attending += 1,
                Attendance::NotAttending => summary.not_attending += 1,
                Attendance::Pending => summary.pending += 1,
            }
        }
        summary
    }

    /// First step of a delete. `None` when the id is not in the local list.
    pub fn request_delete(&self, id: &SubmissionId) -> Option<PendingDelete> {
        self.submissions
            .iter()
            .any(|submission| submission.id() == id)
            .then(|| PendingDelete { id: id.clone() })
    }

    /// Deletes remotely, then locally. The local list is untouched when the
    /// store call fails.
    pub async fn confirm_delete(
        &mut self,
        store: &dyn SubmissionStore,
        pending: PendingDelete,
    ) -> Result<SubmissionId, StoreError> {
        let PendingDelete { id } = pending;

        if let Err(error) = store.delete(&id).await {
            warn!(submission_id = %id, %error, "delete failed");
            return Err(error);
        }

        if let Some(index) = self
            .submissions
            .iter()
            .position(|submission| submission.id() == &id)
        {
            self.submissions.remove(index);
        }
        info!(submission_id = %id, "submission deleted");
        Ok(id)
    }

    pub fn edit(&self, language: Language) -> Notice {
        Notice::edit_unavailable(language)
    }

    pub fn add(&self, language: Language) -> Notice {
        Notice::add_unavailable(language)
    }
}
