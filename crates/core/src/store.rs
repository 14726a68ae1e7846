//! Persistence seam between the controllers and the remote scripting
//! endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Submission, SubmissionId};

/// Failure of a store operation. None of these are retried; each ends up as a
/// single notification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("remote endpoint is not configured")]
    NotConfigured,
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid data format: {0}")]
    DataFormat(String),
    #[error("{0}")]
    Rejected(String),
    #[error("submission not found: {0}")]
    NotFound(String),
}

/// Read-all / append / delete-by-id over the stored submissions. There is no
/// update operation.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Submission>, StoreError>;

    async fn add(&self, submission: &Submission) -> Result<(), StoreError>;

    async fn delete(&self, id: &SubmissionId) -> Result<(), StoreError>;
}
