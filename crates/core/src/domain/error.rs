use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid parent count: {0}. a submission must list 1 to 3 parents")]
    ParentCount(usize),
    #[error("invalid student count: {0}. a submission must list 1 to 3 students")]
    StudentCount(usize),
    #[error("unknown attendance value: {0}")]
    UnknownAttendance(String),
    #[error("unknown program: {0}")]
    UnknownProgram(String),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}
