mod attendance;
mod error;
mod ids;
mod language;
mod person;
mod program;
mod submission;
pub mod title;

pub use attendance::Attendance;
pub use error::DomainError;
pub use ids::{PersonId, SubmissionId};
pub use language::Language;
pub use person::{Parent, ParentField, Role, Student, StudentField};
pub use program::Program;
pub use submission::{Submission, timestamp_now};
