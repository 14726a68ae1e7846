//! Conversions between domain records and the endpoint's JSON payloads.

use rsvp_api_types::{ParentPayload, StudentPayload, SubmissionPayload};

use crate::domain::{
    Attendance, DomainError, Parent, PersonId, Program, Student, Submission, SubmissionId,
};

pub fn to_payload(submission: &Submission) -> SubmissionPayload {
    SubmissionPayload {
        id: submission.id().to_string(),
        parents: submission
            .parents()
            .iter()
            .map(|parent| ParentPayload {
                id: parent.id.to_string(),
                title: parent.title.clone(),
                full_name: parent.full_name.clone(),
                phone: parent.phone.clone(),
            })
            .collect(),
        students: submission
            .students()
            .iter()
            .map(|student| StudentPayload {
                id: student.id.to_string(),
                title: student.title.clone(),
                full_name: student.full_name.clone(),
                program: student
                    .program()
                    .map(Program::key)
                    .unwrap_or_default()
                    .to_string(),
                class_name: student.class_name.clone(),
            })
            .collect(),
        attendance: submission.attendance().as_str().to_string(),
        submission_date: submission.submission_date().to_string(),
    }
}

fn parent_from_payload(payload: ParentPayload) -> Parent {
    Parent {
        id: person_id(payload.id),
        title: payload.title,
        full_name: payload.full_name,
        phone: payload.phone,
    }
}

fn person_id(raw: String) -> PersonId {
    if raw.is_empty() {
        PersonId::new()
    } else {
        PersonId::from_raw(raw)
    }
}

/// Strict conversion for incoming writes: list bounds, attendance and
/// program keys must all be valid. An empty program is allowed and stays
/// unselected.
pub fn from_payload(payload: SubmissionPayload) -> Result<Submission, DomainError> {
    let attendance: Attendance = payload.attendance.parse()?;

    let students = payload
        .students
        .into_iter()
        .map(|student| -> Result<Student, DomainError> {
            let program = match student.program.trim() {
                "" => None,
                key => Some(key.parse::<Program>()?),
            };
            Ok(Student::new(
                person_id(student.id),
                student.title,
                student.full_name,
                program,
                student.class_name,
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let parents = payload
        .parents
        .into_iter()
        .map(parent_from_payload)
        .collect();

    Submission::new(
        SubmissionId::from_raw(payload.id),
        parents,
        students,
        attendance,
        payload.submission_date,
    )
}

/// Lenient conversion for records read back from the store.
pub fn from_stored_payload(payload: SubmissionPayload) -> Submission {
    let students = payload
        .students
        .into_iter()
        .map(|student| {
            Student::new(
                person_id(student.id),
                student.title,
                student.full_name,
                student.program.trim().parse().ok(),
                student.class_name,
            )
        })
        .collect();

    Submission::from_stored(
        SubmissionId::from_raw(payload.id),
        payload
            .parents
            .into_iter()
            .map(parent_from_payload)
            .collect(),
        students,
        Attendance::from_stored(&payload.attendance),
        payload.submission_date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            id: "s-1".to_string(),
            parents: vec![ParentPayload {
                id: "p".to_string(),
                title: "Mr.".to_string(),
                full_name: "John Doe".to_string(),
                phone: "0800000000".to_string(),
            }],
            students: vec![StudentPayload {
                id: String::new(),
                title: "Master".to_string(),
                full_name: "Jane Doe".to_string(),
                program: "kindergarten".to_string(),
                class_name: "อนุบาล 1A TP / Kindergarten 1A TP".to_string(),
            }],
            attendance: "attending".to_string(),
            submission_date: "2025-11-01T08:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn strict_conversion_round_trips() {
        let submission = from_payload(payload()).expect("valid payload");

        assert_eq!(submission.students()[0].program(), Some(Program::Kindergarten));
        assert!(!submission.students()[0].id.as_str().is_empty());

        let back = to_payload(&submission);
        assert_eq!(back.parents, payload().parents);
        assert_eq!(back.students[0].program, "kindergarten");
        assert_eq!(back.submission_date, "2025-11-01T08:00:00.000Z");
    }

    #[test]
    fn strict_conversion_rejects_bad_values() {
        let mut bad_program = payload();
        bad_program.students[0].program = "science".to_string();
        assert_eq!(
            from_payload(bad_program).expect_err("unknown program"),
            DomainError::UnknownProgram("science".to_string())
        );

        let mut no_parents = payload();
        no_parents.parents.clear();
        assert_eq!(
            from_payload(no_parents).expect_err("no parents"),
            DomainError::ParentCount(0)
        );

        let mut bad_attendance = payload();
        bad_attendance.attendance = "yes".to_string();
        assert!(from_payload(bad_attendance).is_err());
    }

    #[test]
    fn stored_conversion_accepts_sparse_records() {
        let mut sparse = payload();
        sparse.parents.clear();
        sparse.attendance = String::new();

        let submission = from_stored_payload(sparse);

        assert!(submission.parents().is_empty());
        assert_eq!(submission.attendance(), Attendance::Pending);
    }
}
