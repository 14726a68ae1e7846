//! Wire types of the RSVP scripting endpoint.
//!
//! The endpoint speaks the same JSON dialect as the spreadsheet script it
//! replaces: camelCase submission payloads, `{action, ...}` POST bodies and
//! `{result, ...}` replies.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
}

impl HealthCheckResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Convenience alias for handlers that prefer a shorter type name.
pub type HealthResponse = HealthCheckResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// One parent entry as it travels over the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentPayload {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
}

/// One student entry as it travels over the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub program: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub class_name: String,
}

/// A nested submission. `parents` and `students` are mandatory arrays; every
/// scalar tolerates numbers and nulls because spreadsheet cells come back
/// typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    pub parents: Vec<ParentPayload>,
    pub students: Vec<StudentPayload>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub attendance: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub submission_date: String,
}

/// POST body understood by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptRequest {
    Add { submission: SubmissionPayload },
    Delete { id: String },
}

impl ScriptRequest {
    pub fn action(&self) -> &'static str {
        match self {
            ScriptRequest::Add { .. } => "add",
            ScriptRequest::Delete { .. } => "delete",
        }
    }
}

/// Error message of a delete whose id matches no row.
pub const ID_NOT_FOUND: &str = "ID not found";

/// Error message for a missing or unrecognised `action`.
pub const INVALID_ACTION: &str = "Invalid action";

/// Error message for an `add` whose lists are missing or out of bounds.
pub const INVALID_SUBMISSION: &str =
    "Invalid submission data structure. 'parents' and 'students' must be arrays.";

/// POST reply. A success carries the stored submission (`add`) or the removed
/// id (`delete`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ScriptResponse {
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<SubmissionPayload>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
    Error {
        #[serde(default)]
        message: String,
    },
}

impl ScriptResponse {
    pub fn added(data: SubmissionPayload) -> Self {
        ScriptResponse::Success {
            data: Some(data),
            id: None,
        }
    }

    pub fn deleted(id: impl Into<String>) -> Self {
        ScriptResponse::Success {
            data: None,
            id: Some(id.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ScriptResponse::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ScriptResponse::Success { .. })
    }
}

/// GET reply: either every stored submission, or an `{error}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse {
    Rows(Vec<SubmissionPayload>),
    Failure { error: String },
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Unsigned(u64),
        Float(f64),
        Flag(bool),
    }

    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Text(value)) => value,
        Some(Scalar::Integer(value)) => value.to_string(),
        Some(Scalar::Unsigned(value)) => value.to_string(),
        Some(Scalar::Float(value)) => value.to_string(),
        Some(Scalar::Flag(value)) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_ok_payload() {
        let response = HealthCheckResponse::ok();
        assert_eq!(response.status, "ok");
    }

    #[test]
    fn add_request_uses_action_tag_and_camel_case_fields() {
        let request = ScriptRequest::Add {
            submission: SubmissionPayload {
                id: "abc".to_string(),
                parents: vec![ParentPayload {
                    id: "p1".to_string(),
                    title: "Mr.".to_string(),
                    full_name: "John Doe".to_string(),
                    phone: "0800000000".to_string(),
                }],
                students: vec![],
                attendance: "attending".to_string(),
                submission_date: "2025-11-01T08:00:00.000Z".to_string(),
            },
        };

        let json = serde_json::to_value(&request).expect("serialize add request");

        assert_eq!(json["action"], "add");
        assert_eq!(json["submission"]["parents"][0]["fullName"], "John Doe");
        assert_eq!(
            json["submission"]["submissionDate"],
            "2025-11-01T08:00:00.000Z"
        );
    }

    #[test]
    fn delete_request_parses_from_script_body() {
        let request: ScriptRequest =
            serde_json::from_str(r#"{"action":"delete","id":"abc"}"#).expect("parse delete");

        assert_eq!(
            request,
            ScriptRequest::Delete {
                id: "abc".to_string()
            }
        );
        assert_eq!(request.action(), "delete");
    }

    #[test]
    fn spreadsheet_cells_are_read_as_strings() {
        let payload: SubmissionPayload = serde_json::from_str(
            r#"{
                "id": 42,
                "parents": [{"id": "parent-1-42", "title": "Mrs.", "fullName": "Ann", "phone": 812345678}],
                "students": [],
                "attendance": null,
                "submissionDate": "2025-11-01T08:00:00.000Z"
            }"#,
        )
        .expect("parse typed cells");

        assert_eq!(payload.id, "42");
        assert_eq!(payload.parents[0].phone, "812345678");
        assert_eq!(payload.attendance, "");
    }

    #[test]
    fn missing_arrays_are_rejected() {
        let result = serde_json::from_str::<SubmissionPayload>(r#"{"id":"x","parents":"nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn list_response_distinguishes_rows_from_error_object() {
        let rows: ListResponse = serde_json::from_str("[]").expect("parse empty list");
        assert_eq!(rows, ListResponse::Rows(vec![]));

        let failure: ListResponse =
            serde_json::from_str(r#"{"error":"Sheet \"Submissions\" not found."}"#)
                .expect("parse error object");
        assert_eq!(
            failure,
            ListResponse::Failure {
                error: "Sheet \"Submissions\" not found.".to_string()
            }
        );
    }

    #[test]
    fn script_response_shapes_match_endpoint() {
        let deleted = serde_json::to_value(ScriptResponse::deleted("abc")).expect("serialize");
        assert_eq!(deleted, serde_json::json!({"result": "success", "id": "abc"}));

        let error: ScriptResponse =
            serde_json::from_str(r#"{"result":"error","message":"ID not found"}"#)
                .expect("parse error");
        assert_eq!(error, ScriptResponse::error("ID not found"));
        assert!(!error.is_success());
    }
}
