//! The scripting endpoint: `GET /` lists every submission, `POST /` runs an
//! `add` or `delete` action.
//!
//! Replies always use status 200; success and failure travel in the body.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use rsvp_api_types::{
    ID_NOT_FOUND, INVALID_ACTION, INVALID_SUBMISSION, ListResponse, ScriptResponse,
    SubmissionPayload,
};
use rsvp_core::domain::{DomainError, SubmissionId, timestamp_now};
use rsvp_core::{sheet, wire};
use serde_json::Value;
use tracing::{error, info, warn};

use super::state::AppState;

pub async fn list_submissions(State(state): State<Arc<AppState>>) -> Json<ListResponse> {
    match state.sheet.rows().await {
        Ok(rows) => {
            let submissions = rows
                .iter()
                .map(|row| wire::to_payload(&sheet::reconstruct(row)))
                .collect();
            Json(ListResponse::Rows(submissions))
        }
        Err(err) => {
            error!(error = %err, "failed to read sheet");
            Json(ListResponse::Failure {
                error: err.to_string(),
            })
        }
    }
}

/// The body is parsed as JSON whatever the declared content type.
pub async fn run_action(State(state): State<Arc<AppState>>, body: String) -> Json<ScriptResponse> {
    let request: Value = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "unparseable request body");
            return Json(ScriptResponse::error(err.to_string()));
        }
    };

    let response = match request.get("action").and_then(Value::as_str) {
        Some("add") => add(&state, request.get("submission")).await,
        Some("delete") => delete(&state, request.get("id").and_then(Value::as_str)).await,
        action => {
            warn!(?action, "invalid action");
            ScriptResponse::error(INVALID_ACTION)
        }
    };

    Json(response)
}

fn has_array(value: &Value, key: &str) -> bool {
    value.get(key).is_some_and(Value::is_array)
}

async fn add(state: &AppState, submission: Option<&Value>) -> ScriptResponse {
    let Some(submission) =
        submission.filter(|value| has_array(value, "parents") && has_array(value, "students"))
    else {
        warn!("add rejected: parents/students are not arrays");
        return ScriptResponse::error(INVALID_SUBMISSION);
    };

    let mut payload: SubmissionPayload = match serde_json::from_value(submission.clone()) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(error = %err, "add rejected: malformed submission");
            return ScriptResponse::error(err.to_string());
        }
    };
    if payload.id.trim().is_empty() {
        payload.id = SubmissionId::new().into_inner();
    }
    if payload.submission_date.trim().is_empty() {
        payload.submission_date = timestamp_now();
    }

    let submission = match wire::from_payload(payload) {
        Ok(submission) => submission,
        Err(err @ (DomainError::ParentCount(_) | DomainError::StudentCount(_))) => {
            warn!(error = %err, "add rejected: list out of bounds");
            return ScriptResponse::error(format!("Invalid submission data structure. {err}"));
        }
        Err(err) => {
            warn!(error = %err, "add rejected");
            return ScriptResponse::error(err.to_string());
        }
    };

    match state.sheet.append(sheet::flatten(&submission)).await {
        Ok(()) => {
            info!(submission_id = %submission.id(), "submission appended");
            ScriptResponse::added(wire::to_payload(&submission))
        }
        Err(err) => {
            error!(error = %err, submission_id = %submission.id(), "failed to append row");
            ScriptResponse::error(err.to_string())
        }
    }
}

async fn delete(state: &AppState, id: Option<&str>) -> ScriptResponse {
    let Some(id) = id else {
        warn!("delete rejected: missing id");
        return ScriptResponse::error(ID_NOT_FOUND);
    };

    match state.sheet.delete_first(id).await {
        Ok(true) => {
            info!(submission_id = id, "submission deleted");
            ScriptResponse::deleted(id)
        }
        Ok(false) => {
            warn!(submission_id = id, "delete target not found");
            ScriptResponse::error(ID_NOT_FOUND)
        }
        Err(err) => {
            error!(error = %err, submission_id = id, "failed to delete row");
            ScriptResponse::error(err.to_string())
        }
    }
}
