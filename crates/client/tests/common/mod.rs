use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use rsvp_api_types::{ID_NOT_FOUND, ScriptRequest, ScriptResponse, SubmissionPayload};
use rsvp_core::domain::{
    Attendance, Parent, PersonId, Program, Student, Submission, SubmissionId, timestamp_now,
};
use serde_json::{Value, json};

/// In-memory stand-in for the scripting endpoint, served on an ephemeral
/// port. `/exec` is the endpoint, `/moved` redirects to it and `/garbage`
/// answers with HTML.
#[derive(Clone, Default)]
pub struct FakeSheet {
    pub rows: Arc<Mutex<Vec<SubmissionPayload>>>,
    pub list_error: Arc<Mutex<Option<String>>>,
    pub content_types: Arc<Mutex<Vec<String>>>,
}

impl FakeSheet {
    pub fn row_count(&self) -> usize {
        self.rows.lock().expect("rows lock").len()
    }

    pub fn fail_listing(&self, message: &str) {
        *self.list_error.lock().expect("error lock") = Some(message.to_string());
    }
}

pub async fn spawn(sheet: FakeSheet) -> String {
    let app = Router::new()
        .route("/exec", get(list).post(script))
        .route("/moved", get(|| async { Redirect::temporary("/exec") }))
        .route("/garbage", get(|| async { "<html>not json</html>" }))
        .with_state(sheet);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake endpoint should serve");
    });

    format!("http://{addr}")
}

/// Serves the real sheet service over a fresh in-memory database and returns
/// its endpoint URL.
pub async fn spawn_sheet_service() -> String {
    let db = rsvp_server::db::init_pool_and_migrate("sqlite::memory:")
        .await
        .expect("in-memory database should migrate");
    let app = rsvp_server::create_router(Arc::new(rsvp_server::AppState::from_db(db)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("sheet service should serve");
    });

    format!("http://{addr}/")
}

async fn list(State(sheet): State<FakeSheet>) -> Json<Value> {
    if let Some(error) = sheet.list_error.lock().expect("error lock").clone() {
        return Json(json!({ "error": error }));
    }
    let rows = sheet.rows.lock().expect("rows lock").clone();
    Json(serde_json::to_value(rows).expect("rows serialize"))
}

async fn script(
    State(sheet): State<FakeSheet>,
    headers: HeaderMap,
    body: String,
) -> Json<ScriptResponse> {
    if let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) {
        sheet
            .content_types
            .lock()
            .expect("content type lock")
            .push(content_type.to_string());
    }

    let request: ScriptRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(error) => return Json(ScriptResponse::error(error.to_string())),
    };

    let mut rows = sheet.rows.lock().expect("rows lock");
    match request {
        ScriptRequest::Add { submission } => {
            rows.push(submission.clone());
            Json(ScriptResponse::added(submission))
        }
        ScriptRequest::Delete { id } => match rows.iter().position(|row| row.id == id) {
            Some(index) => {
                rows.remove(index);
                Json(ScriptResponse::deleted(id))
            }
            None => Json(ScriptResponse::error(ID_NOT_FOUND)),
        },
    }
}

pub fn submission(id: &str, parent: &str, student: &str) -> Submission {
    Submission::new(
        SubmissionId::from_raw(id),
        vec![Parent {
            id: PersonId::new(),
            title: "Mr.".to_string(),
            full_name: parent.to_string(),
            phone: "0800000000".to_string(),
        }],
        vec![Student::new(
            PersonId::new(),
            "Master",
            student,
            Some(Program::EnglishProgramme),
            Program::EnglishProgramme.classes()[0],
        )],
        Attendance::Attending,
        timestamp_now(),
    )
    .expect("valid submission")
}
