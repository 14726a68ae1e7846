use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use rsvp_server::{AppState, create_router, db};
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
}

/// Router over a fresh, migrated in-memory SQLite sheet.
pub async fn spawn_app() -> TestApp {
    let db = db::init_pool_and_migrate("sqlite::memory:")
        .await
        .expect("in-memory database should migrate");
    let state = Arc::new(AppState::from_db(db));

    TestApp {
        router: create_router(state.clone()),
        state,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build");
        self.send(request).await
    }

    pub async fn get_json(&self, uri: &str) -> Value {
        let (status, body) = self.get(uri).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).expect("response should be JSON")
    }

    /// POSTs `body` as `text/plain`, the way browser clients call the
    /// endpoint.
    pub async fn post_text(&self, body: impl Into<String>) -> Value {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(Body::from(body.into()))
            .expect("request should build");
        let (status, body) = self.send(request).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).expect("response should be JSON")
    }

    pub async fn post_json(&self, value: &Value) -> Value {
        self.post_text(value.to_string()).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        (
            status,
            String::from_utf8(bytes.to_vec()).expect("body should be utf-8"),
        )
    }
}

pub fn john_doe(id: &str) -> Value {
    json!({
        "id": id,
        "parents": [
            { "id": "p1", "title": "Mr.", "fullName": "John Doe", "phone": "0800000000" }
        ],
        "students": [
            {
                "id": "s1",
                "title": "Master",
                "fullName": "Jane Doe",
                "program": "kindergarten",
                "className": "อนุบาล 1A TP / Kindergarten 1A TP"
            }
        ],
        "attendance": "attending",
        "submissionDate": "2025-11-01T08:00:00.000Z"
    })
}

pub fn add_request(submission: Value) -> Value {
    json!({ "action": "add", "submission": submission })
}

pub fn delete_request(id: &str) -> Value {
    json!({ "action": "delete", "id": id })
}
