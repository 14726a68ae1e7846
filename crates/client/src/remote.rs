//! HTTP client for the scripting endpoint.
//!
//! Requests are sent once: no retry, no timeout. POST bodies go out as
//! `text/plain` JSON, which script hosts accept without a CORS preflight, and
//! redirects are followed.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use rsvp_api_types::{ID_NOT_FOUND, ListResponse, ScriptRequest, ScriptResponse};
use rsvp_core::domain::{Submission, SubmissionId};
use rsvp_core::store::{StoreError, SubmissionStore};
use rsvp_core::wire;
use tracing::{debug, info, warn};

use crate::config::{ClientConfig, endpoint_is_configured};
use crate::error::{ClientError, Result};

const TEXT_PLAIN: &str = "text/plain;charset=utf-8";

#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: Client,
    endpoint: String,
}

impl RemoteStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_configured(&self) -> bool {
        endpoint_is_configured(&self.endpoint)
    }

    fn ensure_configured(&self) -> Result<()> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(ClientError::NotConfigured)
        }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Submission>> {
        self.ensure_configured()?;

        let body = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        match serde_json::from_str::<ListResponse>(&body) {
            Ok(ListResponse::Rows(rows)) => {
                debug!(count = rows.len(), "submissions fetched");
                Ok(rows.into_iter().map(wire::from_stored_payload).collect())
            }
            Ok(ListResponse::Failure { error }) => Err(ClientError::Rejected(error)),
            Err(_) => Err(ClientError::UnexpectedResponse(
                "expected a JSON array of submissions".to_string(),
            )),
        }
    }

    async fn post(&self, request: &ScriptRequest) -> Result<ScriptResponse> {
        self.ensure_configured()?;
        debug!(action = request.action(), "posting to endpoint");

        let body = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, TEXT_PLAIN)
            .body(serde_json::to_string(request)?)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn append(&self, submission: &Submission) -> Result<()> {
        let request = ScriptRequest::Add {
            submission: wire::to_payload(submission),
        };

        match self.post(&request).await? {
            ScriptResponse::Success { .. } => {
                info!(submission_id = %submission.id(), "submission appended");
                Ok(())
            }
            ScriptResponse::Error { message } => {
                warn!(submission_id = %submission.id(), %message, "append rejected");
                Err(ClientError::Rejected(message))
            }
        }
    }

    pub async fn remove(&self, id: &SubmissionId) -> Result<()> {
        let request = ScriptRequest::Delete { id: id.to_string() };

        match self.post(&request).await? {
            ScriptResponse::Success { .. } => {
                info!(submission_id = %id, "submission removed");
                Ok(())
            }
            ScriptResponse::Error { message } if message == ID_NOT_FOUND => {
                warn!(submission_id = %id, "delete target not found");
                Err(ClientError::NotFound(id.to_string()))
            }
            ScriptResponse::Error { message } => {
                warn!(submission_id = %id, %message, "delete rejected");
                Err(ClientError::Rejected(message))
            }
        }
    }
}

#[async_trait]
impl SubmissionStore for RemoteStore {
    async fn list_all(&self) -> std::result::Result<Vec<Submission>, StoreError> {
        Ok(self.fetch_all().await?)
    }

    async fn add(&self, submission: &Submission) -> std::result::Result<(), StoreError> {
        Ok(self.append(submission).await?)
    }

    async fn delete(&self, id: &SubmissionId) -> std::result::Result<(), StoreError> {
        Ok(self.remove(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENDPOINT_PLACEHOLDER;

    #[test]
    fn placeholder_endpoint_is_not_configured() {
        assert!(!RemoteStore::new(ENDPOINT_PLACEHOLDER).is_configured());
        assert!(!RemoteStore::new("").is_configured());
        assert!(RemoteStore::new("https://script.example.com/exec").is_configured());
    }
}
