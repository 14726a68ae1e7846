use rsvp_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("remote endpoint is not configured")]
    NotConfigured,

    #[error("endpoint rejected the request: {0}")]
    Rejected(String),

    #[error("submission not found: {0}")]
    NotFound(String),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for StoreError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::NotConfigured => StoreError::NotConfigured,
            ClientError::Rejected(message) => StoreError::Rejected(message),
            ClientError::NotFound(id) => StoreError::NotFound(id),
            ClientError::Json(error) => StoreError::DataFormat(error.to_string()),
            ClientError::UnexpectedResponse(message) => StoreError::DataFormat(message),
            ClientError::Http(error) => StoreError::Transport(error.to_string()),
        }
    }
}
