use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication required or session expired")]
    Auth,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: StatusCode },
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    Shape(String),
    #[error("failed to parse number: {0}")]
    Decimal(#[from] rust_decimal::Error),
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth)
    }
}
