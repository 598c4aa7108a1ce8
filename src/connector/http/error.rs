use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::domain::DomainError;

pub const NO_RESULTS: &str = "No results found";
pub const SEARCH_FAILED: &str = "SerpAPI request failed";
pub const APOLLO_FAILED: &str = "Failed to fetch from Apollo";
pub const HUNTER_FAILED: &str = "Failed to fetch from Hunter.io";
pub const SCRAPE_FAILED: &str = "Scrape failed";
pub const STORE_FAILED: &str = "Failed to load stored profiles";

/// An error response rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Map a domain error onto a status and a client-facing message.
    ///
    /// Invalid input and configuration errors carry their own message.
    /// Upstream and storage failures are logged and replaced by `fallback`.
    pub fn from_domain(err: DomainError, fallback: &str) -> Self {
        match err {
            DomainError::InvalidInput(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            DomainError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, NO_RESULTS),
            DomainError::Configuration(msg) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg),
            other => {
                warn!("{}: {}", fallback, other);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, fallback)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
