//! Relay error type and its HTTP rendering.
//!
//! Every failure a request can hit ends up here and is written back as a
//! plaintext body with the matching status code, so nothing escapes the
//! handler boundary.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelayError>;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Invalid JSON in request")]
    InvalidJson,

    #[error("Missing query parameter")]
    MissingQuery,

    #[error("Error from Mullvad Leta service")]
    Upstream(StatusCode),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidJson | RelayError::MissingQuery => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) | RelayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Internal(err.to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            RelayError::Upstream(upstream) => {
                tracing::warn!(%upstream, "upstream returned non-success status")
            }
            RelayError::Internal(msg) => tracing::error!("request failed: {msg}"),
            _ => tracing::debug!("rejected request: {self}"),
        }
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
