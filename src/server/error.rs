//! Mapping of request failures onto HTTP responses.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::data::LoadError;

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Everything a request can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A path parameter did not parse.
    #[error("Unrecognized param '{name}': {value}")]
    BadParam { name: &'static str, value: String },

    #[error("Index out of bound: len {len} got {index}")]
    IndexOutOfBounds { len: usize, index: usize },

    /// Random selection was asked of a suite with no questions.
    #[error("Question suite is empty: {0}")]
    EmptySuite(String),

    /// The path segments could not be decoded.
    #[error("Invalid path: {0}")]
    BadPath(String),

    /// A handler panicked.
    #[error("handler panicked: {0}")]
    Panic(String),
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadPath(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Load(e) if !e.is_not_found() => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Panic(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            // Paths and parser output stay in the log.
            error!(error = %self, "request failed on the server side");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
