use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::db::RepositoryError;
use crate::models::DomainError;
use crate::submission::SubmissionError;

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred";
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request data";

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Validation(DomainError),
    Repository(RepositoryError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Validation(err) => write!(f, "Validation Error: {err}"),
            AppError::Repository(err) => write!(f, "Repository Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Validation(err) => {
                tracing::warn!("Validation error occurred: {err}");
                let msg = err.to_string();
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": msg, "details": msg }),
                )
            }
            AppError::Repository(err) => {
                tracing::error!("Repository error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": INTERNAL_ERROR_MESSAGE }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Validation(e) => AppError::Validation(e),
            SubmissionError::Repository(e) => AppError::Repository(e),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}
