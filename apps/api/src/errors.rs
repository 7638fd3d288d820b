use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::AnalysisError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Analysis failed: {0}")]
    CollaboratorFailure(String),

    #[error("Analysis timed out after {0}s")]
    CollaboratorTimeout(u64),

    #[error("Database error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Timeout(limit) => AppError::CollaboratorTimeout(limit.as_secs()),
            other => AppError::CollaboratorFailure(other.to_string()),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::CollaboratorTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::CollaboratorFailure(_)
            | AppError::Persistence(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::InvalidInput(msg) => {
                tracing::warn!("Rejected upload: {msg}");
                ("INVALID_INPUT", msg.clone())
            }
            AppError::NotFound(msg) => {
                tracing::warn!("Lookup miss: {msg}");
                ("NOT_FOUND", msg.clone())
            }
            AppError::CollaboratorFailure(msg) => {
                tracing::error!("Analysis error: {msg}");
                ("ANALYSIS_FAILED", "Failed to analyze resume with AI".to_string())
            }
            AppError::CollaboratorTimeout(secs) => {
                tracing::error!("Analysis timed out after {secs}s");
                ("ANALYSIS_TIMEOUT", "Resume analysis took too long, please try again".to_string())
            }
            AppError::Persistence(e) => {
                tracing::error!("Database error: {e}");
                ("DATABASE_ERROR", "A database error occurred".to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                ("INTERNAL_ERROR", "An internal server error occurred".to_string())
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (self.status(), body).into_response()
    }
}
