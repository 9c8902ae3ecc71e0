use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::notify::Notification;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is a rejected local action: nothing is partially applied, and
/// the response carries the toast the screen should show.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file type: {0}")]
    InvalidFileType(String),

    #[error("File of {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Missing information: {0}")]
    MissingFields(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("An analysis is already running")]
    AnalysisInProgress,

    #[error("No analysis result is available yet")]
    NoAnalysisResult,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The toast a screen shows for this failure.
    pub fn notification(&self) -> Notification {
        match self {
            AppError::InvalidFileType(_) => {
                Notification::destructive("Invalid file type", "Please upload a PDF or DOCX file")
            }
            AppError::FileTooLarge { limit, .. } => Notification::destructive(
                "File too large",
                format!(
                    "Please upload a file smaller than {}MB",
                    limit / (1024 * 1024)
                ),
            ),
            AppError::MissingFields(msg) => Notification::destructive("Missing information", msg),
            AppError::Validation(msg) => Notification::destructive("Invalid input", msg),
            AppError::AnalysisInProgress => Notification::destructive(
                "Analysis in progress",
                "Please wait for the current analysis to finish",
            ),
            AppError::NoAnalysisResult => Notification::destructive(
                "No analysis yet",
                "Analyze your resume before requesting suggestions",
            ),
            AppError::NotFound(msg) => Notification::destructive("Not found", msg),
            AppError::Internal(_) => {
                Notification::destructive("Something went wrong", "Please try again")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidFileType(_) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "INVALID_FILE_TYPE",
                self.to_string(),
            ),
            AppError::FileTooLarge { .. } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "FILE_TOO_LARGE",
                self.to_string(),
            ),
            AppError::MissingFields(msg) => {
                (StatusCode::BAD_REQUEST, "MISSING_FIELDS", msg.clone())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::AnalysisInProgress => (
                StatusCode::CONFLICT,
                "ANALYSIS_IN_PROGRESS",
                self.to_string(),
            ),
            AppError::NoAnalysisResult => {
                (StatusCode::CONFLICT, "NO_ANALYSIS_RESULT", self.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            },
            "notification": self.notification(),
        }));

        (status, body).into_response()
    }
}
