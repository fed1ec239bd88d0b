//! Response types for the attendance tracker API.
//!
//! This module defines the error response structures, profile listing
//! shapes, and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TrackerError> for ApiErrorResponse {
    fn from(error: TrackerError) -> Self {
        match error {
            TrackerError::StateLoad { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STATE_ERROR",
                    "State load error",
                    format!("Failed to load {}: {}", path, message),
                ),
            },
            TrackerError::StatePersist { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STATE_ERROR",
                    "State persist error",
                    format!("Failed to persist {}: {}", path, message),
                ),
            },
            TrackerError::ProfileNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "PROFILE_NOT_FOUND",
                    format!("Profile not found: {}", id),
                    "No profile with this id exists in the store".to_string(),
                ),
            },
            TrackerError::InvalidMonthKey { key } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month key: {}", key),
                    "Month keys take the form YYYY-MM".to_string(),
                ),
            },
            TrackerError::InvalidProfileField { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(format!("Invalid {}: {}", field, message)),
            },
            TrackerError::InvalidAttendance { date, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(format!(
                    "Invalid attendance for {}: {}",
                    date, message
                )),
            },
            TrackerError::ImportRejected { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("IMPORT_REJECTED", message),
            },
        }
    }
}

/// One profile row in the listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInfo {
    /// The profile id.
    pub id: String,
    /// The profile display name.
    pub name: String,
}

/// Response body for `GET /profiles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileListResponse {
    /// All configured profiles.
    pub profiles: Vec<ProfileInfo>,
    /// Id of the currently active profile.
    pub active_profile_id: String,
}
