//! Application error type shared by every layer.
//!
//! [`AppError`] is the typed result of every link operation. The HTTP layer
//! renders it through [`IntoResponse`] as:
//!
//! ```json
//! { "error": { "code": "code_conflict", "message": "...", "details": { ... } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Target URL is not an absolute `http`/`https` URL.
    #[error("Invalid URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Custom code does not match `[A-Za-z0-9]{6,8}`.
    #[error("Code must be 6-8 alphanumeric characters")]
    InvalidCode { code: String },

    /// A link with this code already exists.
    #[error("Code '{code}' is already in use")]
    CodeConflict { code: String },

    /// No active link for this code.
    #[error("Short link '{code}' not found")]
    NotFound { code: String },

    /// The allocator could not find a free code within its retry bound.
    #[error("Failed to allocate a unique code after {attempts} attempts")]
    AllocationExhausted { attempts: usize },

    /// Request body rejected at the HTTP boundary.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn conflict(code: impl Into<String>) -> Self {
        Self::CodeConflict { code: code.into() }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "invalid_url",
            Self::InvalidCode { .. } => "invalid_code",
            Self::CodeConflict { .. } => "code_conflict",
            Self::NotFound { .. } => "not_found",
            Self::AllocationExhausted { .. } => "allocation_exhausted",
            Self::Validation { .. } => "validation_error",
            Self::Internal { .. } => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidUrl { .. } | Self::InvalidCode { .. } | Self::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::CodeConflict { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AllocationExhausted { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn details(&self) -> Value {
        match self {
            Self::InvalidUrl { url, reason } => json!({ "url": url, "reason": reason }),
            Self::InvalidCode { code } | Self::CodeConflict { code } | Self::NotFound { code } => {
                json!({ "code": code })
            }
            Self::AllocationExhausted { attempts } => json!({ "attempts": attempts }),
            Self::Validation { details, .. } | Self::Internal { details, .. } => details.clone(),
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.kind(),
            message: self.to_string(),
            details: self.details(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, kind = self.kind(), "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Request validation failed", json!(errors))
    }
}
