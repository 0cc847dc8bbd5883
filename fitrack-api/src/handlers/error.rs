//! API error type for list endpoints
//!
//! Converts [`PagingError`] into an HTTP response: bad page parameters are a
//! 400, transient source failures a 503, everything else a 500. Bad column
//! names and filter text never reach this type.
//!
//! # Example
//!
//! ```rust
//! use fitrack_api::handlers::{ApiError, ApiErrorKind};
//! use fitrack_api::paging::PagingError;
//!
//! let error = ApiError::from(PagingError::InvalidPageSize(0)).with_record_type("Workout");
//! assert_eq!(error.kind, ApiErrorKind::BadRequest);
//! assert_eq!(error.kind.status_code().as_u16(), 400);
//! ```

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::paging::PagingError;

/// Category of API error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Invalid request parameters
    BadRequest,
    /// Internal server error
    InternalError,
    /// Service temporarily unavailable
    ServiceUnavailable,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "bad_request"),
            Self::InternalError => write!(f, "internal_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
        }
    }
}

impl ApiErrorKind {
    /// Get the HTTP status code for this error kind
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the error code string for this error kind
    #[must_use]
    pub fn error_code(&self) -> String {
        self.to_string().to_uppercase()
    }
}

/// Error returned by list endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The category of error
    pub kind: ApiErrorKind,
    /// Message shown to the client
    pub message: String,
    /// The record type being listed (e.g., "Workout")
    pub record_type: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            record_type: None,
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::BadRequest, message)
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::InternalError, message)
    }

    /// Create a service unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::ServiceUnavailable, message)
    }

    /// Attach the record type being listed
    #[must_use]
    pub fn with_record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    /// Check if the client may retry the request as is
    #[must_use]
    pub fn is_retriable(&self) -> bool {
        matches!(self.kind, ApiErrorKind::ServiceUnavailable)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API {} error: {}", self.kind, self.message)?;
        if let Some(ref record_type) = self.record_type {
            write!(f, " [{}]", record_type)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Response body for API errors
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorResponse {
    error: String,
    code: String,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    record_type: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();
        let code = self.kind.error_code();

        if status.is_server_error() {
            tracing::error!(
                kind = %self.kind,
                record_type = ?self.record_type,
                retriable = self.is_retriable(),
                "API error: {}", self.message
            );
        } else {
            tracing::warn!(
                kind = %self.kind,
                record_type = ?self.record_type,
                "API error: {}", self.message
            );
        }

        let body = ApiErrorResponse {
            error: self.message,
            code,
            status: status.as_u16(),
            record_type: self.record_type,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PagingError> for ApiError {
    fn from(err: PagingError) -> Self {
        match err {
            PagingError::InvalidPageIndex(_) | PagingError::InvalidPageSize(_) => {
                Self::bad_request(err.to_string())
            }
            PagingError::Source(source) => {
                // Source details stay in the logs, not in the response body
                tracing::error!(
                    operation = %source.operation,
                    kind = %source.kind,
                    record_type = ?source.record_type,
                    "Record source failed: {}", source.message
                );
                let error = if source.is_retriable() {
                    Self::service_unavailable("Service temporarily unavailable")
                } else {
                    Self::internal("An internal error occurred")
                };
                match source.record_type {
                    Some(record_type) => error.with_record_type(record_type),
                    None => error,
                }
            }
        }
    }
}
