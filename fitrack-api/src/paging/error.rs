//! Paging and record source errors
//!
//! Only two things can make a page request fail: an invalid page window,
//! reported before any work is done, and a failure of the record source
//! itself, which is passed through untouched. Bad column names and
//! unparseable filter text never produce an error.
//!
//! # Example
//!
//! ```rust
//! use fitrack_api::paging::{PagingError, SourceError, SourceOperation};
//!
//! let upstream = SourceError::timeout(SourceOperation::Fetch, "query timed out after 5s")
//!     .with_record_type("Workout");
//! assert!(upstream.is_retriable());
//!
//! let err = PagingError::from(upstream);
//! assert!(!err.is_validation());
//! ```

use std::fmt;

use thiserror::Error;

/// Error returned by the pagination engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    /// Page index below zero
    #[error("Invalid page index {0}: must be zero or greater")]
    InvalidPageIndex(i64),

    /// Page size of zero or less
    #[error("Invalid page size {0}: must be at least 1")]
    InvalidPageSize(i64),

    /// The record source failed while counting or fetching
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl PagingError {
    /// Whether this is a request validation failure (bad page index or size)
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPageIndex(_) | Self::InvalidPageSize(_))
    }
}

/// Record source operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceOperation {
    /// Counting records matching a filter
    Count,
    /// Materializing one page of records
    Fetch,
}

impl fmt::Display for SourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count => write!(f, "count"),
            Self::Fetch => write!(f, "fetch"),
        }
    }
}

/// Category of record source error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceErrorKind {
    /// Could not reach the backing store
    ConnectionFailed,
    /// The store did not answer in time
    Timeout,
    /// The store rejected or failed the query
    QueryFailed,
    /// A stored record could not be decoded
    Decode,
    /// Other unclassified error
    Other,
}

impl fmt::Display for SourceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::QueryFailed => write!(f, "query_failed"),
            Self::Decode => write!(f, "decode"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured record source error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    /// The operation being performed when the error occurred
    pub operation: SourceOperation,
    /// The category of error
    pub kind: SourceErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The record type being paged (e.g., "Workout")
    pub record_type: Option<String>,
}

impl SourceError {
    /// Create a new source error
    pub fn new(
        operation: SourceOperation,
        kind: SourceErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            record_type: None,
        }
    }

    /// Create a connection failed error
    pub fn connection_failed(operation: SourceOperation, message: impl Into<String>) -> Self {
        Self::new(operation, SourceErrorKind::ConnectionFailed, message)
    }

    /// Create a timeout error
    pub fn timeout(operation: SourceOperation, message: impl Into<String>) -> Self {
        Self::new(operation, SourceErrorKind::Timeout, message)
    }

    /// Create a query failed error
    pub fn query_failed(operation: SourceOperation, message: impl Into<String>) -> Self {
        Self::new(operation, SourceErrorKind::QueryFailed, message)
    }

    /// Create a decode error
    pub fn decode(operation: SourceOperation, message: impl Into<String>) -> Self {
        Self::new(operation, SourceErrorKind::Decode, message)
    }

    /// Attach the record type being paged
    #[must_use]
    pub fn with_record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    /// Check if this error is transient and the call may succeed on retry
    ///
    /// The engine never retries on its own; this is for callers.
    #[must_use]
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind,
            SourceErrorKind::ConnectionFailed | SourceErrorKind::Timeout
        )
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Source {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(ref record_type) = self.record_type {
            write!(f, " [{}]", record_type)?;
        }
        Ok(())
    }
}

impl std::error::Error for SourceError {}
