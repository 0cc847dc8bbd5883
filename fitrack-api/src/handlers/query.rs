//! Query-string parameters of list endpoints
//!
//! # Example
//!
//! ```rust
//! use fitrack_api::config::PagingConfig;
//! use fitrack_api::handlers::ListQuery;
//!
//! let query = ListQuery::new()
//!     .with_page_index(2)
//!     .with_sort("name", "desc")
//!     .with_filter("difficulty", "beginner");
//!
//! let request = query.to_request(&PagingConfig::default());
//! assert_eq!(request.page_index, 2);
//! assert_eq!(request.page_size, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::PagingConfig;
use crate::paging::PageRequest;

/// Paging, sorting and filtering parameters as sent by clients
///
/// Every parameter is optional. Page index and size are signed so that
/// negative values reach validation and come back as a 400 with a useful
/// message rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Zero-based page index. None defaults to 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<i64>,

    /// Records per page. None defaults to the configured page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,

    /// Field name to sort by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<String>,

    /// `asc` or `desc`; anything else sorts ascending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    /// Field name to filter on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_column: Option<String>,

    /// Text the filter field must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_query: Option<String>,
}

impl ListQuery {
    /// Create an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page index
    #[must_use]
    pub fn with_page_index(mut self, page_index: i64) -> Self {
        self.page_index = Some(page_index);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the sort column and order
    #[must_use]
    pub fn with_sort(mut self, column: impl Into<String>, order: impl Into<String>) -> Self {
        self.sort_column = Some(column.into());
        self.sort_order = Some(order.into());
        self
    }

    /// Set the filter column and query
    #[must_use]
    pub fn with_filter(mut self, column: impl Into<String>, query: impl Into<String>) -> Self {
        self.filter_column = Some(column.into());
        self.filter_query = Some(query.into());
        self
    }

    /// Build the engine request, filling in defaults
    #[must_use]
    pub fn to_request(&self, defaults: &PagingConfig) -> PageRequest {
        PageRequest {
            page_index: self.page_index.unwrap_or(0),
            page_size: self.page_size.unwrap_or(defaults.default_page_size),
            sort_column: self.sort_column.clone(),
            sort_order: self.sort_order.clone(),
            filter_column: self.filter_column.clone(),
            filter_query: self.filter_query.clone(),
        }
    }
}
