//! Page request types
//!
//! A [`PageRequest`] carries the caller-supplied paging, sorting and filtering
//! parameters of one list call. Page index and size are validated into a
//! [`PageWindow`] before any filtering or sorting happens.
//!
//! # Example
//!
//! ```rust
//! use fitrack_api::paging::{PageRequest, SortDirection};
//!
//! let request = PageRequest::new(2, 25)
//!     .with_sort("date", "DESC")
//!     .with_filter("name", "push");
//!
//! let window = request.window().unwrap();
//! assert_eq!(window.offset(), 50);
//! assert_eq!(request.sort_direction(), SortDirection::Desc);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::PagingError;

/// Page size used when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Direction for ordering results
///
/// # Example
///
/// ```rust
/// use fitrack_api::paging::SortDirection;
///
/// assert_eq!(SortDirection::parse(Some("DESC")), SortDirection::Desc);
/// assert_eq!(SortDirection::parse(Some("sideways")), SortDirection::Asc);
/// assert_eq!(SortDirection::parse(None), SortDirection::Asc);
/// assert_eq!(format!("{}", SortDirection::Desc), "desc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Sort in ascending order (A-Z, 0-9, oldest first)
    #[default]
    Asc,
    /// Sort in descending order (Z-A, 9-0, newest first)
    Desc,
}

impl SortDirection {
    /// Interpret a caller-supplied sort order
    ///
    /// `"desc"` in any case means descending; everything else, including an
    /// absent value, means ascending.
    #[must_use]
    pub fn parse(order: Option<&str>) -> Self {
        match order {
            Some(order) if order.trim().eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Validated page position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Zero-based page index
    pub index: u64,
    /// Maximum number of records on the page (at least 1)
    pub size: u64,
}

impl PageWindow {
    /// Number of records to skip
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.index.saturating_mul(self.size)
    }

    /// Maximum number of records to take
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.size
    }
}

/// Paging, sorting and filtering parameters for one list call
///
/// Column names and sort order are untrusted text; they are interpreted
/// against the record type when the page is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page_index: i64,
    /// Number of records per page
    pub page_size: i64,
    /// Field to sort by
    pub sort_column: Option<String>,
    /// `"asc"` or `"desc"`
    pub sort_order: Option<String>,
    /// Field to filter on
    pub filter_column: Option<String>,
    /// Text the filter field must match
    pub filter_query: Option<String>,
}

impl PageRequest {
    /// Create a request for one page without sorting or filtering
    #[must_use]
    pub fn new(page_index: i64, page_size: i64) -> Self {
        Self {
            page_index,
            page_size,
            ..Self::default()
        }
    }

    /// Set the sort column and order
    #[must_use]
    pub fn with_sort(mut self, column: impl Into<String>, order: impl Into<String>) -> Self {
        self.sort_column = Some(column.into());
        self.sort_order = Some(order.into());
        self
    }

    /// Set only the sort column, leaving the order at its default
    #[must_use]
    pub fn with_sort_column(mut self, column: impl Into<String>) -> Self {
        self.sort_column = Some(column.into());
        self
    }

    /// Set the filter column and query
    #[must_use]
    pub fn with_filter(mut self, column: impl Into<String>, query: impl Into<String>) -> Self {
        self.filter_column = Some(column.into());
        self.filter_query = Some(query.into());
        self
    }

    /// Validate the page index and size
    ///
    /// # Errors
    ///
    /// [`PagingError::InvalidPageIndex`] when the index is negative and
    /// [`PagingError::InvalidPageSize`] when the size is zero or negative.
    pub fn window(&self) -> Result<PageWindow, PagingError> {
        let index =
            u64::try_from(self.page_index).map_err(|_| PagingError::InvalidPageIndex(self.page_index))?;
        let size = u64::try_from(self.page_size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or(PagingError::InvalidPageSize(self.page_size))?;
        Ok(PageWindow { index, size })
    }

    /// The requested sort direction
    #[must_use]
    pub fn sort_direction(&self) -> SortDirection {
        SortDirection::parse(self.sort_order.as_deref())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort_column: None,
            sort_order: None,
            filter_column: None,
            filter_query: None,
        }
    }
}
