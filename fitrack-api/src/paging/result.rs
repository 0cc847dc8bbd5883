//! Result envelope
//!
//! [`ApiResult`] is one page of records plus the metadata clients need to
//! render pagination controls. It is assembled only by the pagination engine
//! and is immutable afterwards.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "data": [{ "id": 2, "name": "Pull Up" }, { "id": 3, "name": "Push Up" }],
//!   "pageIndex": 0,
//!   "pageSize": 10,
//!   "totalCount": 2,
//!   "totalPages": 1,
//!   "hasPreviousPage": false,
//!   "hasNextPage": false,
//!   "sortColumn": "name",
//!   "sortOrder": "asc",
//!   "filterColumn": "name",
//!   "filterQuery": "pu"
//! }
//! ```

use serde::Serialize;

use super::filter::Filter;
use super::ordering::Ordering;
use super::request::{PageWindow, SortDirection};

/// One page of records with pagination metadata
///
/// Serialize-only: the envelope's invariants hold because the engine is the
/// only thing that builds one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    data: Vec<T>,
    page_index: u64,
    page_size: u64,
    total_count: u64,
    total_pages: u64,
    has_previous_page: bool,
    has_next_page: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_order: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_query: Option<String>,
}

impl<T> ApiResult<T> {
    /// Assemble the envelope for one page
    ///
    /// `data` must already be the filtered, ordered slice for `window`.
    pub(crate) fn assemble(
        data: Vec<T>,
        window: PageWindow,
        total_count: u64,
        filter: &Filter<T>,
        ordering: &Ordering<T>,
    ) -> Self {
        let total_pages = total_pages(total_count, window.size);
        Self {
            data,
            page_index: window.index,
            page_size: window.size,
            total_count,
            total_pages,
            has_previous_page: window.index > 0,
            has_next_page: window.index.saturating_add(1) < total_pages,
            sort_column: ordering.field().map(|field| field.name().to_string()),
            sort_order: ordering.direction(),
            filter_column: filter.field().map(|field| field.name().to_string()),
            filter_query: filter.query().map(str::to_string),
        }
    }

    /// The records on this page
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Take the records out of the envelope
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Zero-based index of this page
    #[must_use]
    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    /// Requested page size
    #[must_use]
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of records matching the filter, across all pages
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Number of pages at this page size
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Whether a page precedes this one
    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    /// Whether a page follows this one
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Canonical name of the applied sort column
    #[must_use]
    pub fn sort_column(&self) -> Option<&str> {
        self.sort_column.as_deref()
    }

    /// Applied sort direction
    #[must_use]
    pub fn sort_order(&self) -> Option<SortDirection> {
        self.sort_order
    }

    /// Canonical name of the applied filter column
    #[must_use]
    pub fn filter_column(&self) -> Option<&str> {
        self.filter_column.as_deref()
    }

    /// Applied filter query
    #[must_use]
    pub fn filter_query(&self) -> Option<&str> {
        self.filter_query.as_deref()
    }

    /// Convert every record on the page, keeping the metadata
    ///
    /// Used to turn a page of entities into a page of response DTOs.
    ///
    /// # Example
    ///
    /// ```rust
    /// # async fn demo() -> Result<(), fitrack_api::paging::PagingError> {
    /// use fitrack_api::models::Equipment;
    /// use fitrack_api::paging::{paginate, PageRequest};
    ///
    /// let equipment = vec![Equipment::new(1, "Kettlebell"), Equipment::new(2, "Barbell")];
    /// let page = paginate(&equipment, &PageRequest::default()).await?;
    /// let names = page.map(|item| item.name);
    /// assert_eq!(names.data(), ["Kettlebell", "Barbell"]);
    /// assert_eq!(names.total_count(), 2);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ApiResult<U>
    where
        F: FnMut(T) -> U,
    {
        ApiResult {
            data: self.data.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
            sort_column: self.sort_column,
            sort_order: self.sort_order,
            filter_column: self.filter_column,
            filter_query: self.filter_query,
        }
    }
}

/// Number of pages needed for `total_count` records
fn total_pages(total_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Exercise;

    fn window(index: u64, size: u64) -> PageWindow {
        PageWindow { index, size }
    }

    fn page(data: Vec<u32>, index: u64, size: u64, total: u64) -> ApiResult<u32> {
        ApiResult::assemble(data, window(index, size), total, &Filter::All, &Ordering::Unordered)
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(5, 0), 0);
        assert_eq!(total_pages(u64::MAX, 1), u64::MAX);
    }

    #[test]
    fn test_first_page_flags() {
        let result = page(vec![1, 2, 3, 4, 5], 0, 5, 12);
        assert_eq!(result.total_pages(), 3);
        assert!(!result.has_previous_page());
        assert!(result.has_next_page());
    }

    #[test]
    fn test_middle_page_flags() {
        let result = page(vec![6, 7, 8, 9, 10], 1, 5, 12);
        assert!(result.has_previous_page());
        assert!(result.has_next_page());
    }

    #[test]
    fn test_last_page_flags() {
        let result = page(vec![11, 12], 2, 5, 12);
        assert!(result.has_previous_page());
        assert!(!result.has_next_page());
    }

    #[test]
    fn test_empty_result_flags() {
        let result = page(Vec::new(), 0, 10, 0);
        assert_eq!(result.total_pages(), 0);
        assert!(!result.has_previous_page());
        assert!(!result.has_next_page());
    }

    #[test]
    fn test_serializes_camel_case_without_unapplied_echoes() {
        let result = page(vec![1], 0, 10, 1);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["pageIndex"], 0);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalCount"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["hasPreviousPage"], false);
        assert_eq!(json["hasNextPage"], false);
        assert!(json.get("sortColumn").is_none());
        assert!(json.get("sortOrder").is_none());
        assert!(json.get("filterColumn").is_none());
        assert!(json.get("filterQuery").is_none());
    }

    #[test]
    fn test_echoes_applied_parameters() {
        let filter = Filter::<Exercise>::build(Some("NAME"), Some("pu"));
        let ordering = Ordering::<Exercise>::build(Some("created_at"), Some("DESC"));
        let result = ApiResult::assemble(Vec::new(), window(0, 10), 0, &filter, &ordering);
        assert_eq!(result.sort_column(), Some("createdAt"));
        assert_eq!(result.sort_order(), Some(SortDirection::Desc));
        assert_eq!(result.filter_column(), Some("name"));
        assert_eq!(result.filter_query(), Some("pu"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sortOrder"], "desc");
        assert_eq!(json["filterColumn"], "name");
    }

    #[test]
    fn test_map_keeps_metadata() {
        let result = page(vec![1, 2], 1, 2, 6).map(|n| n * 10);
        assert_eq!(result.data(), &[10, 20]);
        assert_eq!(result.page_index(), 1);
        assert_eq!(result.total_pages(), 3);
        assert!(result.has_next_page());
        assert_eq!(result.into_data(), vec![10, 20]);
    }

    #[test]
    fn test_serializes_data_in_page_order() {
        let result = page(vec![7, 3, 5], 0, 3, 3);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["data"], serde_json::json!([7, 3, 5]));
    }
}
