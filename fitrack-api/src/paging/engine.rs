//! Pagination engine
//!
//! [`paginate`] is the single entry point list endpoints call. It validates
//! the page window, builds the filter and ordering from the request's column
//! names, asks the source for the filtered count and for one page, and
//! assembles the [`ApiResult`].
//!
//! The source is skipped entirely when the filter can match nothing, and the
//! page fetch is skipped when the requested page starts past the filtered
//! total.

use super::error::PagingError;
use super::field::Record;
use super::filter::Filter;
use super::ordering::Ordering;
use super::request::PageRequest;
use super::result::ApiResult;
use super::source::{PageQuery, RecordSource};

/// Produce one page of `source` as described by `request`
///
/// # Errors
///
/// - [`PagingError::InvalidPageIndex`] / [`PagingError::InvalidPageSize`]
///   when the window is invalid; the source is not touched.
/// - [`PagingError::Source`] when the source fails, unchanged.
///
/// Unknown sort columns are ignored. Unknown filter columns and filter text
/// that does not parse for the column's kind produce an empty page.
///
/// # Example
///
/// ```rust
/// # async fn demo() -> Result<(), fitrack_api::paging::PagingError> {
/// use fitrack_api::models::Equipment;
/// use fitrack_api::paging::{paginate, PageRequest};
///
/// let equipment = vec![
///     Equipment::new(1, "Pull-up bar"),
///     Equipment::new(2, "Barbell"),
///     Equipment::new(3, "Bench"),
/// ];
///
/// let request = PageRequest::new(0, 2)
///     .with_sort("name", "asc")
///     .with_filter("name", "b");
/// let page = paginate(&equipment, &request).await?;
///
/// assert_eq!(page.total_count(), 3);
/// assert_eq!(page.total_pages(), 2);
/// assert_eq!(page.data()[0].name, "Barbell");
/// assert!(page.has_next_page());
/// # Ok(())
/// # }
/// ```
pub async fn paginate<T, S>(source: &S, request: &PageRequest) -> Result<ApiResult<T>, PagingError>
where
    T: Record,
    S: RecordSource<T> + ?Sized,
{
    let window = request.window()?;

    let filter = Filter::<T>::build(
        request.filter_column.as_deref(),
        request.filter_query.as_deref(),
    );
    let ordering = Ordering::<T>::build(
        request.sort_column.as_deref(),
        request.sort_order.as_deref(),
    );

    let total_count = if filter.matches_nothing() {
        0
    } else {
        source.count(&filter).await?
    };

    let query = PageQuery {
        filter,
        ordering,
        window,
    };
    let data = if window.offset() >= total_count {
        Vec::new()
    } else {
        let mut data = source.fetch(&query).await?;
        data.truncate(usize::try_from(window.limit()).unwrap_or(usize::MAX));
        data
    };

    Ok(finish(data, &query, total_count))
}

fn finish<T: Record>(data: Vec<T>, query: &PageQuery<T>, total_count: u64) -> ApiResult<T> {
    let result = ApiResult::assemble(data, query.window, total_count, &query.filter, &query.ordering);
    tracing::debug!(
        record = T::RECORD_TYPE,
        page_index = result.page_index(),
        page_size = result.page_size(),
        returned = result.data().len(),
        total_count = result.total_count(),
        total_pages = result.total_pages(),
        "Page assembled"
    );
    result
}
