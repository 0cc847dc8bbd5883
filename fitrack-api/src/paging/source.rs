//! Record source trait
//!
//! A [`RecordSource`] is the sequence of records handed to the pagination
//! engine, already narrowed by business rules (owner, date range, ...). The
//! engine never pulls the whole sequence: it asks the source to count the
//! filtered records and to materialize one page, passing the filter and
//! ordering as inspectable values. A database-backed source translates them
//! into its own query; in-memory sequences (`[T]`, `Vec<T>`) evaluate them
//! directly.
//!
//! Both strategies must agree: for the same records and query, `fetch` on a
//! remote source and on an in-memory copy return the same page.
//!
//! # Example
//!
//! ```rust,ignore
//! use fitrack_api::paging::{Filter, PageQuery, RecordSource, SourceResult};
//!
//! struct WorkoutTable {
//!     pool: PgPool,
//!     user_id: String,
//! }
//!
//! impl RecordSource<Workout> for WorkoutTable {
//!     async fn count(&self, filter: &Filter<Workout>) -> SourceResult<u64> {
//!         // SELECT COUNT(*) ... WHERE user_id = $1 AND <filter>
//!         todo!()
//!     }
//!
//!     async fn fetch(&self, query: &PageQuery<Workout>) -> SourceResult<Vec<Workout>> {
//!         // SELECT ... ORDER BY <ordering> OFFSET <offset> LIMIT <limit>
//!         todo!()
//!     }
//! }
//! ```

use std::future::Future;

use super::error::SourceError;
use super::field::Record;
use super::filter::Filter;
use super::ordering::Ordering;
use super::request::PageWindow;

/// Result type for record source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// One page worth of work for a [`RecordSource`]
///
/// Apply `filter`, then `ordering`, then skip [`offset`](Self::offset)
/// records and take at most [`limit`](Self::limit).
#[derive(Debug, Clone)]
pub struct PageQuery<T> {
    /// Records to keep
    pub filter: Filter<T>,
    /// Order of the kept records
    pub ordering: Ordering<T>,
    /// Page position
    pub window: PageWindow,
}

impl<T> PageQuery<T> {
    /// Number of filtered, ordered records to skip
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.window.offset()
    }

    /// Maximum number of records to return
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.window.limit()
    }
}

/// A sequence of records the pagination engine can page over
///
/// Uses RPITIT, so implementations write plain `async fn`.
pub trait RecordSource<T: Record>: Send + Sync {
    /// Count the records matching `filter`
    fn count(&self, filter: &Filter<T>) -> impl Future<Output = SourceResult<u64>> + Send;

    /// Materialize the page described by `query`
    ///
    /// Returning more than [`PageQuery::limit`] records is tolerated; the
    /// engine truncates the result.
    fn fetch(&self, query: &PageQuery<T>) -> impl Future<Output = SourceResult<Vec<T>>> + Send;
}

impl<T: Record + Clone> RecordSource<T> for [T] {
    async fn count(&self, filter: &Filter<T>) -> SourceResult<u64> {
        let matching = self.iter().filter(|record| filter.matches(record)).count();
        Ok(u64::try_from(matching).unwrap_or(u64::MAX))
    }

    async fn fetch(&self, query: &PageQuery<T>) -> SourceResult<Vec<T>> {
        let mut matching: Vec<&T> = self
            .iter()
            .filter(|record| query.filter.matches(record))
            .collect();
        query.ordering.sort_refs(&mut matching);

        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit()).unwrap_or(usize::MAX);
        Ok(matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

impl<T: Record + Clone> RecordSource<T> for Vec<T> {
    async fn count(&self, filter: &Filter<T>) -> SourceResult<u64> {
        self.as_slice().count(filter).await
    }

    async fn fetch(&self, query: &PageQuery<T>) -> SourceResult<Vec<T>> {
        self.as_slice().fetch(query).await
    }
}
