//! # fitrack-api
//!
//! Fitness-tracking REST backend: exercises, workouts, muscles, equipment and
//! body weights served through list endpoints that page, sort and filter by
//! caller-supplied column names.
//!
//! ## Features
//!
//! - **Typed field tables**: each record type declares its sortable and
//!   filterable fields once; lookups by name are cached process-wide
//! - **Safe degradation**: unknown sort columns are ignored, unknown filter
//!   columns yield an empty page, only bad page parameters are errors
//! - **Push-down**: record sources receive the filter, ordering and page
//!   window, so a database-backed source only materializes one page
//! - **HTTP boundary** (feature `http`): query binding, error status mapping
//!   and JSON responses for axum
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitrack_api::prelude::*;
//! use fitrack_api::models::Exercise;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let exercises: Vec<Exercise> = Vec::new();
//!     let request = PageRequest::new(0, config.paging.default_page_size)
//!         .with_sort("name", "asc")
//!         .with_filter("difficulty", "beginner");
//!
//!     let page = paginate(&exercises, &request).await?;
//!     println!("{} of {} exercises", page.data().len(), page.total_count());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod paging;

#[cfg(feature = "http")]
pub mod handlers;

/// Commonly used types
pub mod prelude {
    pub use crate::config::{Config, PagingConfig, ServiceConfig};
    pub use crate::error::{Error, Result};
    pub use crate::observability::init_tracing;
    pub use crate::paging::{
        paginate, ApiResult, FieldSet, Filter, Ordering, PageQuery, PageRequest, PagingError,
        Record, RecordSource, SortDirection, SourceError, SourceResult,
    };

    #[cfg(feature = "http")]
    pub use crate::handlers::{ApiError, ApiErrorKind, ListQuery};

    pub use tracing::{debug, error, info, trace, warn};
}
