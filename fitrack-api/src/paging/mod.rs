//! Generic result paging
//!
//! Turns a sequence of records plus caller-supplied, string-typed paging,
//! sorting and filtering parameters into one page of results with
//! pagination metadata.
//!
//! # Overview
//!
//! - [`Record`] / [`FieldSet`]: per-type table of named, typed fields
//! - [`resolve`]: cached, case-insensitive lookup of a field by name
//! - [`Filter`] / [`Ordering`]: predicate and comparator built from column names
//! - [`RecordSource`]: the sequence being paged (in memory or remote)
//! - [`paginate`]: validate, count, fetch one page, assemble an [`ApiResult`]
//!
//! # Example
//!
//! ```rust
//! # async fn demo() -> Result<(), fitrack_api::paging::PagingError> {
//! use fitrack_api::models::{BodyWeight, WeightUnit};
//! use fitrack_api::paging::{paginate, PageRequest};
//!
//! let entries = vec![
//!     BodyWeight::new(1, "usr_1", 70.0, WeightUnit::Kilograms, "2024-01-01".parse().unwrap()),
//!     BodyWeight::new(2, "usr_1", 62.0, WeightUnit::Kilograms, "2024-01-02".parse().unwrap()),
//!     BodyWeight::new(3, "usr_1", 85.0, WeightUnit::Kilograms, "2024-01-03".parse().unwrap()),
//! ];
//!
//! let request = PageRequest::new(0, 10).with_sort("weight", "desc");
//! let page = paginate(&entries, &request).await?;
//! let weights: Vec<f64> = page.data().iter().map(|e| e.weight).collect();
//! assert_eq!(weights, vec![85.0, 70.0, 62.0]);
//! # Ok(())
//! # }
//! ```

mod engine;
mod error;
mod field;
mod filter;
mod ordering;
mod request;
mod resolver;
mod result;
mod source;

pub use engine::paginate;
pub use error::{PagingError, SourceError, SourceErrorKind, SourceOperation};
pub use field::{Accessor, FieldDescriptor, FieldEnum, FieldSet, FieldValue, Record, ValueKind};
pub use filter::{DateQuery, Filter, FilterOperand};
pub use ordering::Ordering;
pub use request::{PageRequest, PageWindow, SortDirection, DEFAULT_PAGE_SIZE};
pub use resolver::{is_resolvable, resolve};
pub use result::ApiResult;
pub use source::{PageQuery, RecordSource, SourceResult};
