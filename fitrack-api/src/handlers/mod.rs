//! HTTP boundary for list endpoints
//!
//! - [`ListQuery`]: query-string binding for paging, sorting and filtering
//! - [`ApiError`]: status mapping for paging failures
//! - [`list`]: one call from a bound query to a page of records
//!
//! [`ApiResult`] renders itself as a `200 OK` JSON body.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use axum::{extract::{Query, State}, routing::get, Router};
//! use fitrack_api::config::PagingConfig;
//! use fitrack_api::handlers::{self, ApiError, ListQuery};
//! use fitrack_api::models::Exercise;
//! use fitrack_api::paging::ApiResult;
//!
//! #[derive(Clone)]
//! struct AppState {
//!     exercises: Arc<Vec<Exercise>>,
//!     paging: PagingConfig,
//! }
//!
//! async fn list_exercises(
//!     State(state): State<AppState>,
//!     Query(query): Query<ListQuery>,
//! ) -> Result<ApiResult<Exercise>, ApiError> {
//!     handlers::list(state.exercises.as_slice(), &query, &state.paging).await
//! }
//!
//! let state = AppState {
//!     exercises: Arc::new(Vec::new()),
//!     paging: PagingConfig::default(),
//! };
//! let app: Router = Router::new()
//!     .route("/exercises", get(list_exercises))
//!     .with_state(state);
//! ```
//!
//! [`ApiResult`]: crate::paging::ApiResult

mod error;
mod query;
mod response;

pub use error::{ApiError, ApiErrorKind};
pub use query::ListQuery;

use crate::config::PagingConfig;
use crate::paging::{paginate, ApiResult, Record, RecordSource};

/// Page `source` according to a bound list query
///
/// # Errors
///
/// [`ApiError`] tagged with the record type when the page parameters are
/// invalid or the source fails.
pub async fn list<T, S>(
    source: &S,
    query: &ListQuery,
    defaults: &PagingConfig,
) -> Result<ApiResult<T>, ApiError>
where
    T: Record,
    S: RecordSource<T> + ?Sized,
{
    let request = query.to_request(defaults);
    paginate(source, &request)
        .await
        .map_err(|err| ApiError::from(err).with_record_type(T::RECORD_TYPE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Muscle, MuscleGroup};

    fn muscles() -> Vec<Muscle> {
        vec![
            Muscle::new(1, "Pectoralis", MuscleGroup::Chest),
            Muscle::new(2, "Latissimus", MuscleGroup::Back),
            Muscle::new(3, "Deltoid", MuscleGroup::Shoulders),
        ]
    }

    #[tokio::test]
    async fn test_list_applies_defaults() {
        let page = list(&muscles(), &ListQuery::new(), &PagingConfig::default())
            .await
            .unwrap();
        assert_eq!(page.page_size(), 10);
        assert_eq!(page.total_count(), 3);
    }

    #[tokio::test]
    async fn test_list_tags_errors_with_record_type() {
        let query = ListQuery::new().with_page_size(0);
        let error = list(&muscles(), &query, &PagingConfig::default())
            .await
            .unwrap_err();
        assert_eq!(error.kind, ApiErrorKind::BadRequest);
        assert_eq!(error.record_type.as_deref(), Some("Muscle"));
    }
}
