//! HTTP rendering of the result envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::paging::ApiResult;

impl<T: Serialize> IntoResponse for ApiResult<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
