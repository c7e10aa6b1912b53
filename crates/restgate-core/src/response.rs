//! Response construction: success serialization and error rendering.

use std::collections::HashMap;

use http::StatusCode;
use restgate_model::{RestError, RestResponse};
use serde::Serialize;

/// Serialize a handler's value into a 200 response.
///
/// A serialization failure converts to an internal error rather than
/// escaping the dispatch boundary.
pub fn json_response<T: Serialize>(
    value: &T,
    headers: HashMap<String, String>,
) -> Result<RestResponse, RestError> {
    let body = serde_json::to_string(value).map_err(RestError::internal)?;
    Ok(RestResponse::new(StatusCode::OK, headers, body))
}

/// Render a typed failure as its canonical wire response.
///
/// The body is always a single-field JSON object: `{"message": "..."}`.
#[must_use]
pub fn error_response(error: &RestError, headers: HashMap<String, String>) -> RestResponse {
    let body = serde_json::json!({ "message": error.to_string() }).to_string();
    RestResponse::new(error.status(), headers, body)
}

/// The default OPTIONS response: an empty JSON object.
#[must_use]
pub fn empty_object_response(headers: HashMap<String, String>) -> RestResponse {
    RestResponse::new(StatusCode::OK, headers, "{}")
}
